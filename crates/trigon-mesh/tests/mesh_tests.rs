//! Integration tests for trigon-mesh.

use trigon_math::{Vec2, Vec3};
use trigon_mesh::generators::{quad_grid, uv_sphere};
use trigon_mesh::{adjacency, lines, normalize, normals, tangents, uv};
use trigon_mesh::{Face, Line, Mesh, UvProjection, Vertex};

const TOL: f32 = 1e-5;

/// Runs the attribute stages in pipeline order on an already-built mesh.
fn derive(mesh: &mut Mesh, projection: UvProjection) {
    normalize::center_and_rescale(mesh);
    uv::apply_uv_projection(mesh, projection);
    normals::compute_face_normals(mesh);
    adjacency::build_adjacency(mesh);
    normals::compute_vertex_normals(mesh);
    tangents::compute_face_tangents(mesh);
    tangents::compute_vertex_tangents(mesh);
    lines::build_attribute_lines(mesh);
}

fn unit_square() -> Mesh {
    // CCW when viewed from +Z; split into (0,1,2) and (0,2,3).
    let positions = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 1.0, 0.0),
    ];
    let uvs = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let vertices = positions
        .iter()
        .zip(uvs)
        .map(|(&position, uv)| Vertex {
            position,
            uv,
            ..Vertex::default()
        })
        .collect();
    Mesh::from_parts(vertices, vec![Face::new(0, 1, 2), Face::new(0, 2, 3)])
}

// ─── Data Model Tests ─────────────────────────────────────────

#[test]
fn basic_counts() {
    let mesh = unit_square();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 2);
    assert_eq!(mesh.index_count(), 6);
}

#[test]
fn vertex_slot_layout() {
    let mut vert = Vertex::default();
    for slot in 0..Vertex::FLOAT_SLOTS {
        vert.set_slot(slot, slot as f32);
    }
    assert_eq!(vert.position, Vec3::new(0.0, 1.0, 2.0));
    assert_eq!(vert.normal, Vec3::new(3.0, 4.0, 5.0));
    assert_eq!(vert.tangent, Vec3::new(6.0, 7.0, 8.0));
    assert_eq!(vert.bitangent, Vec3::new(9.0, 10.0, 11.0));
    assert_eq!(vert.uv, Vec2::new(12.0, 13.0));
}

#[test]
fn vertex_slot_out_of_range_ignored() {
    let mut vert = Vertex::default();
    vert.set_slot(14, 99.0);
    assert_eq!(vert, Vertex::default());
}

#[test]
fn validate_ok() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = unit_square();
    mesh.faces[0].c = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_repeated_indices() {
    let mut mesh = unit_square();
    mesh.faces[0] = Face::new(0, 0, 1);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_misaligned_attributes() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);
    mesh.face_normals.pop();
    assert!(mesh.validate().is_err());
}

#[test]
fn mesh_serde_round_trip() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: Mesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.vertex_count(), 4);
    assert_eq!(recovered.faces, mesh.faces);
    assert_eq!(recovered.line_magnitude(), mesh.line_magnitude());
}

// ─── Normalization Tests ──────────────────────────────────────

#[test]
fn centroid_is_origin_after_normalize() {
    let mut mesh = uv_sphere(3.0, 8, 12);
    // Shift the sphere off-center first.
    for vert in &mut mesh.vertices {
        vert.position += Vec3::new(5.0, -2.0, 1.0);
    }
    normalize::center_and_rescale(&mut mesh);

    let mut centroid = Vec3::ZERO;
    for vert in &mesh.vertices {
        centroid += vert.position;
    }
    centroid /= mesh.vertex_count() as f32;
    assert!(centroid.length() < TOL, "centroid {centroid:?}");
}

#[test]
fn max_radius_is_one_after_normalize() {
    let mut mesh = quad_grid(3, 3, 7.0, 3.0);
    normalize::center_and_rescale(&mut mesh);

    let max_radius = mesh
        .vertices
        .iter()
        .map(|v| v.position.length())
        .fold(0.0f32, f32::max);
    assert!((max_radius - 1.0).abs() < TOL, "max radius {max_radius}");
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn face_normals_are_unit_length() {
    let mut mesh = uv_sphere(1.0, 6, 8);
    normalize::center_and_rescale(&mut mesh);
    normals::compute_face_normals(&mut mesh);
    for (i, normal) in mesh.face_normals.iter().enumerate() {
        assert!(
            (normal.length() - 1.0).abs() < TOL,
            "face {i} normal {normal:?}"
        );
    }
}

#[test]
fn unit_square_face_and_vertex_normals() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);

    for normal in &mesh.face_normals {
        assert!((*normal - Vec3::Z).length() < TOL);
    }
    // Coplanar duplicate contributions collapse to one, so the average
    // is the face normal exactly.
    for vert in mesh.vertices() {
        assert_eq!(vert.normal, Vec3::Z);
    }
}

#[test]
fn coplanar_adjacency_deduplicated() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);

    // Shared vertices 0 and 2 touch both triangles, but identical face
    // normals leave only one adjacency entry.
    for list in &mesh.adjacency {
        assert_eq!(list.len(), 1, "adjacency {:?}", mesh.adjacency);
    }
}

#[test]
fn distinct_normals_not_deduplicated() {
    // Two triangles sharing an edge, folded 90° across it.
    let vertices = vec![
        Vertex { position: Vec3::new(0.0, 0.0, 0.0), ..Vertex::default() },
        Vertex { position: Vec3::new(1.0, 0.0, 0.0), ..Vertex::default() },
        Vertex { position: Vec3::new(0.0, 1.0, 0.0), ..Vertex::default() },
        Vertex { position: Vec3::new(0.0, 0.0, 1.0), ..Vertex::default() },
    ];
    let faces = vec![Face::new(0, 1, 2), Face::new(0, 3, 1)];
    let mut mesh = Mesh::from_parts(vertices, faces);
    normals::compute_face_normals(&mut mesh);
    adjacency::build_adjacency(&mut mesh);

    // Vertices 0 and 1 are on the shared edge and keep both faces.
    assert_eq!(mesh.adjacency[0].len(), 2);
    assert_eq!(mesh.adjacency[1].len(), 2);
    assert_eq!(mesh.adjacency[2], vec![0]);
    assert_eq!(mesh.adjacency[3], vec![1]);
}

#[test]
fn sphere_vertex_normals_point_outward() {
    let mut mesh = uv_sphere(1.0, 8, 12);
    derive(&mut mesh, UvProjection::None);

    for vert in mesh.vertices() {
        if !vert.normal.is_finite() {
            continue; // unreferenced seam vertices average zero faces
        }
        let outward = vert.position.normalize();
        assert!(
            vert.normal.dot(outward) > 0.8,
            "normal {:?} vs outward {:?}",
            vert.normal,
            outward
        );
    }
}

// ─── Tangent Space Tests ──────────────────────────────────────

#[test]
fn quad_face_tangents_follow_uv_gradients() {
    let mut mesh = quad_grid(1, 1, 2.0, 2.0);
    normalize::center_and_rescale(&mut mesh);
    normals::compute_face_normals(&mut mesh);
    tangents::compute_face_tangents(&mut mesh);

    // U increases along +X and V along +Y, so tangents point along +X
    // and bitangents along +Y (unnormalized at the face level).
    for tangent in &mesh.face_tangents {
        assert!(tangent.normalize().dot(Vec3::X) > 1.0 - TOL, "{tangent:?}");
    }
    for bitangent in &mesh.face_bitangents {
        assert!(bitangent.normalize().dot(Vec3::Y) > 1.0 - TOL, "{bitangent:?}");
    }
}

#[test]
fn degenerate_uvs_yield_zero_face_tangents() {
    let mut mesh = unit_square();
    // Collapse all UVs to a point: the 2x2 system is singular.
    for vert in &mut mesh.vertices {
        vert.uv = Vec2::new(0.5, 0.5);
    }
    normalize::center_and_rescale(&mut mesh);
    normals::compute_face_normals(&mut mesh);
    tangents::compute_face_tangents(&mut mesh);

    for tangent in &mesh.face_tangents {
        assert_eq!(*tangent, Vec3::ZERO);
    }
    for bitangent in &mesh.face_bitangents {
        assert_eq!(*bitangent, Vec3::ZERO);
    }
}

#[test]
fn vertex_frame_is_orthonormal() {
    let mut mesh = quad_grid(2, 2, 2.0, 2.0);
    derive(&mut mesh, UvProjection::None);

    for (i, vert) in mesh.vertices().iter().enumerate() {
        assert!(
            (vert.tangent.length() - 1.0).abs() < TOL,
            "vertex {i} tangent {:?}",
            vert.tangent
        );
        assert!(
            vert.tangent.dot(vert.normal).abs() < TOL,
            "vertex {i} tangent not orthogonal to normal"
        );
        let derived = vert.tangent.cross(vert.normal).normalize();
        assert!(
            (vert.bitangent - derived).length() < TOL,
            "vertex {i} bitangent {:?} != {:?}",
            vert.bitangent,
            derived
        );
    }
}

#[test]
fn sphere_tangent_frames_orthonormal() {
    let mut mesh = uv_sphere(1.0, 8, 12);
    derive(&mut mesh, UvProjection::None);

    for vert in mesh.vertices() {
        if !vert.tangent.is_finite() {
            continue; // pole rows have degenerate UV area
        }
        assert!(vert.tangent.dot(vert.normal).abs() < 1e-4);
        assert!(vert.bitangent.dot(vert.normal).abs() < 1e-4);
        assert!(vert.bitangent.dot(vert.tangent).abs() < 1e-4);
    }
}

// ─── UV Projection Tests ──────────────────────────────────────

#[test]
fn projection_none_keeps_authored_uvs() {
    let mut mesh = quad_grid(1, 1, 2.0, 2.0);
    let before: Vec<Vec2> = mesh.vertices.iter().map(|v| v.uv).collect();
    uv::apply_uv_projection(&mut mesh, UvProjection::None);
    let after: Vec<Vec2> = mesh.vertices.iter().map(|v| v.uv).collect();
    assert_eq!(before, after);
}

#[test]
fn spherical_projection_overwrites_uvs() {
    let mut mesh = uv_sphere(1.0, 4, 6);
    normalize::center_and_rescale(&mut mesh);
    uv::apply_uv_projection(&mut mesh, UvProjection::Spherical);
    for vert in mesh.vertices() {
        assert!((0.0..=1.0).contains(&vert.uv.x), "{:?}", vert.uv);
        assert!((0.0..=1.0).contains(&vert.uv.y), "{:?}", vert.uv);
    }
}

#[test]
fn projection_does_not_touch_positions() {
    let mut mesh = uv_sphere(1.0, 4, 6);
    normalize::center_and_rescale(&mut mesh);
    let before: Vec<Vec3> = mesh.vertices.iter().map(|v| v.position).collect();
    uv::apply_uv_projection(&mut mesh, UvProjection::Planar);
    let after: Vec<Vec3> = mesh.vertices.iter().map(|v| v.position).collect();
    assert_eq!(before, after);
}

#[test]
fn projection_tags_round_trip() {
    for tag in UvProjection::TAGS {
        assert!(UvProjection::from_tag(tag).is_some(), "tag {tag}");
    }
    assert!(UvProjection::from_tag("cubic").is_none());
}

// ─── Debug Line Tests ─────────────────────────────────────────

#[test]
fn line_collections_sized_per_vertex_and_face() {
    let mut mesh = quad_grid(2, 2, 2.0, 2.0);
    derive(&mut mesh, UvProjection::None);

    let n = mesh.vertex_count();
    let f = mesh.face_count();
    assert_eq!(mesh.vertex_normal_lines.len(), n);
    assert_eq!(mesh.vertex_tangent_lines.len(), n);
    assert_eq!(mesh.vertex_bitangent_lines.len(), n);
    assert_eq!(mesh.face_normal_lines.len(), f);
    assert_eq!(mesh.face_tangent_lines.len(), f);
    assert_eq!(mesh.face_bitangent_lines.len(), f);
    assert_eq!(mesh.line_magnitude(), 1.0);
}

#[test]
fn vertex_lines_run_along_attributes() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);

    for (vert, line) in mesh.vertices().iter().zip(&mesh.vertex_normal_lines) {
        assert_eq!(line.start, vert.position);
        assert!((line.delta() - vert.normal).length() < TOL);
    }
}

#[test]
fn face_lines_start_at_centroids() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);

    for (f, line) in mesh.face_normal_lines.iter().enumerate() {
        assert!((line.start - mesh.face_centroid(f)).length() < TOL);
        assert!((line.delta() - mesh.face_normals[f]).length() < TOL);
    }
}

#[test]
fn rescale_composes_multiplicatively() {
    let mut once = quad_grid(2, 2, 2.0, 2.0);
    derive(&mut once, UvProjection::None);
    let mut twice = once.clone();

    once.set_line_magnitude(6.0);
    twice.set_line_magnitude(2.0);
    twice.set_line_magnitude(6.0);

    for (a, b) in once
        .vertex_normal_lines
        .iter()
        .zip(&twice.vertex_normal_lines)
    {
        assert!((a.end - b.end).length() < TOL, "{a:?} vs {b:?}");
    }
    assert_eq!(once.line_magnitude(), twice.line_magnitude());
}

#[test]
fn rescale_scales_deltas_not_starts() {
    let mut mesh = unit_square();
    derive(&mut mesh, UvProjection::None);
    let starts: Vec<Line> = mesh.face_normal_lines.clone();

    mesh.set_line_magnitude(0.25);

    for (before, after) in starts.iter().zip(&mesh.face_normal_lines) {
        assert_eq!(before.start, after.start);
        assert!((after.delta() - before.delta() * 0.25).length() < TOL);
    }
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_counts() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.face_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_uv_corners() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertices()[0].uv, Vec2::new(0.0, 0.0));
    assert_eq!(mesh.vertices()[8].uv, Vec2::new(1.0, 1.0));
}

#[test]
fn uv_sphere_counts() {
    let mesh = uv_sphere(1.0, 4, 6);
    assert_eq!(mesh.vertex_count(), 5 * 7);
    // 2 triangles per quad, minus one at each pole row.
    assert_eq!(mesh.face_count(), 4 * 6 * 2 - 2 * 6);
    assert!(mesh.validate().is_ok());
}
