//! Tangent-space construction from the UV parameterization.
//!
//! Face tangents and bitangents solve the 2×2 UV-gradient linear system
//! per triangle. Vertex tangents average the adjacent face tangents and
//! are Gram-Schmidt-orthogonalized against the vertex normal; vertex
//! bitangents are derived as `cross(tangent, normal)` rather than
//! averaged, which keeps the per-vertex frame orthonormal even where
//! the face-level bitangents disagree.

use trigon_math::Vec3;
use trigon_types::constants::UV_DET_EPSILON;

use crate::mesh::Mesh;

/// Computes per-face tangents and bitangents from the UV gradients.
///
/// For face (A, B, C): with `edge1 = B-A`, `edge2 = C-A` and UV deltas
/// `duv1`, `duv2`, the determinant `duv1.x*duv2.y - duv2.x*duv1.y`
/// inverts the system. A near-singular determinant (|det| below
/// [`UV_DET_EPSILON`]) marks the parameterization degenerate and the
/// face contributes zero vectors instead of failing. Results are not
/// normalized at the face level.
pub fn compute_face_tangents(mesh: &mut Mesh) {
    let mut tangents = Vec::with_capacity(mesh.face_count());
    let mut bitangents = Vec::with_capacity(mesh.face_count());

    for f in 0..mesh.face_count() {
        let face = mesh.faces[f];
        let a = mesh.vertices[face.a as usize];
        let b = mesh.vertices[face.b as usize];
        let c = mesh.vertices[face.c as usize];

        let edge1 = b.position - a.position;
        let edge2 = c.position - a.position;
        let duv1 = b.uv - a.uv;
        let duv2 = c.uv - a.uv;

        let det = duv1.x * duv2.y - duv2.x * duv1.y;
        let f_inv = if det.abs() < UV_DET_EPSILON {
            0.0
        } else {
            1.0 / det
        };

        tangents.push(f_inv * (duv2.y * edge1 - duv1.y * edge2));
        bitangents.push(f_inv * (-duv2.x * edge1 + duv1.x * edge2));
    }

    mesh.face_tangents = tangents;
    mesh.face_bitangents = bitangents;
}

/// Computes per-vertex tangents and bitangents.
///
/// The tangent is the unweighted average of the adjacent faces' tangents
/// (same deduplicated adjacency as normals), orthogonalized against the
/// vertex normal and normalized. The bitangent is strictly derived:
/// `normalize(cross(tangent, normal))`. Vertex normals and adjacency
/// must exist before this runs.
pub fn compute_vertex_tangents(mesh: &mut Mesh) {
    debug_assert_eq!(mesh.adjacency.len(), mesh.vertex_count());
    debug_assert_eq!(mesh.face_tangents.len(), mesh.face_count());

    for i in 0..mesh.vertex_count() {
        let mut tangent = Vec3::ZERO;
        for &face_index in &mesh.adjacency[i] {
            tangent += mesh.face_tangents[face_index as usize];
        }
        tangent /= mesh.adjacency[i].len() as f32;

        let normal = mesh.vertices[i].normal;
        // Gram-Schmidt: remove the component along the normal.
        tangent -= normal * tangent.dot(normal);
        let bitangent = tangent.cross(normal);

        mesh.vertices[i].tangent = tangent / tangent.length();
        mesh.vertices[i].bitangent = bitangent / bitangent.length();
    }
}
