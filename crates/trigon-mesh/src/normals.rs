//! Face and vertex normal computation.
//!
//! Face normals come straight from the triangle geometry; vertex normals
//! are the unweighted mean of the face normals in each vertex's
//! deduplicated adjacency. The mean is deliberately unweighted (not
//! area- or angle-weighted), which biases results on irregular
//! tessellation density — a known simplification.

use trigon_math::Vec3;

use crate::mesh::Mesh;

/// Computes per-face unit normals from triangle geometry.
///
/// `normalize(cross(B - A, C - A))` for face (A, B, C); the input
/// winding order determines the sign. A zero-area triangle yields a
/// non-finite normal silently.
pub fn compute_face_normals(mesh: &mut Mesh) {
    let mut normals = Vec::with_capacity(mesh.face_count());
    for f in 0..mesh.face_count() {
        let [pa, pb, pc] = mesh.face_positions(f);
        let cross = (pb - pa).cross(pc - pa);
        normals.push(cross / cross.length());
    }
    mesh.face_normals = normals;
}

/// Computes per-vertex unit normals by averaging over each vertex's
/// deduplicated adjacency.
///
/// Adjacency must be built before this runs. An isolated vertex (empty
/// adjacency) averages zero faces and produces a NaN normal.
pub fn compute_vertex_normals(mesh: &mut Mesh) {
    debug_assert_eq!(mesh.adjacency.len(), mesh.vertex_count());

    for i in 0..mesh.vertex_count() {
        let mut normal_sum = Vec3::ZERO;
        for &face_index in &mesh.adjacency[i] {
            normal_sum += mesh.face_normals[face_index as usize];
        }
        normal_sum /= mesh.adjacency[i].len() as f32;
        mesh.vertices[i].normal = normal_sum / normal_sum.length();
    }
}
