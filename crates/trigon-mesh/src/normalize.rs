//! Bounding-sphere normalization.
//!
//! Runs unconditionally right after parsing, before any UV projection
//! or attribute derivation, so downstream stages can assume the point
//! cloud is centered at the origin with unit bounding-sphere radius.

use trigon_math::Vec3;

use crate::mesh::Mesh;

/// Recenters the vertices on their centroid and rescales them so the
/// farthest vertex lands at distance exactly 1 from the origin.
///
/// The center is the arithmetic mean of all positions (a true centroid,
/// not a bounding-box center). A mesh whose vertices all share one
/// position has zero max distance; the division by zero is preserved
/// and yields non-finite positions.
pub fn center_and_rescale(mesh: &mut Mesh) {
    let mut center = Vec3::ZERO;
    for vert in &mesh.vertices {
        center += vert.position;
    }
    center /= mesh.vertices.len() as f32;

    for vert in &mut mesh.vertices {
        vert.position -= center;
    }

    let mut max_length_sq = 0.0f32;
    for vert in &mesh.vertices {
        let length_sq = vert.position.length_squared();
        if length_sq > max_length_sq {
            max_length_sq = length_sq;
        }
    }

    let scale = 1.0 / max_length_sq.sqrt();
    for vert in &mut mesh.vertices {
        vert.position *= scale;
    }
}
