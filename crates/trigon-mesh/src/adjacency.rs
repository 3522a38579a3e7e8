//! Vertex→face adjacency construction.
//!
//! Builds, for each vertex, the list of faces touching it, then removes
//! redundant entries: among adjacent faces whose face normals are exactly
//! equal (coplanar duplicates, common from accidental re-export), only one
//! contribution survives so later averaging is not biased toward the
//! duplicated geometry.

use trigon_math::Vec3;

use crate::mesh::Mesh;

/// Builds the deduplicated vertex→face adjacency.
///
/// Face normals must be computed before this runs — deduplication
/// compares them. The pairwise scan per vertex is O(k²) in vertex
/// degree, which is small in practice.
pub fn build_adjacency(mesh: &mut Mesh) {
    debug_assert_eq!(mesh.face_normals.len(), mesh.faces.len());

    let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertex_count()];
    for (i, face) in mesh.faces.iter().enumerate() {
        adjacency[face.a as usize].push(i as u32);
        adjacency[face.b as usize].push(i as u32);
        adjacency[face.c as usize].push(i as u32);
    }

    for list in &mut adjacency {
        remove_parallel_adjacencies(list, &mesh.face_normals);
    }

    mesh.adjacency = adjacency;
}

/// Removes every entry whose face normal is bit-identical to a later
/// entry's, keeping the last face of each duplicate group.
///
/// Exact floating equality is deliberate: near-duplicate normals from
/// numerically distinct but geometrically coincident faces are not
/// merged.
fn remove_parallel_adjacencies(adjacencies: &mut Vec<u32>, face_normals: &[Vec3]) {
    let mut removable: Vec<usize> = Vec::new();
    let count = adjacencies.len();
    for i in 0..count {
        let search_normal = face_normals[adjacencies[i] as usize];
        for j in (i + 1)..count {
            let compare_normal = face_normals[adjacencies[j] as usize];
            if search_normal == compare_normal {
                removable.push(i);
                break;
            }
        }
    }
    for &i in removable.iter().rev() {
        adjacencies.remove(i);
    }
}
