//! Debug attribute line generation and rescaling.
//!
//! Six line collections visualize the derived attributes: vertex and
//! face variants of normal, tangent, and bitangent. Vertex lines start
//! at the vertex position; face lines start at the face centroid. Each
//! segment runs from its start point to start + attribute vector, at
//! the initial magnitude of 1.0.

use crate::mesh::{Line, Mesh};

/// Builds all six debug-line collections from the derived attributes.
///
/// Must run last in the pipeline — it reads vertex attributes, face
/// attributes, and positions. Resets the stored line magnitude to the
/// default.
pub fn build_attribute_lines(mesh: &mut Mesh) {
    let num_verts = mesh.vertex_count();
    let mut vertex_normal_lines = Vec::with_capacity(num_verts);
    let mut vertex_tangent_lines = Vec::with_capacity(num_verts);
    let mut vertex_bitangent_lines = Vec::with_capacity(num_verts);

    for vert in &mesh.vertices {
        vertex_normal_lines.push(Line::from_direction(vert.position, vert.normal));
        vertex_tangent_lines.push(Line::from_direction(vert.position, vert.tangent));
        vertex_bitangent_lines.push(Line::from_direction(vert.position, vert.bitangent));
    }

    let num_faces = mesh.face_count();
    let mut face_normal_lines = Vec::with_capacity(num_faces);
    let mut face_tangent_lines = Vec::with_capacity(num_faces);
    let mut face_bitangent_lines = Vec::with_capacity(num_faces);

    for f in 0..num_faces {
        let start = mesh.face_centroid(f);
        face_normal_lines.push(Line::from_direction(start, mesh.face_normals[f]));
        face_tangent_lines.push(Line::from_direction(start, mesh.face_tangents[f]));
        face_bitangent_lines.push(Line::from_direction(start, mesh.face_bitangents[f]));
    }

    mesh.vertex_normal_lines = vertex_normal_lines;
    mesh.vertex_tangent_lines = vertex_tangent_lines;
    mesh.vertex_bitangent_lines = vertex_bitangent_lines;
    mesh.face_normal_lines = face_normal_lines;
    mesh.face_tangent_lines = face_tangent_lines;
    mesh.face_bitangent_lines = face_bitangent_lines;
    mesh.line_magnitude = trigon_types::constants::DEFAULT_LINE_MAGNITUDE;
}

/// Rescales every debug line to the new target magnitude.
///
/// Each existing segment's delta is multiplied by `new / current` in
/// place — a proportional rescale, never a recompute from the source
/// vectors. Rescaling by `a` then `b` therefore equals rescaling once
/// by `a * b`.
pub fn rescale_attribute_lines(mesh: &mut Mesh, new_length: f32) {
    let scale_factor = new_length / mesh.line_magnitude;

    for list in [
        &mut mesh.vertex_normal_lines,
        &mut mesh.vertex_tangent_lines,
        &mut mesh.vertex_bitangent_lines,
        &mut mesh.face_normal_lines,
        &mut mesh.face_tangent_lines,
        &mut mesh.face_bitangent_lines,
    ] {
        for line in list.iter_mut() {
            scale_line(line, scale_factor);
        }
    }

    mesh.line_magnitude = new_length;
}

/// Scales a line's delta about its start point.
fn scale_line(line: &mut Line, scale: f32) {
    let delta = line.delta() * scale;
    line.end = line.start + delta;
}

impl Mesh {
    /// Rescales the debug attribute lines to a new magnitude.
    ///
    /// See [`rescale_attribute_lines`].
    pub fn set_line_magnitude(&mut self, new_length: f32) {
        rescale_attribute_lines(self, new_length);
    }
}
