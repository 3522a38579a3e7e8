//! Core mesh data model.
//!
//! Vertices and faces are flat index-addressed arrays; per-face attributes
//! live in parallel arrays aligned with the face array. `Vertex` and `Line`
//! are `#[repr(C)]` and `Pod` so the render boundary can expose them as raw
//! byte buffers without copying.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use trigon_math::{Vec2, Vec3};
use trigon_types::{TrigonError, TrigonResult};

/// A single mesh vertex in the interleaved 14-float layout
/// `(position, normal, tangent, bitangent, uv)`.
///
/// Only the position is authoritative from the model file; the remaining
/// fields are placeholders overwritten by the attribute pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vertex {
    /// Model-space position.
    pub position: Vec3,
    /// Unit vertex normal (derived).
    pub normal: Vec3,
    /// Unit vertex tangent, orthogonal to the normal (derived).
    pub tangent: Vec3,
    /// Unit vertex bitangent, `cross(tangent, normal)` (derived).
    pub bitangent: Vec3,
    /// Texture coordinates.
    pub uv: Vec2,
}

impl Vertex {
    /// Number of float slots in the on-disk vertex layout.
    pub const FLOAT_SLOTS: usize = 14;

    /// Writes the `slot`-th float of the interleaved layout.
    ///
    /// Slots map positionally: 0–2 position, 3–5 normal, 6–8 tangent,
    /// 9–11 bitangent, 12–13 uv. Out-of-range slots are ignored.
    pub fn set_slot(&mut self, slot: usize, value: f32) {
        match slot {
            0 => self.position.x = value,
            1 => self.position.y = value,
            2 => self.position.z = value,
            3 => self.normal.x = value,
            4 => self.normal.y = value,
            5 => self.normal.z = value,
            6 => self.tangent.x = value,
            7 => self.tangent.y = value,
            8 => self.tangent.z = value,
            9 => self.bitangent.x = value,
            10 => self.bitangent.y = value,
            11 => self.bitangent.z = value,
            12 => self.uv.x = value,
            13 => self.uv.y = value,
            _ => {}
        }
    }
}

/// A triangle face: three indices into the vertex array.
///
/// The index order defines winding and therefore the face normal's sign.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Face {
    /// First vertex index.
    pub a: u32,
    /// Second vertex index.
    pub b: u32,
    /// Third vertex index.
    pub c: u32,
}

impl Face {
    /// Creates a face from three vertex indices.
    #[inline]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// Returns the three vertex indices as an array.
    #[inline]
    pub fn indices(self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

/// A debug line segment from `start` to `end`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Line {
    /// Segment start point.
    pub start: Vec3,
    /// Segment end point.
    pub end: Vec3,
}

impl Line {
    /// Creates a line from a start point and a direction vector.
    #[inline]
    pub fn from_direction(start: Vec3, direction: Vec3) -> Self {
        Self {
            start,
            end: start + direction,
        }
    }

    /// Returns the segment's delta vector (`end - start`).
    #[inline]
    pub fn delta(&self) -> Vec3 {
        self.end - self.start
    }
}

/// A triangle mesh with derived differential-geometry attributes.
///
/// Owns the vertex and face arrays, the parallel per-face attribute
/// arrays, the deduplicated vertex→face adjacency, and the six debug-line
/// collections. Built once by the load pipeline; treated as immutable
/// afterwards except for debug-line rescaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    /// Interleaved vertex records.
    pub vertices: Vec<Vertex>,
    /// Triangle faces.
    pub faces: Vec<Face>,

    // --- Per-face attributes, index-aligned with `faces` ---
    /// Unit face normals.
    pub face_normals: Vec<Vec3>,
    /// Face tangents from the UV-gradient system (not normalized).
    pub face_tangents: Vec<Vec3>,
    /// Face bitangents from the UV-gradient system (not normalized).
    pub face_bitangents: Vec<Vec3>,

    /// For each vertex, the faces that reference it, deduplicated so at
    /// most one face per distinct face-normal direction remains.
    pub adjacency: Vec<Vec<u32>>,

    // --- Debug line geometry, one line per vertex or per face ---
    /// Vertex normal lines.
    pub vertex_normal_lines: Vec<Line>,
    /// Vertex tangent lines.
    pub vertex_tangent_lines: Vec<Line>,
    /// Vertex bitangent lines.
    pub vertex_bitangent_lines: Vec<Line>,
    /// Face normal lines (from face centroids).
    pub face_normal_lines: Vec<Line>,
    /// Face tangent lines.
    pub face_tangent_lines: Vec<Line>,
    /// Face bitangent lines.
    pub face_bitangent_lines: Vec<Line>,

    /// Current debug-line magnitude; rescaling is proportional to this.
    pub(crate) line_magnitude: f32,
}

impl Mesh {
    /// Creates a mesh from parsed vertices and faces, with all derived
    /// attributes empty. The load pipeline fills them in.
    pub fn from_parts(vertices: Vec<Vertex>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            face_normals: Vec::new(),
            face_tangents: Vec::new(),
            face_bitangents: Vec::new(),
            adjacency: Vec::new(),
            vertex_normal_lines: Vec::new(),
            vertex_tangent_lines: Vec::new(),
            vertex_bitangent_lines: Vec::new(),
            face_normal_lines: Vec::new(),
            face_tangent_lines: Vec::new(),
            face_bitangent_lines: Vec::new(),
            line_magnitude: trigon_types::constants::DEFAULT_LINE_MAGNITUDE,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of index elements (3 per face), as submitted
    /// to an indexed draw call.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.faces.len() * 3
    }

    /// Returns the current debug-line magnitude.
    #[inline]
    pub fn line_magnitude(&self) -> f32 {
        self.line_magnitude
    }

    /// Read-only view of the vertex array.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Read-only view of the face array.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the positions of face `f`'s three vertices.
    #[inline]
    pub fn face_positions(&self, f: usize) -> [Vec3; 3] {
        let face = self.faces[f];
        [
            self.vertices[face.a as usize].position,
            self.vertices[face.b as usize].position,
            self.vertices[face.c as usize].position,
        ]
    }

    /// Returns the centroid of face `f`.
    #[inline]
    pub fn face_centroid(&self, f: usize) -> Vec3 {
        let [pa, pb, pc] = self.face_positions(f);
        (pa + pb + pc) / 3.0
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Face indices are within bounds
    /// - No faces with repeated vertex indices
    /// - Derived attribute arrays (when present) align with their
    ///   source arrays
    pub fn validate(&self) -> TrigonResult<()> {
        let n = self.vertices.len();

        for (i, face) in self.faces.iter().enumerate() {
            for idx in face.indices() {
                if idx as usize >= n {
                    return Err(TrigonError::InvalidMesh(format!(
                        "Face {} references vertex {} (vertex count: {})",
                        i, idx, n
                    )));
                }
            }
            if face.a == face.b || face.b == face.c || face.a == face.c {
                return Err(TrigonError::InvalidMesh(format!(
                    "Face {} has repeated vertex indices: [{}, {}, {}]",
                    i, face.a, face.b, face.c
                )));
            }
        }

        let f = self.faces.len();
        for (name, len) in [
            ("face_normals", self.face_normals.len()),
            ("face_tangents", self.face_tangents.len()),
            ("face_bitangents", self.face_bitangents.len()),
            ("face_normal_lines", self.face_normal_lines.len()),
            ("face_tangent_lines", self.face_tangent_lines.len()),
            ("face_bitangent_lines", self.face_bitangent_lines.len()),
        ] {
            if len != 0 && len != f {
                return Err(TrigonError::InvalidMesh(format!(
                    "{} length ({}) != face count ({})",
                    name, len, f
                )));
            }
        }
        for (name, len) in [
            ("adjacency", self.adjacency.len()),
            ("vertex_normal_lines", self.vertex_normal_lines.len()),
            ("vertex_tangent_lines", self.vertex_tangent_lines.len()),
            ("vertex_bitangent_lines", self.vertex_bitangent_lines.len()),
        ] {
            if len != 0 && len != n {
                return Err(TrigonError::InvalidMesh(format!(
                    "{} length ({}) != vertex count ({})",
                    name, len, n
                )));
            }
        }

        Ok(())
    }
}
