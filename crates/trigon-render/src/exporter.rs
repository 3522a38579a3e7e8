//! JSON attribute exporter — writes the derived attribute set for
//! offline inspection.
//!
//! Serializes positions, normals, tangents, bitangents, UVs, and the
//! index buffer as flat float/index arrays. The output can be loaded
//! by the companion HTML viewer or diffed between pipeline revisions.

use serde::Serialize;
use trigon_mesh::Mesh;
use trigon_types::{TrigonError, TrigonResult};

/// Flattened attribute data for JSON export.
#[derive(Serialize)]
struct AttributeData {
    vertex_count: usize,
    face_count: usize,
    indices: Vec<u32>,
    positions: Vec<f32>, // interleaved [x0,y0,z0, x1,y1,z1, ...]
    normals: Vec<f32>,
    tangents: Vec<f32>,
    bitangents: Vec<f32>,
    uvs: Vec<f32>,
}

/// Exports a mesh's derived attributes to a JSON file.
///
/// Usage:
/// ```text
/// JsonAttributeExporter::new("attributes.json").write(&mesh)?;
/// ```
pub struct JsonAttributeExporter {
    output_path: String,
}

impl JsonAttributeExporter {
    /// Creates an exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
        }
    }

    /// Serializes the mesh attributes and writes the JSON file.
    pub fn write(&self, mesh: &Mesh) -> TrigonResult<()> {
        let json = Self::to_json_string(mesh)?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    /// Serializes the mesh attributes to a JSON string.
    pub fn to_json_string(mesh: &Mesh) -> TrigonResult<String> {
        let n = mesh.vertex_count();
        let mut positions = Vec::with_capacity(n * 3);
        let mut normals = Vec::with_capacity(n * 3);
        let mut tangents = Vec::with_capacity(n * 3);
        let mut bitangents = Vec::with_capacity(n * 3);
        let mut uvs = Vec::with_capacity(n * 2);

        for vert in mesh.vertices() {
            positions.extend_from_slice(&vert.position.to_array());
            normals.extend_from_slice(&vert.normal.to_array());
            tangents.extend_from_slice(&vert.tangent.to_array());
            bitangents.extend_from_slice(&vert.bitangent.to_array());
            uvs.extend_from_slice(&vert.uv.to_array());
        }

        let data = AttributeData {
            vertex_count: n,
            face_count: mesh.face_count(),
            indices: mesh.faces().iter().flat_map(|f| f.indices()).collect(),
            positions,
            normals,
            tangents,
            bitangents,
            uvs,
        };

        serde_json::to_string(&data).map_err(|e| {
            TrigonError::Serialization(format!("JSON serialization failed: {e}"))
        })
    }
}
