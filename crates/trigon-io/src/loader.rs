//! The synchronous mesh load pipeline.
//!
//! One call runs every stage to completion: parse → normalize →
//! optional UV projection → face normals → adjacency → vertex normals →
//! face tangents → vertex tangents → debug lines. There is no
//! suspension point and no observable partial state; a load either
//! returns a complete mesh or a typed error.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;
use trigon_mesh::{adjacency, lines, normalize, normals, tangents, uv, Mesh, UvProjection};
use trigon_types::{TrigonError, TrigonResult};

use crate::obj::parse_obj;

/// Recognized model file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeshFormat {
    /// Wavefront OBJ and its line-oriented variants.
    #[default]
    Obj,
}

impl MeshFormat {
    /// Parses a format tag, failing with `UnsupportedFormat` for
    /// unrecognized tags.
    pub fn from_tag(tag: &str) -> TrigonResult<Self> {
        match tag {
            "obj" => Ok(Self::Obj),
            other => Err(TrigonError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Loads a model file and derives the full attribute set.
///
/// Fails with `FileOpen` if the path is missing or unreadable. All
/// geometric anomalies (degenerate triangles, degenerate UVs) are
/// absorbed as best-effort numeric output — a single bad triangle does
/// not prevent loading the rest of the mesh.
pub fn load_mesh(
    path: impl AsRef<Path>,
    format: MeshFormat,
    projection: UvProjection,
) -> TrigonResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TrigonError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let model = match format {
        MeshFormat::Obj => parse_obj(BufReader::new(file))?,
    };
    debug!(
        vertices = model.vertices.len(),
        faces = model.faces.len(),
        ?path,
        "parsed model file"
    );

    let mut mesh = Mesh::from_parts(model.vertices, model.faces);
    derive_attributes(&mut mesh, projection);

    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "mesh attribute derivation complete"
    );
    Ok(mesh)
}

/// Runs the in-place derivation stages on an already-parsed mesh.
///
/// Exposed for procedurally generated meshes (tests, benchmarks) that
/// skip the file parser.
pub fn derive_attributes(mesh: &mut Mesh, projection: UvProjection) {
    normalize::center_and_rescale(mesh);
    uv::apply_uv_projection(mesh, projection);

    normals::compute_face_normals(mesh);
    // Adjacency dedup reads the face normals; order matters here.
    adjacency::build_adjacency(mesh);
    normals::compute_vertex_normals(mesh);

    tangents::compute_face_tangents(mesh);
    tangents::compute_vertex_tangents(mesh);

    lines::build_attribute_lines(mesh);
}
