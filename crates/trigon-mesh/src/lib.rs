//! # trigon-mesh
//!
//! Triangle mesh representation and the differential-geometry attribute
//! pipeline: per-face and per-vertex normals, tangents, and bitangents
//! derived from raw positions and UVs.
//!
//! ## Key Types
//!
//! - [`Mesh`] — The core owner type. Stores interleaved vertices, faces,
//!   per-face attribute arrays, adjacency, and debug-line geometry.
//! - [`Vertex`], [`Face`], [`Line`] — `#[repr(C)]` records suitable for
//!   direct GPU upload at the render boundary.
//! - [`UvProjection`] — Analytic UV overwrite selector applied at load time.
//!
//! ## Pipeline order
//!
//! Stages mutate the mesh in place and must run in this order (adjacency
//! deduplication reads face normals):
//!
//! ```text
//! center_and_rescale → apply_uv_projection → compute_face_normals
//!   → build_adjacency → compute_vertex_normals
//!   → compute_face_tangents → compute_vertex_tangents
//!   → build_attribute_lines
//! ```

pub mod adjacency;
pub mod generators;
pub mod lines;
pub mod mesh;
pub mod normalize;
pub mod normals;
pub mod tangents;
pub mod uv;

pub use mesh::{Face, Line, Mesh, Vertex};
pub use uv::UvProjection;
