//! # trigon-io
//!
//! Model file parsing and the synchronous load pipeline.
//!
//! [`load_mesh`] is the single entry point: it parses the file, runs the
//! full attribute derivation pipeline, and returns a fully-formed
//! [`trigon_mesh::Mesh`] — or fails atomically with a typed error before
//! any partial mesh escapes.

pub mod loader;
pub mod obj;

pub use loader::{derive_attributes, load_mesh, MeshFormat};
pub use obj::{parse_obj, ParsedModel};
