//! # trigon-render
//!
//! The boundary adapter between the mesh core and a rendering
//! collaborator. The core exposes typed slices; this crate flattens
//! them to raw byte views with element counts and byte sizes —
//! everything a GPU upload routine needs, without the core knowing
//! anything about graphics buffers.

pub mod buffers;
pub mod exporter;

pub use buffers::{channel_view, draw_vertex_count, BufferView, GeometryChannel};
pub use exporter::JsonAttributeExporter;
