//! Raw buffer views over mesh geometry.
//!
//! A [`GeometryChannel`] names each uploadable collection: the vertex
//! buffer, the index buffer, and the six debug-line buffers. A
//! [`BufferView`] carries the channel's contiguous bytes, its element
//! count, and (via `byte_len`) its size in bytes — sufficient for a
//! buffer-upload call like `glBufferData`/`Queue::write_buffer`.

use bytemuck::Pod;
use trigon_mesh::Mesh;
use trigon_types::constants::VERTS_PER_LINE;

/// The uploadable geometry collections of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryChannel {
    /// Interleaved vertex records (14 floats each).
    Vertices,
    /// Triangle index buffer (3 × u32 per face).
    Faces,
    /// Vertex normal debug lines.
    VertexNormalLines,
    /// Vertex tangent debug lines.
    VertexTangentLines,
    /// Vertex bitangent debug lines.
    VertexBitangentLines,
    /// Face normal debug lines.
    FaceNormalLines,
    /// Face tangent debug lines.
    FaceTangentLines,
    /// Face bitangent debug lines.
    FaceBitangentLines,
}

impl GeometryChannel {
    /// All channels, in upload order.
    pub const ALL: [GeometryChannel; 8] = [
        GeometryChannel::Vertices,
        GeometryChannel::Faces,
        GeometryChannel::VertexNormalLines,
        GeometryChannel::VertexTangentLines,
        GeometryChannel::VertexBitangentLines,
        GeometryChannel::FaceNormalLines,
        GeometryChannel::FaceTangentLines,
        GeometryChannel::FaceBitangentLines,
    ];
}

/// A read-only byte view over one geometry channel.
#[derive(Debug, Clone, Copy)]
pub struct BufferView<'a> {
    /// The channel's contiguous bytes.
    pub bytes: &'a [u8],
    /// Number of typed elements (vertices, faces, or lines).
    pub elements: usize,
}

impl BufferView<'_> {
    /// Size of the view in bytes.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

fn view<T: Pod>(items: &[T]) -> BufferView<'_> {
    BufferView {
        bytes: bytemuck::cast_slice(items),
        elements: items.len(),
    }
}

/// Returns the byte view for one geometry channel of a mesh.
pub fn channel_view(mesh: &Mesh, channel: GeometryChannel) -> BufferView<'_> {
    match channel {
        GeometryChannel::Vertices => view(mesh.vertices()),
        GeometryChannel::Faces => view(mesh.faces()),
        GeometryChannel::VertexNormalLines => view(&mesh.vertex_normal_lines),
        GeometryChannel::VertexTangentLines => view(&mesh.vertex_tangent_lines),
        GeometryChannel::VertexBitangentLines => view(&mesh.vertex_bitangent_lines),
        GeometryChannel::FaceNormalLines => view(&mesh.face_normal_lines),
        GeometryChannel::FaceTangentLines => view(&mesh.face_tangent_lines),
        GeometryChannel::FaceBitangentLines => view(&mesh.face_bitangent_lines),
    }
}

/// Returns the vertex count a draw call over this channel submits:
/// the vertex count itself, the index element count (3 per face), or
/// two endpoints per debug line.
pub fn draw_vertex_count(mesh: &Mesh, channel: GeometryChannel) -> usize {
    match channel {
        GeometryChannel::Vertices => mesh.vertex_count(),
        GeometryChannel::Faces => mesh.index_count(),
        _ => channel_view(mesh, channel).elements * VERTS_PER_LINE,
    }
}
