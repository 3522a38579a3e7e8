//! CLI command implementations.

use trigon_io::{load_mesh, MeshFormat};
use trigon_mesh::{Mesh, UvProjection};
use trigon_render::{channel_view, draw_vertex_count, GeometryChannel, JsonAttributeExporter};

fn parse_projection(tag: &str) -> Result<UvProjection, Box<dyn std::error::Error>> {
    UvProjection::from_tag(tag).ok_or_else(|| {
        format!(
            "Unknown projection: '{tag}'. Available: {}",
            UvProjection::TAGS.join(", ")
        )
        .into()
    })
}

fn load(
    path: &str,
    format: &str,
    projection: &str,
) -> Result<Mesh, Box<dyn std::error::Error>> {
    let format = MeshFormat::from_tag(format)?;
    let projection = parse_projection(projection)?;
    Ok(load_mesh(path, format, projection)?)
}

/// Load a mesh and print an attribute summary.
pub fn info(
    path: &str,
    format: &str,
    projection: &str,
    line_length: Option<f32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mesh = load(path, format, projection)?;

    if let Some(length) = line_length {
        mesh.set_line_magnitude(length);
    }

    println!("Trigon Mesh Info");
    println!("────────────────");
    println!("File:           {path}");
    println!("Vertices:       {}", mesh.vertex_count());
    println!("Faces:          {}", mesh.face_count());
    println!("Index elements: {}", mesh.index_count());
    println!("Line magnitude: {}", mesh.line_magnitude());
    println!();

    println!("Upload channels:");
    for channel in GeometryChannel::ALL {
        let view = channel_view(&mesh, channel);
        println!(
            "  {:?}: {} elements, {} bytes, {} draw vertices",
            channel,
            view.elements,
            view.byte_len(),
            draw_vertex_count(&mesh, channel),
        );
    }

    Ok(())
}

/// Load a mesh and check its integrity.
pub fn validate(path: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load(path, format, "none")?;
    mesh.validate()?;
    println!(
        "OK: {} vertices, {} faces",
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(())
}

/// Load a mesh and export its derived attributes as JSON.
pub fn export(
    path: &str,
    output: &str,
    format: &str,
    projection: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = load(path, format, projection)?;
    JsonAttributeExporter::new(output).write(&mesh)?;
    println!("Attributes written to: {output}");
    Ok(())
}
