//! Procedural mesh generators for tests and the CLI.
//!
//! These generators produce deterministic meshes with correct winding
//! order, positions, and UV coordinates — the same inputs a parsed model
//! provides. Derived attributes are left empty; run the pipeline stages
//! to fill them in.

use trigon_math::{Vec2, Vec3};

use crate::mesh::{Face, Mesh, Vertex};

fn vertex(position: Vec3, uv: Vec2) -> Vertex {
    Vertex {
        position,
        uv,
        ..Vertex::default()
    }
}

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y, centered at the origin at Z=0, wound counter-clockwise when
/// viewed from +Z.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width.
/// - `height` — Total height.
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> Mesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut vertices = Vec::with_capacity(verts_x * verts_y);
    let mut faces = Vec::with_capacity(cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            vertices.push(vertex(
                Vec3::new(-half_w + u * width, -half_h + v * height, 0.0),
                Vec2::new(u, v),
            ));
        }
    }

    // Two CCW triangles per quad
    for j in 0..rows {
        for i in 0..cols {
            let bot_left = (j * verts_x + i) as u32;
            let bot_right = bot_left + 1;
            let top_left = bot_left + verts_x as u32;
            let top_right = top_left + 1;

            faces.push(Face::new(bot_left, bot_right, top_right));
            faces.push(Face::new(bot_left, top_right, top_left));
        }
    }

    Mesh::from_parts(vertices, faces)
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius` — Sphere radius.
/// - `stacks` — Number of horizontal slices (latitude divisions).
/// - `slices` — Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> Mesh {
    let mut vertices = Vec::with_capacity((stacks + 1) * (slices + 1));
    let mut faces = Vec::with_capacity(stacks * slices * 2);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32; // 0 to PI
        let sin_phi = phi.sin();
        let cos_phi = phi.cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;

            let dir = Vec3::new(sin_phi * theta.cos(), cos_phi, sin_phi * theta.sin());
            vertices.push(vertex(
                radius * dir,
                Vec2::new(j as f32 / slices as f32, i as f32 / stacks as f32),
            ));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at the poles
            if i != 0 {
                faces.push(Face::new(a, b, a + 1));
            }
            if i != stacks - 1 {
                faces.push(Face::new(a + 1, b, b + 1));
            }
        }
    }

    Mesh::from_parts(vertices, faces)
}
