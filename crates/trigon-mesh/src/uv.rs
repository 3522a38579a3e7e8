//! UV projection selection and application.
//!
//! When the source model lacks authored UVs, one of three analytic
//! projections can overwrite every vertex's UV pair at load time.
//! Positions are untouched. Runs after normalization — the spherical
//! projection in particular assumes unit-bounding-sphere positions.

use serde::{Deserialize, Serialize};
use trigon_math::projection::{cylindrical_uv, planar_uv, spherical_uv};

use crate::mesh::Mesh;

/// UV parameterization strategy selected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UvProjection {
    /// Keep the UVs read from the model file.
    #[default]
    None,
    /// Spherical projection (longitude/polar angle).
    Spherical,
    /// Cylindrical projection (longitude/height).
    Cylindrical,
    /// Planar projection along the dominant axis.
    Planar,
}

impl UvProjection {
    /// Recognized selector tags, as accepted by [`UvProjection::from_tag`].
    pub const TAGS: [&'static str; 4] = ["none", "spherical", "cylindrical", "planar"];

    /// Parses a selector tag. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "none" => Some(Self::None),
            "spherical" => Some(Self::Spherical),
            "cylindrical" => Some(Self::Cylindrical),
            "planar" => Some(Self::Planar),
            _ => None,
        }
    }
}

/// Overwrites every vertex's UV pair according to the selected
/// projection. `UvProjection::None` leaves the mesh untouched.
pub fn apply_uv_projection(mesh: &mut Mesh, projection: UvProjection) {
    let project: fn(trigon_math::Vec3) -> trigon_math::Vec2 = match projection {
        UvProjection::None => return,
        UvProjection::Spherical => spherical_uv,
        UvProjection::Cylindrical => cylindrical_uv,
        UvProjection::Planar => planar_uv,
    };
    for vert in &mut mesh.vertices {
        vert.uv = project(vert.position);
    }
}
