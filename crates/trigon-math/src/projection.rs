//! Analytic UV projections.
//!
//! Each function maps a 3D position to a texture coordinate pair,
//! used when the source model carries no authored UVs. All three
//! assume positions already recentered and rescaled to the unit
//! bounding sphere, so components lie in `[-1, 1]`.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

const TWO_PI: f32 = 2.0 * PI;

/// Spherical projection: longitude angle → u, polar angle → v.
///
/// `u = (atan2(x, z) + π) / 2π`, `v = acos(y) / π`.
pub fn spherical_uv(p: Vec3) -> Vec2 {
    let theta = p.x.atan2(p.z);
    let phi = p.y.acos();
    Vec2::new((theta + PI) / TWO_PI, phi / PI)
}

/// Cylindrical projection: longitude angle → u, height → v.
///
/// `u = (atan2(x, z) + π) / 2π`, `v = (y + 1) / 2`.
pub fn cylindrical_uv(p: Vec3) -> Vec2 {
    let theta = p.x.atan2(p.z);
    Vec2::new((theta + PI) / TWO_PI, (p.y + 1.0) / 2.0)
}

/// Planar projection along the dominant axis.
///
/// The dominant axis is the first of x, y, z whose magnitude strictly
/// exceeds both others; the remaining two components are projected as
/// ratios to the dominant component and mapped from `[-1, 1]` to
/// `[0, 1]`. An exact magnitude tie across all three axes falls
/// through to the z branch.
pub fn planar_uv(p: Vec3) -> Vec2 {
    let a = p.abs();
    // X mapping
    if a.x > a.y && a.x > a.z {
        Vec2::new((p.z / p.x + 1.0) / 2.0, (p.y / p.x + 1.0) / 2.0)
    }
    // Y mapping
    else if a.y > a.x && a.y > a.z {
        Vec2::new((p.x / p.y + 1.0) / 2.0, (p.z / p.y + 1.0) / 2.0)
    }
    // Z mapping
    else {
        Vec2::new((p.x / p.z + 1.0) / 2.0, (p.y / p.z + 1.0) / 2.0)
    }
}
