//! # trigon-math
//!
//! Math primitives for the Trigon mesh pipeline.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`) as the canonical math types
//! - Analytic UV projections (spherical, cylindrical, planar)

pub mod projection;

// Re-export glam types as the canonical math types for Trigon.
pub use glam::{Vec2, Vec3};
