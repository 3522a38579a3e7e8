//! Numeric constants for the attribute derivation pipeline.

/// Determinant threshold below which a face's UV parameterization is
/// treated as singular. Such faces contribute a zero tangent/bitangent
/// rather than failing the load.
pub const UV_DET_EPSILON: f32 = 1.0e-6;

/// Epsilon for floating-point comparisons in validation and tests.
pub const EPSILON: f32 = 1.0e-6;

/// Initial magnitude of the debug attribute lines.
pub const DEFAULT_LINE_MAGNITUDE: f32 = 1.0;

/// Vertices per debug line segment (start and end point).
pub const VERTS_PER_LINE: usize = 2;
