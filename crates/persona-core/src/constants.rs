/// Default clamp bound: attribute values live in [-50, +50] unless a
/// vector is built with a custom bound.
pub const DEFAULT_ATTR_BOUND: f64 = 50.0;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;
