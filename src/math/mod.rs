pub mod distance;
pub mod interpolate;
pub mod projection;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. `z` carries elevation.
pub type Point3 = nalgebra::Point3<f64>;

/// Absolute tolerance computed distances hold to for coordinates in the
/// tens to thousands of units.
///
/// Nothing in this crate rounds by it; results are returned as computed.
pub const TOLERANCE: f64 = 1e-9;
