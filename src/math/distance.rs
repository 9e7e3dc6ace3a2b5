/// Returns the Euclidean distance between `(ax, ay)` and `(bx, by)`.
#[must_use]
pub fn dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    normalized_dist_between(ax, ay, bx, by).sqrt()
}

/// Returns the Euclidean distance between two 3D points.
#[must_use]
pub fn dist_3d(ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> f64 {
    let dz = bz - az;
    (normalized_dist_between(ax, ay, bx, by) + dz * dz).sqrt()
}

/// Returns the squared distance between `(ax, ay)` and `(bx, by)`.
///
/// Use this when only comparing distances; it skips the square root.
#[must_use]
pub fn normalized_dist_between(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    dx * dx + dy * dy
}

/// Converts a linear distance into its normalized (squared) form.
#[must_use]
pub fn normalized_dist(dist: f64) -> f64 {
    dist * dist
}

/// Converts a normalized (squared) distance back into a linear distance.
#[must_use]
pub fn denormalized_dist(normalized: f64) -> f64 {
    normalized.sqrt()
}
