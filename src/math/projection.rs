//! Orthogonal projection of a point onto a directed edge `A → B`.
//!
//! Every operation here goes through the same raw projection factor `t`
//! (0 at `A`, 1 at `B`, unbounded on the infinite line). The crossing point
//! uses `t` as is, the edge distance clamps it to `[0, 1]`, and the validity
//! check tests whether clamping would change it.
//!
//! Inputs are expected to be of map-coordinate magnitude. Squared edge
//! lengths are formed without rescaling, so coordinates beyond roughly
//! `1e150` overflow to infinity and the results become NaN.

use super::{Point2, Point3};

/// Returns `true` if the edge `A → B` has zero squared length.
///
/// Edges so short that their squared length underflows count as zero-length.
#[must_use]
pub fn is_zero_length(ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    squared(bx - ax, by - ay, 0.0) == 0.0
}

/// 3D counterpart of [`is_zero_length`].
#[must_use]
pub fn is_zero_length_3d(ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> bool {
    squared(bx - ax, by - ay, bz - az) == 0.0
}

/// Raw projection factor of `(px, py)` onto the line through `A` and `B`.
///
/// Returns `None` for a zero-length edge.
pub(crate) fn projection_factor(
    px: f64,
    py: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
) -> Option<f64> {
    if is_zero_length(ax, ay, bx, by) {
        return None;
    }
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    Some(((px - ax) * dx + (py - ay) * dy) / len_sq)
}

/// Raw projection factor of a 3D point onto the line through `A` and `B`.
///
/// Returns `None` for a zero-length edge.
#[allow(clippy::too_many_arguments)]
pub(crate) fn projection_factor_3d(
    px: f64,
    py: f64,
    pz: f64,
    ax: f64,
    ay: f64,
    az: f64,
    bx: f64,
    by: f64,
    bz: f64,
) -> Option<f64> {
    if is_zero_length_3d(ax, ay, az, bx, by, bz) {
        return None;
    }
    let dx = bx - ax;
    let dy = by - ay;
    let dz = bz - az;
    let len_sq = dx * dx + dy * dy + dz * dz;
    Some(((px - ax) * dx + (py - ay) * dy + (pz - az) * dz) / len_sq)
}

/// Returns the foot of the perpendicular from `(px, py)` onto the infinite
/// line through `(ax, ay)` and `(bx, by)`.
///
/// The result is not clamped to the edge and lies outside it whenever
/// [`valid_edge_distance`] is `false`. For a zero-length edge it is `A`.
#[must_use]
pub fn crossing_point(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Point2 {
    match projection_factor(px, py, ax, ay, bx, by) {
        Some(t) => Point2::new(ax + t * (bx - ax), ay + t * (by - ay)),
        None => Point2::new(ax, ay),
    }
}

/// 3D counterpart of [`crossing_point`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn crossing_point_3d(
    px: f64,
    py: f64,
    pz: f64,
    ax: f64,
    ay: f64,
    az: f64,
    bx: f64,
    by: f64,
    bz: f64,
) -> Point3 {
    match projection_factor_3d(px, py, pz, ax, ay, az, bx, by, bz) {
        Some(t) => Point3::new(ax + t * (bx - ax), ay + t * (by - ay), az + t * (bz - az)),
        None => Point3::new(ax, ay, az),
    }
}

/// Returns the squared distance from `(px, py)` to the closest point of the
/// edge `(ax, ay) → (bx, by)`.
///
/// Feet falling before `A` or after `B` are clamped onto that endpoint.
/// A zero-length edge yields the squared distance to `A`.
#[must_use]
pub fn normalized_edge_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let Some(t) = projection_factor(px, py, ax, ay, bx, by) else {
        return squared(px - ax, py - ay, 0.0);
    };
    let t = t.clamp(0.0, 1.0);
    let cx = ax + t * (bx - ax);
    let cy = ay + t * (by - ay);
    squared(px - cx, py - cy, 0.0)
}

/// Returns the squared 3D distance from a point to the closest point of the
/// edge `A → B`. The height difference always contributes.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn normalized_edge_distance_3d(
    px: f64,
    py: f64,
    pz: f64,
    ax: f64,
    ay: f64,
    az: f64,
    bx: f64,
    by: f64,
    bz: f64,
) -> f64 {
    let Some(t) = projection_factor_3d(px, py, pz, ax, ay, az, bx, by, bz) else {
        return squared(px - ax, py - ay, pz - az);
    };
    let t = t.clamp(0.0, 1.0);
    let cx = ax + t * (bx - ax);
    let cy = ay + t * (by - ay);
    let cz = az + t * (bz - az);
    squared(px - cx, py - cy, pz - cz)
}

/// Returns the squared distance from `(px, py)` to the infinite line through
/// `A` and `B`, i.e. to its [`crossing_point`].
///
/// Equals [`normalized_edge_distance`] whenever [`valid_edge_distance`] holds.
#[must_use]
pub fn normalized_line_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let c = crossing_point(px, py, ax, ay, bx, by);
    squared(px - c.x, py - c.y, 0.0)
}

/// 3D counterpart of [`normalized_line_distance`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn normalized_line_distance_3d(
    px: f64,
    py: f64,
    pz: f64,
    ax: f64,
    ay: f64,
    az: f64,
    bx: f64,
    by: f64,
    bz: f64,
) -> f64 {
    let c = crossing_point_3d(px, py, pz, ax, ay, az, bx, by, bz);
    squared(px - c.x, py - c.y, pz - c.z)
}

/// Returns `true` if the perpendicular foot of `(px, py)` lands on the edge,
/// endpoints included. Always `false` for a zero-length edge.
#[must_use]
pub fn valid_edge_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool {
    projection_factor(px, py, ax, ay, bx, by).is_some_and(|t| (0.0..=1.0).contains(&t))
}

/// 3D counterpart of [`valid_edge_distance`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn valid_edge_distance_3d(
    px: f64,
    py: f64,
    pz: f64,
    ax: f64,
    ay: f64,
    az: f64,
    bx: f64,
    by: f64,
    bz: f64,
) -> bool {
    projection_factor_3d(px, py, pz, ax, ay, az, bx, by, bz)
        .is_some_and(|t| (0.0..=1.0).contains(&t))
}

fn squared(dx: f64, dy: f64, dz: f64) -> f64 {
    dx * dx + dy * dy + dz * dz
}
