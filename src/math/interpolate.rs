use super::distance::{dist, dist_3d};
use super::{Point2, Point3};

/// Returns the point at fraction `f` along `(ax, ay) → (bx, by)`.
///
/// `f` is not clamped: values outside `[0, 1]` extrapolate along the line.
#[must_use]
pub fn intermediate_point(f: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Point2 {
    Point2::new(ax + f * (bx - ax), ay + f * (by - ay))
}

/// Moves `(x, y)` by `distance` along a heading in degrees, measured
/// clockwise from the +y axis.
#[must_use]
pub fn project_coordinate(x: f64, y: f64, distance: f64, heading_deg: f64) -> Point2 {
    let angle = heading_deg.to_radians();
    Point2::new(x + angle.sin() * distance, y + angle.cos() * distance)
}

/// Length of the open polyline through `points`.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| dist(w[0].x, w[0].y, w[1].x, w[1].y))
        .sum()
}

/// Length of the open 3D polyline through `points`, elevation included.
#[must_use]
pub fn polyline_length_3d(points: &[Point3]) -> f64 {
    points
        .windows(2)
        .map(|w| dist_3d(w[0].x, w[0].y, w[0].z, w[1].x, w[1].y, w[1].z))
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn intermediate_endpoints_and_midpoint() {
        assert_eq!(intermediate_point(0.0, 1.0, 2.0, 5.0, 10.0), Point2::new(1.0, 2.0));
        assert_eq!(intermediate_point(1.0, 1.0, 2.0, 5.0, 10.0), Point2::new(5.0, 10.0));
        let m = intermediate_point(0.5, 1.0, 2.0, 5.0, 10.0);
        assert_abs_diff_eq!(m.x, 3.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(m.y, 6.0, epsilon = TOLERANCE);
    }

    #[test]
    fn intermediate_extrapolates() {
        let p = intermediate_point(-0.25, 0.0, 0.0, 10.0, 10.0);
        assert_abs_diff_eq!(p.x, -2.5, epsilon = TOLERANCE);
        assert_abs_diff_eq!(p.y, -2.5, epsilon = TOLERANCE);
    }

    #[test]
    fn project_north_and_east() {
        let north = project_coordinate(1.0, 1.0, 10.0, 0.0);
        assert_abs_diff_eq!(north.x, 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(north.y, 11.0, epsilon = TOLERANCE);

        let east = project_coordinate(1.0, 1.0, 10.0, 90.0);
        assert_abs_diff_eq!(east.x, 11.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(east.y, 1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn project_keeps_distance() {
        let p = project_coordinate(-3.0, 4.0, 7.5, 217.0);
        assert_abs_diff_eq!(dist(-3.0, 4.0, p.x, p.y), 7.5, epsilon = TOLERANCE);
    }

    #[test]
    fn polyline_length_sums_legs() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), Point2::new(3.0, 10.0)];
        assert_abs_diff_eq!(polyline_length(&pts), 11.0, epsilon = TOLERANCE);
    }

    #[test]
    fn polyline_length_short_inputs() {
        assert_abs_diff_eq!(polyline_length(&[]), 0.0);
        assert_abs_diff_eq!(polyline_length(&[Point2::new(4.0, 4.0)]), 0.0);
    }

    #[test]
    fn polyline_length_3d_includes_height() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 4.0, 0.0),
            Point3::new(3.0, 4.0, 2.0),
        ];
        assert_abs_diff_eq!(polyline_length_3d(&pts), 7.0, epsilon = TOLERANCE);
    }
}
