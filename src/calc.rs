use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::{distance, interpolate, projection, Point2, Point3};

/// Point and edge distance queries over a coordinate system.
///
/// A map matcher holds one of these and calls it for every candidate edge.
/// Normalized distances are only comparable to other normalized distances
/// of the same implementation; use [`denormalize`](Self::denormalize) to
/// recover a linear distance.
pub trait DistanceCalc {
    /// Distance between two points.
    fn dist(&self, ax: f64, ay: f64, bx: f64, by: f64) -> f64;

    /// Distance between two points including elevation.
    fn dist_3d(&self, ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> f64;

    /// Normalized form of [`dist`](Self::dist), cheaper to compute.
    fn normalized_dist(&self, ax: f64, ay: f64, bx: f64, by: f64) -> f64;

    /// Converts a linear distance into its normalized form.
    fn normalize(&self, dist: f64) -> f64;

    /// Converts a normalized distance into a linear one.
    fn denormalize(&self, normalized: f64) -> f64;

    /// Normalized distance from `P` to the closest point of edge `A → B`.
    fn normalized_edge_distance(
        &self,
        px: f64,
        py: f64,
        ax: f64,
        ay: f64,
        bx: f64,
        by: f64,
    ) -> f64;

    /// 3D counterpart of [`normalized_edge_distance`](Self::normalized_edge_distance).
    #[allow(clippy::too_many_arguments)]
    fn normalized_edge_distance_3d(
        &self,
        px: f64,
        py: f64,
        pz: f64,
        ax: f64,
        ay: f64,
        az: f64,
        bx: f64,
        by: f64,
        bz: f64,
    ) -> f64;

    /// Foot of the perpendicular from `P` on the line through `A` and `B`.
    fn crossing_point(&self, px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Point2;

    /// Normalized distance from `P` to the infinite line through `A` and `B`.
    ///
    /// Only meaningful as an edge distance when
    /// [`valid_edge_distance`](Self::valid_edge_distance) holds.
    fn normalized_line_distance(
        &self,
        px: f64,
        py: f64,
        ax: f64,
        ay: f64,
        bx: f64,
        by: f64,
    ) -> f64;

    /// 3D counterpart of [`crossing_point`](Self::crossing_point).
    #[allow(clippy::too_many_arguments)]
    fn crossing_point_3d(
        &self,
        px: f64,
        py: f64,
        pz: f64,
        ax: f64,
        ay: f64,
        az: f64,
        bx: f64,
        by: f64,
        bz: f64,
    ) -> Point3;

    /// Whether the perpendicular foot of `P` lies within edge `A → B`.
    fn valid_edge_distance(&self, px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool;

    /// 3D counterpart of [`valid_edge_distance`](Self::valid_edge_distance).
    #[allow(clippy::too_many_arguments)]
    fn valid_edge_distance_3d(
        &self,
        px: f64,
        py: f64,
        pz: f64,
        ax: f64,
        ay: f64,
        az: f64,
        bx: f64,
        by: f64,
        bz: f64,
    ) -> bool;

    /// Point at fraction `f` along `A → B`.
    fn intermediate_point(&self, f: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Point2;

    /// Moves a point by `distance` along a heading clockwise from north.
    fn project_coordinate(&self, x: f64, y: f64, distance: f64, heading_deg: f64) -> Point2;

    /// Like [`intermediate_point`](Self::intermediate_point) but rejects
    /// fractions outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] if `f` is outside `[0, 1]` or NaN.
    fn try_intermediate_point(
        &self,
        f: f64,
        ax: f64,
        ay: f64,
        bx: f64,
        by: f64,
    ) -> Result<Point2> {
        if !(0.0..=1.0).contains(&f) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "f",
                value: f,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        Ok(self.intermediate_point(f, ax, ay, bx, by))
    }
}

/// Planar distance calculator. Normalized distances are squared distances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceCalc for Euclidean {
    fn dist(&self, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
        distance::dist(ax, ay, bx, by)
    }

    fn dist_3d(&self, ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> f64 {
        distance::dist_3d(ax, ay, az, bx, by, bz)
    }

    fn normalized_dist(&self, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
        distance::normalized_dist_between(ax, ay, bx, by)
    }

    fn normalize(&self, dist: f64) -> f64 {
        distance::normalized_dist(dist)
    }

    fn denormalize(&self, normalized: f64) -> f64 {
        distance::denormalized_dist(normalized)
    }

    fn normalized_edge_distance(
        &self,
        px: f64,
        py: f64,
        ax: f64,
        ay: f64,
        bx: f64,
        by: f64,
    ) -> f64 {
        if projection::is_zero_length(ax, ay, bx, by) {
            trace!(ax, ay, "edge distance to zero-length edge");
        }
        projection::normalized_edge_distance(px, py, ax, ay, bx, by)
    }

    fn normalized_edge_distance_3d(
        &self,
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
        if projection::is_zero_length_3d(ax, ay, az, bx, by, bz) {
            trace!(ax, ay, az, "edge distance to zero-length edge");
        }
        projection::normalized_edge_distance_3d(px, py, pz, ax, ay, az, bx, by, bz)
    }

    fn crossing_point(&self, px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Point2 {
        projection::crossing_point(px, py, ax, ay, bx, by)
    }

    fn normalized_line_distance(
        &self,
        px: f64,
        py: f64,
        ax: f64,
        ay: f64,
        bx: f64,
        by: f64,
    ) -> f64 {
        projection::normalized_line_distance(px, py, ax, ay, bx, by)
    }

    fn crossing_point_3d(
        &self,
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
        projection::crossing_point_3d(px, py, pz, ax, ay, az, bx, by, bz)
    }

    fn valid_edge_distance(&self, px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> bool {
        projection::valid_edge_distance(px, py, ax, ay, bx, by)
    }

    fn valid_edge_distance_3d(
        &self,
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
        projection::valid_edge_distance_3d(px, py, pz, ax, ay, az, bx, by, bz)
    }

    fn intermediate_point(&self, f: f64, ax: f64, ay: f64, bx: f64, by: f64) -> Point2 {
        interpolate::intermediate_point(f, ax, ay, bx, by)
    }

    fn project_coordinate(&self, x: f64, y: f64, distance: f64, heading_deg: f64) -> Point2 {
        interpolate::project_coordinate(x, y, distance, heading_deg)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::EdgeCalcError;
    use crate::math::TOLERANCE;

    fn nearest_edge(calc: &impl DistanceCalc, px: f64, py: f64, polyline: &[Point2]) -> usize {
        let mut best = (0, f64::INFINITY);
        for (i, w) in polyline.windows(2).enumerate() {
            let d = calc.normalized_edge_distance(px, py, w[0].x, w[0].y, w[1].x, w[1].y);
            if d < best.1 {
                best = (i, d);
            }
        }
        best.0
    }

    #[test]
    fn reference_scenarios() {
        let dc = Euclidean;

        let c = dc.crossing_point(-5.0, 0.0, 0.0, 0.0, 10.0, 10.0);
        assert_abs_diff_eq!(c.x, -2.5, epsilon = TOLERANCE);
        assert_abs_diff_eq!(c.y, -2.5, epsilon = TOLERANCE);
        assert!(!dc.valid_edge_distance(-5.0, 0.0, 0.0, 0.0, 10.0, 10.0));

        let c = dc.crossing_point(15.0, 20.0, 0.0, 0.0, 10.0, 10.0);
        assert_abs_diff_eq!(c.x, 17.5, epsilon = TOLERANCE);
        assert_abs_diff_eq!(c.y, 17.5, epsilon = TOLERANCE);
        assert!(!dc.valid_edge_distance(15.0, 20.0, 0.0, 0.0, 10.0, 10.0));

        let c = dc.crossing_point(8.0, 4.0, 5.0, 0.0, 5.0, 10.0);
        assert_abs_diff_eq!(c.x, 5.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(c.y, 4.0, epsilon = TOLERANCE);
        let d2 = dc.normalized_edge_distance(8.0, 4.0, 5.0, 0.0, 5.0, 10.0);
        assert_abs_diff_eq!(d2, 9.0, epsilon = TOLERANCE);
        assert!(dc.valid_edge_distance(8.0, 4.0, 5.0, 0.0, 5.0, 10.0));

        let d2 = dc.normalized_edge_distance(3.0, 3.0, 0.0, 0.0, 10.0, 10.0);
        assert_abs_diff_eq!(d2, 0.0, epsilon = TOLERANCE);
        assert!(dc.valid_edge_distance(3.0, 3.0, 0.0, 0.0, 10.0, 10.0));

        assert_abs_diff_eq!(dc.dist_3d(0.0, 0.0, 0.0, 3.0, 4.0, 0.0), 5.0, epsilon = TOLERANCE);
        let d2 = dc.normalized_edge_distance_3d(5.0, 0.0, 3.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0);
        assert_abs_diff_eq!(d2, 9.0, epsilon = TOLERANCE);
        assert!(dc.valid_edge_distance(5.0, 0.0, 0.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn line_distance_reports_unclamped_value() {
        let dc = Euclidean;
        // Both feet fall outside the edge, 12.5 from the line either way.
        for (px, py) in [(-5.0, 0.0), (15.0, 20.0)] {
            assert!(!dc.valid_edge_distance(px, py, 0.0, 0.0, 10.0, 10.0));
            let line = dc.normalized_line_distance(px, py, 0.0, 0.0, 10.0, 10.0);
            assert_abs_diff_eq!(line, 12.5, epsilon = TOLERANCE);
            assert!(dc.normalized_edge_distance(px, py, 0.0, 0.0, 10.0, 10.0) > line);
        }
    }

    #[test]
    fn three_dimensional_queries() {
        let dc = Euclidean;
        assert!(dc.valid_edge_distance_3d(5.0, 0.0, 3.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0));
        assert!(!dc.valid_edge_distance_3d(12.0, 3.0, 1.0, 0.0, 0.0, 0.0, 10.0, 0.0, 4.0));
        assert!(!dc.valid_edge_distance_3d(1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0));

        let c = dc.crossing_point_3d(15.0, 0.0, 3.0, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0);
        assert_abs_diff_eq!(c.x, 15.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(c.z, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn normalize_round_trip() {
        let dc = Euclidean;
        let n = dc.normalized_dist(1.0, 1.0, 4.0, 5.0);
        assert_abs_diff_eq!(n, dc.normalize(5.0), epsilon = TOLERANCE);
        assert_abs_diff_eq!(dc.denormalize(n), dc.dist(1.0, 1.0, 4.0, 5.0), epsilon = TOLERANCE);
    }

    #[test]
    fn degenerate_edge_through_trait() {
        let dc = Euclidean;
        let d2 = dc.normalized_edge_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert_abs_diff_eq!(d2, 25.0, epsilon = TOLERANCE);
        assert!(!dc.valid_edge_distance(3.0, 4.0, 0.0, 0.0, 0.0, 0.0));
        let d2 = dc.normalized_edge_distance_3d(0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_abs_diff_eq!(d2, 4.0, epsilon = TOLERANCE);
    }

    #[test]
    fn picks_nearest_edge_of_polyline() {
        let road = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(20.0, 10.0),
        ];
        assert_eq!(nearest_edge(&Euclidean, 4.0, -1.0, &road), 0);
        assert_eq!(nearest_edge(&Euclidean, 11.0, 5.0, &road), 1);
        assert_eq!(nearest_edge(&Euclidean, 16.0, 12.0, &road), 2);
    }

    #[test]
    fn try_intermediate_point_checks_fraction() {
        let dc = Euclidean;
        let p = dc.try_intermediate_point(0.25, 0.0, 0.0, 8.0, 4.0).unwrap();
        assert_abs_diff_eq!(p.x, 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = TOLERANCE);

        let err = dc.try_intermediate_point(1.5, 0.0, 0.0, 8.0, 4.0).unwrap_err();
        assert!(matches!(
            err,
            EdgeCalcError::Geometry(GeometryError::ParameterOutOfRange { parameter: "f", .. })
        ));
        assert!(dc.try_intermediate_point(f64::NAN, 0.0, 0.0, 8.0, 4.0).is_err());
    }

    #[test]
    fn project_then_measure() {
        let dc = Euclidean;
        let p = dc.project_coordinate(2.0, 2.0, 5.0, 180.0);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(p.y, -3.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(dc.dist(2.0, 2.0, p.x, p.y), 5.0, epsilon = TOLERANCE);
    }
}
