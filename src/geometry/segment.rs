use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::distance::{dist, dist_3d};
use crate::math::projection::{
    crossing_point, crossing_point_3d, is_zero_length, is_zero_length_3d, normalized_edge_distance,
    normalized_edge_distance_3d, projection_factor, projection_factor_3d, valid_edge_distance,
    valid_edge_distance_3d,
};
use crate::math::{Point2, Point3};

/// A directed 2D edge from `a` to `b`.
///
/// Zero-length edges are allowed: their crossing and closest point is `a`
/// and no projection onto them is valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    a: Point2,
    b: Point2,
}

impl Segment2 {
    /// Creates a segment without checking its coordinates.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Creates a segment, rejecting NaN or infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] naming the first offending coordinate.
    pub fn try_new(a: Point2, b: Point2) -> Result<Self> {
        check_finite(&[("a.x", a.x), ("a.y", a.y), ("b.x", b.x), ("b.y", b.y)])?;
        Ok(Self::new(a, b))
    }

    /// Returns the start point.
    #[must_use]
    pub fn a(&self) -> &Point2 {
        &self.a
    }

    /// Returns the end point.
    #[must_use]
    pub fn b(&self) -> &Point2 {
        &self.b
    }

    /// Returns the same segment walked from `b` to `a`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Returns `true` if the segment has zero squared length, which includes
    /// segments too short for their squared length to be representable.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        is_zero_length(self.a.x, self.a.y, self.b.x, self.b.y)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        dist(self.a.x, self.a.y, self.b.x, self.b.y)
    }

    /// Unclamped projection factor of `p`, or `None` for a zero-length segment.
    #[must_use]
    pub fn projection_factor(&self, p: &Point2) -> Option<f64> {
        let t = projection_factor(p.x, p.y, self.a.x, self.a.y, self.b.x, self.b.y);
        if t.is_none() {
            trace!(a = ?self.a, "projection onto zero-length segment");
        }
        t
    }

    /// Foot of the perpendicular from `p` on the infinite line. Not clamped.
    #[must_use]
    pub fn crossing_point(&self, p: &Point2) -> Point2 {
        crossing_point(p.x, p.y, self.a.x, self.a.y, self.b.x, self.b.y)
    }

    /// Closest point to `p` on the segment itself.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        match self.projection_factor(p) {
            Some(t) => self.a + (self.b - self.a) * t.clamp(0.0, 1.0),
            None => self.a,
        }
    }

    /// Squared distance from `p` to the segment.
    #[must_use]
    pub fn normalized_distance(&self, p: &Point2) -> f64 {
        normalized_edge_distance(p.x, p.y, self.a.x, self.a.y, self.b.x, self.b.y)
    }

    /// Distance from `p` to the segment.
    #[must_use]
    pub fn distance(&self, p: &Point2) -> f64 {
        self.normalized_distance(p).sqrt()
    }

    /// Returns `true` if the perpendicular foot of `p` lies on the segment.
    #[must_use]
    pub fn is_projection_valid(&self, p: &Point2) -> bool {
        valid_edge_distance(p.x, p.y, self.a.x, self.a.y, self.b.x, self.b.y)
    }
}

/// A directed 3D edge from `a` to `b`, `z` being elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    a: Point3,
    b: Point3,
}

impl Segment3 {
    /// Creates a segment without checking its coordinates.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Creates a segment, rejecting NaN or infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] naming the first offending coordinate.
    pub fn try_new(a: Point3, b: Point3) -> Result<Self> {
        check_finite(&[
            ("a.x", a.x),
            ("a.y", a.y),
            ("a.z", a.z),
            ("b.x", b.x),
            ("b.y", b.y),
            ("b.z", b.z),
        ])?;
        Ok(Self::new(a, b))
    }

    #[must_use]
    pub fn a(&self) -> &Point3 {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &Point3 {
        &self.b
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let (a, b) = (&self.a, &self.b);
        is_zero_length_3d(a.x, a.y, a.z, b.x, b.y, b.z)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        dist_3d(self.a.x, self.a.y, self.a.z, self.b.x, self.b.y, self.b.z)
    }

    /// Drops elevation, keeping the plan view of the segment.
    #[must_use]
    pub fn to_2d(&self) -> Segment2 {
        Segment2::new(self.a.xy(), self.b.xy())
    }

    /// Unclamped projection factor of `p`, or `None` for a zero-length segment.
    #[must_use]
    pub fn projection_factor(&self, p: &Point3) -> Option<f64> {
        let (a, b) = (&self.a, &self.b);
        let t = projection_factor_3d(p.x, p.y, p.z, a.x, a.y, a.z, b.x, b.y, b.z);
        if t.is_none() {
            trace!(a = ?self.a, "projection onto zero-length segment");
        }
        t
    }

    #[must_use]
    pub fn crossing_point(&self, p: &Point3) -> Point3 {
        let (a, b) = (&self.a, &self.b);
        crossing_point_3d(p.x, p.y, p.z, a.x, a.y, a.z, b.x, b.y, b.z)
    }

    #[must_use]
    pub fn closest_point(&self, p: &Point3) -> Point3 {
        match self.projection_factor(p) {
            Some(t) => self.a + (self.b - self.a) * t.clamp(0.0, 1.0),
            None => self.a,
        }
    }

    /// Squared 3D distance from `p` to the segment.
    #[must_use]
    pub fn normalized_distance(&self, p: &Point3) -> f64 {
        let (a, b) = (&self.a, &self.b);
        normalized_edge_distance_3d(p.x, p.y, p.z, a.x, a.y, a.z, b.x, b.y, b.z)
    }

    #[must_use]
    pub fn distance(&self, p: &Point3) -> f64 {
        self.normalized_distance(p).sqrt()
    }

    #[must_use]
    pub fn is_projection_valid(&self, p: &Point3) -> bool {
        let (a, b) = (&self.a, &self.b);
        valid_edge_distance_3d(p.x, p.y, p.z, a.x, a.y, a.z, b.x, b.y, b.z)
    }
}

fn check_finite(coords: &[(&'static str, f64)]) -> Result<()> {
    match coords.iter().find(|(_, v)| !v.is_finite()) {
        Some(&(coordinate, value)) => Err(GeometryError::NonFinite { coordinate, value }.into()),
        None => Ok(()),
    }
}
