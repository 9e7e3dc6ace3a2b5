//! Distance, projection and validity of a point against a directed edge.
//!
//! The [`math`] module holds the scalar primitives, [`geometry`] wraps them
//! in typed segments, and [`calc`] exposes them behind the [`DistanceCalc`]
//! trait used by map-matching callers.

pub mod calc;
pub mod error;
pub mod geometry;
pub mod math;

pub use calc::{DistanceCalc, Euclidean};
pub use error::{EdgeCalcError, Result};
