pub mod segment;

pub use segment::{Segment2, Segment3};
