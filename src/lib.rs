//! Planar curve geometry and fitting toolkit for plot digitizing.
//!
//! Distance and proximity queries, robust segment and line/circle
//! intersection, multi-scale corner detection, signed polygon area and
//! B-spline fitting over ordered point sequences.

pub mod error;
pub mod math;
pub mod operations;

pub use error::{PlotGeomError, Result};
pub use math::{GridPoint, Point2};
