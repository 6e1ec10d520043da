//! B-spline fitting through ordered control points.

mod bspline;
mod knots;

pub use bspline::{bspline, BSplineFit, DEFAULT_TARGET_POINTS, MAX_TARGET_POINTS};
pub use knots::clamped_knots;
