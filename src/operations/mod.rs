pub mod corner;
pub mod fitting;

pub use corner::{detect_corners, split_at_corners, CornerDetection, CornerParams, DetectCorners};
pub use fitting::{bspline, BSplineFit};
