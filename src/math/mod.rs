pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Integer 2D point, used where exact pixel arithmetic is required.
pub type GridPoint = nalgebra::Point2<i32>;
