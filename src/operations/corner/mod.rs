//! Corner (high-curvature point) detection on digitized planar curves.
//!
//! Follows the two-pass IPAN99 scheme of Chetverikov and Szabó:
//!
//! 1. [`fit_triangle`] fits a growing family of triangles at every interior
//!    point and keeps the smallest admissible opening angle.
//! 2. [`suppress_adjacent_corners`] keeps only the sharpest candidate within
//!    `min_distance_sq` of each other.
//!
//! Both passes work in place on one sharpness array indexed like the curve.
//! An entry of [`NOT_A_CORNER`] (π) marks a point that is not a corner;
//! anything smaller is the opening angle of the corner, so smaller is
//! sharper.

mod fit_triangle;
mod split;
mod suppress;

pub use fit_triangle::fit_triangle;
pub use split::split_at_corners;
pub use suppress::suppress_adjacent_corners;

use std::f64::consts::PI;

use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Sharpness value of a point that is not a corner.
pub const NOT_A_CORNER: f64 = PI;

/// Tuning parameters for corner detection.
///
/// Distances are squared and expressed in the units of the curve
/// coordinates (pixels for an auto-traced plot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerParams {
    /// Squared lower bound on triangle leg length; also the suppression radius.
    pub min_distance_sq: f64,
    /// Squared upper bound on triangle leg length.
    pub max_distance_sq: f64,
    /// Largest opening angle (radians) still considered a corner.
    pub max_angle: f64,
}

impl Default for CornerParams {
    fn default() -> Self {
        Self {
            min_distance_sq: 4.0 * 4.0,
            max_distance_sq: 7.0 * 7.0,
            max_angle: 160.0_f64.to_radians(),
        }
    }
}

impl CornerParams {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(min_distance_sq: f64, max_distance_sq: f64, max_angle: f64) -> Self {
        Self {
            min_distance_sq,
            max_distance_sq,
            max_angle,
        }
    }

    /// Checks that the parameters describe a usable growth window.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a value is not finite,
    /// `min_distance_sq` is negative, `max_distance_sq <= min_distance_sq`,
    /// or `max_angle` is outside `(0, π]`.
    pub fn validate(&self) -> Result<()> {
        let Self {
            min_distance_sq,
            max_distance_sq,
            max_angle,
        } = *self;

        if !(min_distance_sq.is_finite() && max_distance_sq.is_finite() && max_angle.is_finite())
        {
            return Err(OperationError::InvalidInput(format!(
                "corner parameters must be finite: {self:?}"
            ))
            .into());
        }
        if min_distance_sq < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "min_distance_sq must be non-negative, got {min_distance_sq}"
            ))
            .into());
        }
        if max_distance_sq <= min_distance_sq {
            return Err(OperationError::InvalidInput(format!(
                "max_distance_sq ({max_distance_sq}) must exceed \
                 min_distance_sq ({min_distance_sq})"
            ))
            .into());
        }
        if max_angle <= 0.0 || max_angle > PI {
            return Err(OperationError::InvalidInput(format!(
                "max_angle must be in (0, π], got {max_angle}"
            ))
            .into());
        }
        Ok(())
    }
}

/// Result of a corner detection.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerDetection {
    /// One sharpness value per curve point; [`NOT_A_CORNER`] for non-corners.
    pub sharpness: Vec<f64>,
    /// Number of points flagged as corners.
    pub corner_count: usize,
}

impl CornerDetection {
    /// Indices of the points flagged as corners, in curve order.
    #[must_use]
    pub fn corner_indices(&self) -> Vec<usize> {
        self.sharpness
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s < NOT_A_CORNER)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Detects corners along an open curve.
///
/// The curve must have at least 3 points. The first and last points are
/// never corners.
#[derive(Debug)]
pub struct DetectCorners<'a> {
    points: &'a [Point2],
    params: CornerParams,
}

impl<'a> DetectCorners<'a> {
    /// Creates a new detection over `points` with default parameters.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            params: CornerParams::default(),
        }
    }

    /// Sets custom detection parameters.
    #[must_use]
    pub fn with_params(mut self, params: CornerParams) -> Self {
        self.params = params;
        self
    }

    /// Runs both passes, returning the sharpness array and corner count.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the curve has fewer than
    /// 3 points or the parameters are invalid.
    pub fn execute(&self) -> Result<CornerDetection> {
        let mut sharpness = vec![NOT_A_CORNER; self.points.len()];
        let corner_count = self.execute_into(&mut sharpness)?;
        Ok(CornerDetection {
            sharpness,
            corner_count,
        })
    }

    /// Runs both passes into a caller-owned sharpness buffer.
    ///
    /// Every entry of `sharpness` is overwritten. Returns the corner count.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the curve has fewer than
    /// 3 points, the parameters are invalid, or `sharpness.len()` differs
    /// from the number of points.
    pub fn execute_into(&self, sharpness: &mut [f64]) -> Result<usize> {
        let n = self.points.len();
        if n < 3 {
            return Err(OperationError::InvalidInput(format!(
                "at least 3 points are required for corner detection, got {n}"
            ))
            .into());
        }
        if sharpness.len() != n {
            return Err(OperationError::InvalidInput(format!(
                "sharpness buffer has {} entries for {n} points",
                sharpness.len()
            ))
            .into());
        }
        self.params.validate()?;

        sharpness[0] = NOT_A_CORNER;
        sharpness[n - 1] = NOT_A_CORNER;
        for i in 1..n - 1 {
            sharpness[i] = fit_triangle(self.points, i, &self.params);
        }

        let candidates = sharpness.iter().filter(|&&s| s < NOT_A_CORNER).count();
        let corner_count =
            suppress_adjacent_corners(self.points, sharpness, self.params.min_distance_sq);

        tracing::debug!(
            points = n,
            candidates,
            corners = corner_count,
            "corner detection finished"
        );
        Ok(corner_count)
    }
}

/// Free-function form of [`DetectCorners`].
///
/// # Errors
///
/// See [`DetectCorners::execute`].
pub fn detect_corners(
    points: &[Point2],
    min_distance_sq: f64,
    max_distance_sq: f64,
    max_angle: f64,
) -> Result<CornerDetection> {
    DetectCorners::new(points)
        .with_params(CornerParams::new(min_distance_sq, max_distance_sq, max_angle))
        .execute()
}
