use super::knots::clamped_knots;
use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Default number of points generated along a fitted spline.
pub const DEFAULT_TARGET_POINTS: usize = 100;

/// Upper bound on the number of points a single fit may generate.
pub const MAX_TARGET_POINTS: usize = 1 << 24;

/// Fits an open clamped B-spline of arbitrary order through control points
/// and samples it.
///
/// The basis functions are evaluated with the Cox–de Boor recursion in
/// table form, so `order` (degree + 1) is a runtime choice. The curve
/// starts at the first control point and the output always ends exactly
/// at the last one.
///
/// # Algorithm
///
/// 1. Drop consecutive repeated control points and build a clamped knot
///    vector over the rest (see [`clamped_knots`]).
/// 2. Derive one parameter step, `(last knot − first knot) / (target − 1)`.
/// 3. Walk the non-empty knot spans, evaluating the basis table at every
///    step that falls inside the span.
/// 4. Append the last control point.
#[derive(Debug)]
pub struct BSplineFit<'a> {
    points: &'a [Point2],
    order: usize,
    target_points: usize,
}

impl<'a> BSplineFit<'a> {
    /// Creates a new spline fit of the given `order` (2 = linear,
    /// 3 = quadratic, 4 = cubic, …).
    #[must_use]
    pub fn new(points: &'a [Point2], order: usize) -> Self {
        Self {
            points,
            order,
            target_points: DEFAULT_TARGET_POINTS,
        }
    }

    /// Sets the number of points to generate.
    #[must_use]
    pub fn with_target_points(mut self, target_points: usize) -> Self {
        self.target_points = target_points;
        self
    }

    /// Executes the fit, returning points along the spline.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if there are fewer than 2
    /// control points, `order` is outside `2..=count` where `count` is the
    /// number of control points left after dropping consecutive repeats, or
    /// the target point count is outside `2..=MAX_TARGET_POINTS`.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        self.validate()?;

        let mut points = self.points.to_vec();
        points.dedup();
        let n = points.len() - 1;
        let last = points[n];
        if n == 0 {
            // Every control point coincides.
            return Ok(vec![last]);
        }
        if self.order > points.len() {
            return Err(OperationError::InvalidInput(format!(
                "b-spline order {} exceeds the {} distinct control points",
                self.order,
                points.len()
            ))
            .into());
        }

        let knots = clamped_knots(&points, self.order);
        let (first_knot, last_knot) = (knots[0], knots[knots.len() - 1]);
        let range = last_knot - first_knot;

        #[allow(clippy::cast_precision_loss)]
        let step = range / (self.target_points - 1) as f64;

        let mut table = BasisTable::new(n, self.order);
        let mut output = Vec::with_capacity(self.target_points);
        let mut span = self.order - 1;

        for j in 0..self.target_points - 1 {
            #[allow(clippy::cast_precision_loss)]
            let t = first_knot + j as f64 * step;
            while span < n && t >= knots[span + 1] {
                span += 1;
            }
            table.evaluate(&knots, span, t);
            output.push(table.blend(&points));
        }
        output.push(last);

        tracing::debug!(
            control_points = self.points.len(),
            distinct = points.len(),
            order = self.order,
            knots = knots.len(),
            output = output.len(),
            "b-spline fitted"
        );
        Ok(output)
    }

    fn validate(&self) -> Result<()> {
        let count = self.points.len();
        if count < 2 {
            return Err(OperationError::InvalidInput(format!(
                "at least 2 control points are required for a b-spline, got {count}"
            ))
            .into());
        }
        if self.order < 2 || self.order > count {
            return Err(OperationError::InvalidInput(format!(
                "b-spline order must be in 2..={count}, got {}",
                self.order
            ))
            .into());
        }
        if !(2..=MAX_TARGET_POINTS).contains(&self.target_points) {
            return Err(OperationError::InvalidInput(format!(
                "target point count must be in 2..={MAX_TARGET_POINTS}, got {}",
                self.target_points
            ))
            .into());
        }
        Ok(())
    }
}

/// Free-function form of [`BSplineFit`].
///
/// # Errors
///
/// See [`BSplineFit::execute`].
pub fn bspline(points: &[Point2], order: usize, target_points: usize) -> Result<Vec<Point2>> {
    BSplineFit::new(points, order)
        .with_target_points(target_points)
        .execute()
}

/// Table of basis values `N[i][k]`, `k = 1..=order`, reused across samples.
struct BasisTable {
    rows: usize,
    order: usize,
    /// Number of control points.
    count: usize,
    values: Vec<f64>,
}

impl BasisTable {
    /// `n` is the index of the last control point.
    fn new(n: usize, order: usize) -> Self {
        let rows = n + order;
        Self {
            rows,
            order,
            count: n + 1,
            values: vec![0.0; rows * (order + 1)],
        }
    }

    fn at(&self, i: usize, k: usize) -> f64 {
        self.values[i * (self.order + 1) + k]
    }

    fn set(&mut self, i: usize, k: usize, v: f64) {
        self.values[i * (self.order + 1) + k] = v;
    }

    /// Fills the table bottom-up for parameter `t` in knot span `span`.
    fn evaluate(&mut self, knots: &[f64], span: usize, t: f64) {
        self.values.fill(0.0);

        for i in 0..self.rows {
            let active = i == span && knots[i] < knots[i + 1];
            self.set(i, 1, if active { 1.0 } else { 0.0 });
        }

        for k in 2..=self.order {
            // knots[i + k] must exist: i + k <= rows.
            for i in 0..=self.rows - k {
                let lower = self.at(i, k - 1);
                let upper = self.at(i + 1, k - 1);
                let mut v = 0.0;
                if lower != 0.0 {
                    v += (t - knots[i]) * lower / (knots[i + k - 1] - knots[i]);
                }
                if upper != 0.0 {
                    v += (knots[i + k] - t) * upper / (knots[i + k] - knots[i + 1]);
                }
                self.set(i, k, v);
            }
        }
    }

    /// Weighted sum of the control points with the top-order basis values.
    fn blend(&self, points: &[Point2]) -> Point2 {
        let (mut x, mut y) = (0.0, 0.0);
        for (i, p) in points.iter().enumerate().take(self.count) {
            let w = self.at(i, self.order);
            x += w * p.x;
            y += w * p.y;
        }
        Point2::new(x, y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    /// Sample polyline from a digitized curve.
    fn samples() -> Vec<Point2> {
        pts(&[
            (1.0, 0.1),
            (2.24, 0.134),
            (3.0, 0.374),
            (3.5, 0.314),
            (3.9, 0.4),
            (4.0, 0.36),
            (5.0, 0.538),
            (6.0, 0.59),
            (7.0, 0.567),
        ])
    }

    #[test]
    fn linear_reproduces_polyline() {
        let ctrl = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (4.0, 4.0), (6.0, 2.0)]);
        let out = bspline(&ctrl, 2, 9).unwrap();
        let expected = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (3.0, 3.0),
            (4.0, 4.0),
            (5.0, 3.0),
            (6.0, 2.0),
        ]);
        assert_eq!(out.len(), expected.len());
        for (a, b) in out.iter().zip(&expected) {
            assert_relative_eq!(a.x, b.x, epsilon = TOL);
            assert_relative_eq!(a.y, b.y, epsilon = TOL);
        }
    }

    #[test]
    fn ends_exactly_at_last_control_point() {
        let ctrl = samples();
        for order in 2..=5 {
            let out = bspline(&ctrl, order, 37).unwrap();
            assert_eq!(out.last(), ctrl.last());
        }
    }

    #[test]
    fn starts_at_first_control_point() {
        let ctrl = samples();
        let out = bspline(&ctrl, 4, 50).unwrap();
        assert_relative_eq!(out[0].x, ctrl[0].x, epsilon = TOL);
        assert_relative_eq!(out[0].y, ctrl[0].y, epsilon = TOL);
    }

    #[test]
    fn output_count_matches_target() {
        let ctrl = samples();
        for target in [2, 10, 64, 250] {
            let out = BSplineFit::new(&ctrl, 3)
                .with_target_points(target)
                .execute()
                .unwrap();
            assert_eq!(out.len(), target);
        }
    }

    #[test]
    fn default_target_points() {
        let ctrl = samples();
        let out = BSplineFit::new(&ctrl, 3).execute().unwrap();
        assert_eq!(out.len(), DEFAULT_TARGET_POINTS);
    }

    #[test]
    fn partition_of_unity_keeps_flat_curve_flat() {
        let ctrl: Vec<Point2> = (0..7).map(|i| Point2::new(f64::from(i * i), 3.5)).collect();
        let out = bspline(&ctrl, 4, 40).unwrap();
        for p in &out {
            assert_relative_eq!(p.y, 3.5, epsilon = 1e-9);
        }
        // x stays monotonic for monotonic control x.
        assert!(out.windows(2).all(|w| w[0].x <= w[1].x + TOL));
    }

    #[test]
    fn stays_within_control_hull_bounds() {
        let ctrl = samples();
        let out = bspline(&ctrl, 3, 80).unwrap();
        for p in &out {
            assert!(p.x >= 1.0 - TOL && p.x <= 7.0 + TOL, "x={}", p.x);
            assert!(p.y >= 0.1 - TOL && p.y <= 0.59 + TOL, "y={}", p.y);
        }
    }

    #[test]
    fn repeated_control_points_are_finite() {
        let ctrl = pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0), (2.0, 0.0), (3.0, 0.0)]);
        let out = bspline(&ctrl, 3, 25).unwrap();
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(out.last(), ctrl.last());
    }

    #[test]
    fn coincident_control_points_collapse() {
        let ctrl = pts(&[(2.0, 2.0), (2.0, 2.0), (2.0, 2.0)]);
        let out = bspline(&ctrl, 2, 10).unwrap();
        assert_eq!(out, vec![Point2::new(2.0, 2.0)]);
    }

    #[test]
    fn leading_repeat_keeps_full_curve() {
        let ctrl = pts(&[(0.0, 0.0), (0.0, 0.0), (3.0, 0.0), (3.0, 3.0)]);
        let out = bspline(&ctrl, 3, 20).unwrap();
        assert_eq!(out.len(), 20);
        assert_relative_eq!(out[0].x, 0.0, epsilon = TOL);
        assert_relative_eq!(out[0].y, 0.0, epsilon = TOL);
        assert_eq!(out.last(), ctrl.last());
    }

    #[test]
    fn order_checked_against_distinct_points() {
        let ctrl = pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]);
        assert!(bspline(&ctrl, 3, 10).is_err());
        let out = bspline(&ctrl, 2, 10).unwrap();
        assert_eq!(out.len(), 10);
        assert_relative_eq!(out[5].x, out[5].y, epsilon = TOL);

        let ctrl = pts(&[(0.0, 0.0), (0.0, 0.0), (3.0, 0.0), (3.0, 3.0)]);
        assert!(bspline(&ctrl, 4, 20).is_err());
    }

    #[test]
    fn oversized_target_rejected() {
        let ctrl = samples();
        let result = BSplineFit::new(&ctrl, 3)
            .with_target_points(usize::MAX)
            .execute();
        assert!(result.is_err());
        assert!(bspline(&ctrl, 3, MAX_TARGET_POINTS + 1).is_err());
    }

    #[test]
    fn invalid_arguments_rejected() {
        let ctrl = samples();
        assert!(bspline(&ctrl[..1], 2, 10).is_err());
        assert!(bspline(&ctrl, 1, 10).is_err());
        assert!(bspline(&ctrl, ctrl.len() + 1, 10).is_err());
        assert!(bspline(&ctrl, 3, 1).is_err());
    }

    #[test]
    fn order_equal_to_count_is_bezier() {
        // Three control points, order 3: a quadratic Bézier.
        let ctrl = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)]);
        let out = bspline(&ctrl, 3, 3).unwrap();
        // t = 0.5: 0.25·P0 + 0.5·P1 + 0.25·P2
        assert_relative_eq!(out[1].x, 1.0, epsilon = TOL);
        assert_relative_eq!(out[1].y, 1.0, epsilon = TOL);
    }
}
