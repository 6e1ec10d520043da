use crate::math::Point2;

/// Builds the clamped knot vector for a B-spline of `order` through
/// `points`.
///
/// The vector has `points.len() + order` entries: `order` zeros, interior
/// knots advancing by one per distinct consecutive control point, and the
/// final value repeated up to the end. Repeated control points do not
/// advance the knot, which keeps every non-empty span well defined.
///
/// Expects `order >= 2`; an empty `points` slice yields an empty vector.
#[must_use]
pub fn clamped_knots(points: &[Point2], order: usize) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len() - 1;
    let len = n + order + 1;
    let mut knots = vec![0.0; len];

    for i in order..len {
        let distinct = i <= n + 1
            && matches!(
                (points.get(i - order), points.get(i - order + 1)),
                (Some(a), Some(b)) if a != b
            );
        knots[i] = if distinct { knots[i - 1] + 1.0 } else { knots[i - 1] };
    }
    knots
}
