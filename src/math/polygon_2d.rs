use super::Point2;

/// Computes the signed area of a closed polygon.
///
/// The last point implicitly connects back to the first. Positive for
/// counter-clockwise winding, negative for clockwise. Self-intersecting
/// polygons are not detected; their lobes simply add with their own signs.
///
/// Evaluates `2A = Σ xᵢ (yᵢ₊₁ − yᵢ₋₁)` with every `x` shifted by the
/// minimum `x`, which leaves the sum unchanged but keeps the terms small
/// for polygons far from the origin. Fewer than 3 points give `0.0`.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let x_min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);

    let mut sum = 0.0;
    for i in 0..n {
        let prev = points[(i + n - 1) % n].y;
        let next = points[(i + 1) % n].y;
        sum += (points[i].x - x_min) * (next - prev);
    }
    sum * 0.5
}

/// Unsigned area of a closed polygon, `|signed_area_2d(points)|`.
#[must_use]
pub fn polygon_area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}
