use super::{CornerParams, NOT_A_CORNER};
use crate::math::distance_2d::distance_squared;
use crate::math::Point2;

/// Fits a growing family of triangles with tip `points[tip]` and returns
/// the smallest admissible opening angle, or [`NOT_A_CORNER`].
///
/// Legs run to `tip - 1 - k` and `tip + 1 + k` for `k = 0, 1, …`. A
/// triangle is admissible when both squared legs exceed
/// `min_distance_sq` and stay below `max_distance_sq`; the upper bound
/// does not apply until the first admissible triangle has been found, so
/// at least one candidate is always evaluated on a coarse curve.
///
/// Growth stops when an admissible triangle opens wider than
/// `max_angle`, when a leg reaches the upper bound, or when either leg
/// reaches an end of the curve.
///
/// `tip` outside `1..points.len() - 1` yields [`NOT_A_CORNER`].
#[must_use]
pub fn fit_triangle(points: &[Point2], tip: usize, params: &CornerParams) -> f64 {
    let n = points.len();
    if tip == 0 || tip + 1 >= n {
        return NOT_A_CORNER;
    }

    let p = &points[tip];
    let mut sharpest = NOT_A_CORNER;
    let mut back = tip - 1;
    let mut fwd = tip + 1;
    let mut first = true;

    loop {
        let pm = &points[back];
        let pp = &points[fwd];
        let a2 = distance_squared(p, pp);
        let b2 = distance_squared(p, pm);

        let a_in = a2 < params.max_distance_sq || first;
        let b_in = b2 < params.max_distance_sq || first;

        if a2 > params.min_distance_sq && b2 > params.min_distance_sq && a_in && b_in {
            first = false;
            let alpha = opening_angle(a2, b2, distance_squared(pp, pm));
            if alpha >= params.max_angle {
                break;
            }
            sharpest = sharpest.min(alpha);
        }

        if !(a_in && b_in) || back == 0 || fwd == n - 1 {
            break;
        }
        back -= 1;
        fwd += 1;
    }

    sharpest
}

/// Angle at the tip of a triangle with squared legs `a2`, `b2` and
/// squared base `c2` (law of cosines), in `[0, π]`.
fn opening_angle(a2: f64, b2: f64, c2: f64) -> f64 {
    let cos = (a2 + b2 - c2) / (2.0 * (a2 * b2).sqrt());
    cos.clamp(-1.0, 1.0).acos()
}
