use super::{GridPoint, Point2};
use crate::error::{GeometryError, Result};

/// Classification of a segment-segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIntersection {
    /// The segments do not touch.
    NoIntersection,
    /// The segments cross or touch at a single point (rounded to the grid).
    Intersect(GridPoint),
    /// The segments are parallel and their bounding boxes overlap.
    ///
    /// Treated as non-intersecting: no single crossing point exists.
    Collinear,
}

impl SegmentIntersection {
    /// Returns the intersection point, if the segments cross at one point.
    #[must_use]
    pub fn point(&self) -> Option<GridPoint> {
        match self {
            Self::Intersect(pt) => Some(*pt),
            Self::NoIntersection | Self::Collinear => None,
        }
    }

    /// Returns `true` only for [`SegmentIntersection::Intersect`].
    #[must_use]
    pub fn is_intersect(&self) -> bool {
        matches!(self, Self::Intersect(_))
    }
}

/// Exact integer intersection test of segments `a1`→`a2` and `b1`→`b2`.
///
/// All arithmetic is carried out in `i128`, so the classification is exact
/// for every `i32` input. The crossing point is rounded half away from zero
/// relative to `a1`, never truncated.
///
/// Parallel segments whose bounding boxes overlap are reported as
/// [`SegmentIntersection::Collinear`].
#[must_use]
pub fn intersect_segments(
    a1: &GridPoint,
    a2: &GridPoint,
    b1: &GridPoint,
    b2: &GridPoint,
) -> SegmentIntersection {
    let (a1x, a1y) = (i128::from(a1.x), i128::from(a1.y));
    let (a2x, a2y) = (i128::from(a2.x), i128::from(a2.y));
    let (b1x, b1y) = (i128::from(b1.x), i128::from(b1.y));
    let (b2x, b2y) = (i128::from(b2.x), i128::from(b2.y));

    let ax = a2x - a1x;
    let bx = b1x - b2x;
    if !ranges_overlap(a1x, a2x, ax, b1x, b2x, bx) {
        return SegmentIntersection::NoIntersection;
    }

    let ay = a2y - a1y;
    let by = b1y - b2y;
    if !ranges_overlap(a1y, a2y, ay, b1y, b2y, by) {
        return SegmentIntersection::NoIntersection;
    }

    let cx = a1x - b1x;
    let cy = a1y - b1y;
    // Alpha numerator and shared denominator.
    let d = by * cx - bx * cy;
    let f = ay * bx - ax * by;
    if f > 0 {
        if d < 0 || d > f {
            return SegmentIntersection::NoIntersection;
        }
    } else if d > 0 || d < f {
        return SegmentIntersection::NoIntersection;
    }

    if f == 0 {
        return SegmentIntersection::Collinear;
    }

    let x = a1x + rounded_quotient(d * ax, f);
    let y = a1y + rounded_quotient(d * ay, f);
    SegmentIntersection::Intersect(GridPoint::new(to_grid(x), to_grid(y)))
}

/// One-axis bounding-box test.
///
/// `da = a2 - a1` and `db = b1 - b2` orient each interval without sorting.
fn ranges_overlap(a1: i128, a2: i128, da: i128, b1: i128, b2: i128, db: i128) -> bool {
    let (lo, hi) = if da < 0 { (a2, a1) } else { (a1, a2) };
    if db > 0 {
        hi >= b2 && b1 >= lo
    } else {
        hi >= b1 && b2 >= lo
    }
}

/// `num / den` rounded half away from zero.
fn rounded_quotient(num: i128, den: i128) -> i128 {
    let offset = if (num ^ den) >= 0 { den / 2 } else { -den / 2 };
    (num + offset) / den
}

/// The rounded crossing stays inside the bounding box of `a`, so it always
/// fits; saturate rather than panic regardless.
fn to_grid(v: i128) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// Intersection of the infinite line through `p1`, `p2` with the circle
/// of `radius` centered at `center`.
///
/// Returns `None` when the line misses the circle. A tangent line yields
/// the touching point in both slots; otherwise the two crossing points are
/// returned.
///
/// `p1` and `p2` must be distinct; see [`try_intersect_line_circle`] for a
/// checked variant.
#[must_use]
pub fn intersect_line_circle(
    p1: &Point2,
    p2: &Point2,
    center: &Point2,
    radius: f64,
) -> Option<[Point2; 2]> {
    let mut out = [Point2::origin(); 2];
    intersect_line_circle_into(p1, p2, center, radius, &mut out).then_some(out)
}

/// Same as [`intersect_line_circle`], writing into caller-owned storage.
///
/// Returns `false` and leaves `out` untouched when there is no
/// intersection.
#[must_use]
pub fn intersect_line_circle_into(
    p1: &Point2,
    p2: &Point2,
    center: &Point2,
    radius: f64,
    out: &mut [Point2; 2],
) -> bool {
    // Work with the circle at the origin.
    let (x1, y1) = (p1.x - center.x, p1.y - center.y);
    let (x2, y2) = (p2.x - center.x, p2.y - center.y);

    let dx = x2 - x1;
    let dy = y2 - y1;
    let dr_sq = dx * dx + dy * dy;
    let det = x1 * y2 - x2 * y1;

    let discriminant = radius * radius * dr_sq - det * det;
    if discriminant < 0.0 {
        return false;
    }

    if discriminant == 0.0 {
        let tangent = Point2::new(
            det * dy / dr_sq + center.x,
            -det * dx / dr_sq + center.y,
        );
        out[0] = tangent;
        out[1] = tangent;
        return true;
    }

    let root = discriminant.sqrt();
    let sgn_dy = if dy < 0.0 { -1.0 } else { 1.0 };
    let (bx, ex) = (det * dy, sgn_dy * dx * root);
    let (by, ey) = (-det * dx, dy.abs() * root);

    out[0] = Point2::new((bx + ex) / dr_sq + center.x, (by + ey) / dr_sq + center.y);
    out[1] = Point2::new((bx - ex) / dr_sq + center.x, (by - ey) / dr_sq + center.y);
    true
}

/// Checked variant of [`intersect_line_circle`].
///
/// # Errors
///
/// - `GeometryError::Degenerate` if `p1 == p2` (no line is defined)
/// - `GeometryError::ParameterOutOfRange` if `radius` is negative
pub fn try_intersect_line_circle(
    p1: &Point2,
    p2: &Point2,
    center: &Point2,
    radius: f64,
) -> Result<Option<[Point2; 2]>> {
    if p1 == p2 {
        return Err(GeometryError::Degenerate(format!(
            "line through coincident points ({}, {})",
            p1.x, p1.y
        ))
        .into());
    }
    if radius < 0.0 {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: radius,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    Ok(intersect_line_circle(p1, p2, center, radius))
}
