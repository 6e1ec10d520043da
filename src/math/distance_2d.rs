use super::Point2;

/// Returns the squared Euclidean distance between two points.
#[must_use]
pub fn distance_squared(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Returns the distance from `p` to the line segment `p1`→`p2`.
///
/// When the projection of `p` falls between the endpoints, or `infinite` is
/// `true`, the result is the *signed* perpendicular distance to the line
/// through `p1` and `p2`: positive when `p` lies to the right of the
/// directed line `p1`→`p2`, negative when it lies to the left. Swapping the
/// endpoints flips the sign.
///
/// When `infinite` is `false` and the projection falls outside the segment,
/// the (non-negative) distance to the nearer endpoint is returned.
///
/// A zero-length segment (`p1 == p2`) yields the distance from `p` to `p1`.
///
/// Coordinates must be finite; non-finite input gives an unspecified result.
#[must_use]
pub fn distance_to_segment(p1: &Point2, p2: &Point2, p: &Point2, infinite: bool) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let px = p.x - p1.x;
    let py = p.y - p1.y;

    // Collapsed segment.
    if dx == 0.0 && dy == 0.0 {
        return (px * px + py * py).sqrt();
    }

    let len_sq = dx * dx + dy * dy;

    if !infinite {
        // Projection parameter scaled by |d|².
        let proj = dx * px + dy * py;
        if proj < 0.0 {
            return (px * px + py * py).sqrt();
        }
        if proj > len_sq {
            return distance_squared(p2, p).sqrt();
        }
    }

    (dy * px - dx * py) / len_sq.sqrt()
}

/// Returns the index of the point in `points` closest to `target`.
///
/// Ties resolve to the first index in scan order. Returns `None` for an
/// empty slice.
#[must_use]
pub fn closest_point(points: &[Point2], target: &Point2) -> Option<usize> {
    let mut index = None;
    let mut min_dist_sq = f64::INFINITY;
    for (i, pt) in points.iter().enumerate() {
        let d2 = distance_squared(target, pt);
        if index.is_none() || d2 < min_dist_sq {
            min_dist_sq = d2;
            index = Some(i);
        }
    }
    index
}

/// Returns the start index `i` of the segment `[i, i + 1]` of the polyline
/// `points` that is closest to `target`.
///
/// Distances are measured to the bounded segments (never the infinite
/// lines). Ties keep the first segment. A single point yields `Some(0)` and
/// an empty slice yields `None`.
#[must_use]
pub fn closest_segment(points: &[Point2], target: &Point2) -> Option<usize> {
    match points.len() {
        0 => None,
        1 => Some(0),
        _ => {
            let mut best = 0;
            let mut min_dist = f64::INFINITY;
            for (i, seg) in points.windows(2).enumerate() {
                let d = distance_to_segment(&seg[0], &seg[1], target, false).abs();
                if d < min_dist {
                    min_dist = d;
                    best = i;
                }
            }
            Some(best)
        }
    }
}
