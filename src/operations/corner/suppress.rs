use super::NOT_A_CORNER;
use crate::math::distance_2d::distance_squared;
use crate::math::Point2;

/// Removes corner candidates that lie closer than `min_distance_sq` to a
/// sharper candidate, in place. Returns the number of corners left.
///
/// Scans left to right. For each candidate `j`, the following interior
/// points within the squared radius are visited in order: a strictly
/// sharper one demotes `j` and ends the walk, any other one is demoted.
/// The first and last points of the curve are never visited.
///
/// # Panics
///
/// In debug builds, if `sharpness` does not have one entry per point.
/// Release builds only scan the shorter of the two slices.
pub fn suppress_adjacent_corners(
    points: &[Point2],
    sharpness: &mut [f64],
    min_distance_sq: f64,
) -> usize {
    debug_assert_eq!(
        points.len(),
        sharpness.len(),
        "sharpness must have one entry per point"
    );
    let n = points.len().min(sharpness.len());
    if n < 3 {
        return 0;
    }
    let last = n - 1;
    let mut count = 0;

    for j in 1..last {
        let s = sharpness[j];
        if s >= NOT_A_CORNER {
            continue;
        }
        count += 1;

        let pj = &points[j];
        for pp in j + 1..last {
            if distance_squared(pj, &points[pp]) >= min_distance_sq {
                break;
            }
            if sharpness[pp] < s {
                tracing::trace!(index = j, sharper = pp, "corner demoted by sharper neighbour");
                sharpness[j] = NOT_A_CORNER;
                count -= 1;
                break;
            }
            sharpness[pp] = NOT_A_CORNER;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn line(n: u32) -> Vec<Point2> {
        (0..n).map(|i| Point2::new(f64::from(i), 0.0)).collect()
    }

    #[test]
    fn sharper_neighbour_wins() {
        let pts = line(8);
        let mut s = vec![NOT_A_CORNER; 8];
        s[1..4].copy_from_slice(&[2.0, 1.0, 2.5]);
        let count = suppress_adjacent_corners(&pts, &mut s, 9.0);
        assert_eq!(count, 1);
        assert!((s[1] - NOT_A_CORNER).abs() < TOL);
        assert!((s[2] - 1.0).abs() < TOL);
        assert!((s[3] - NOT_A_CORNER).abs() < TOL);
    }

    #[test]
    fn equal_neighbour_is_demoted() {
        let pts = line(6);
        let mut s = vec![NOT_A_CORNER, 1.0, 1.0, NOT_A_CORNER, NOT_A_CORNER, NOT_A_CORNER];
        let count = suppress_adjacent_corners(&pts, &mut s, 4.0);
        assert_eq!(count, 1);
        assert!((s[1] - 1.0).abs() < TOL);
        assert!((s[2] - NOT_A_CORNER).abs() < TOL);
    }

    #[test]
    fn distant_corners_survive() {
        let pts = line(12);
        let mut s = vec![NOT_A_CORNER; 12];
        s[2] = 1.5;
        s[8] = 0.5;
        // Radius 3: points 2 and 8 are 6 apart.
        let count = suppress_adjacent_corners(&pts, &mut s, 9.0);
        assert_eq!(count, 2);
        assert!((s[2] - 1.5).abs() < TOL);
        assert!((s[8] - 0.5).abs() < TOL);
    }

    #[test]
    fn last_point_never_visited() {
        let pts = line(4);
        let mut s = vec![NOT_A_CORNER, 1.0, NOT_A_CORNER, 0.1];
        let count = suppress_adjacent_corners(&pts, &mut s, 100.0);
        assert_eq!(count, 1);
        assert!((s[1] - 1.0).abs() < TOL);
        assert!((s[3] - 0.1).abs() < TOL);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "one entry per point")]
    fn mismatched_lengths_rejected_in_debug() {
        let pts = line(6);
        let mut s = vec![NOT_A_CORNER, 1.0, NOT_A_CORNER];
        suppress_adjacent_corners(&pts, &mut s, 16.0);
    }

    #[test]
    fn no_candidates() {
        let pts = line(5);
        let mut s = vec![NOT_A_CORNER; 5];
        assert_eq!(suppress_adjacent_corners(&pts, &mut s, 16.0), 0);
    }
}
