use super::NOT_A_CORNER;
use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Breaks a curve into pieces at every flagged corner.
///
/// Each piece ends at a corner and the next one starts at that same
/// point, so consecutive pieces share their joint. A curve without
/// corners comes back as a single piece; an empty curve yields no pieces.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `sharpness` does not have one
/// entry per point.
pub fn split_at_corners(points: &[Point2], sharpness: &[f64]) -> Result<Vec<Vec<Point2>>> {
    if points.len() != sharpness.len() {
        return Err(OperationError::InvalidInput(format!(
            "{} sharpness values for {} points",
            sharpness.len(),
            points.len()
        ))
        .into());
    }
    let Some((first, rest)) = points.split_first() else {
        return Ok(Vec::new());
    };

    let last = points.len() - 1;
    let mut pieces = Vec::new();
    let mut current = vec![*first];

    for (offset, pt) in rest.iter().enumerate() {
        let j = offset + 1;
        current.push(*pt);
        if j < last && sharpness[j] < NOT_A_CORNER {
            pieces.push(std::mem::replace(&mut current, vec![*pt]));
        }
    }
    pieces.push(current);

    Ok(pieces)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::corner::DetectCorners;

    #[test]
    fn split_l_shape_at_bend() {
        let mut pts: Vec<Point2> = (0..=10).map(|i| Point2::new(f64::from(i), 0.0)).collect();
        pts.extend((1..=10).map(|j| Point2::new(10.0, f64::from(j))));

        let detection = DetectCorners::new(&pts).execute().unwrap();
        let pieces = split_at_corners(&pts, &detection.sharpness).unwrap();

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0].len(), 11);
        assert_eq!(pieces[1].len(), 11);
        assert_eq!(pieces[0].last(), pieces[1].first());
        assert_eq!(pieces[1].first(), Some(&Point2::new(10.0, 0.0)));
    }

    #[test]
    fn no_corners_single_piece() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
        let pieces = split_at_corners(&pts, &[NOT_A_CORNER; 3]).unwrap();
        assert_eq!(pieces, vec![pts]);
    }

    #[test]
    fn endpoint_flags_ignored() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
        let pieces = split_at_corners(&pts, &[0.5, NOT_A_CORNER, 0.5]).unwrap();
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn length_mismatch_rejected() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(split_at_corners(&pts, &[NOT_A_CORNER]).is_err());
    }

    #[test]
    fn empty_curve() {
        assert!(split_at_corners(&[], &[]).unwrap().is_empty());
    }
}
