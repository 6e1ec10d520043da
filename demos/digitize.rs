//! Digitizing walkthrough on a synthetic auto-traced path.
//!
//! ```text
//! cargo run --example digitize
//! RUST_LOG=plotgeom=trace cargo run --example digitize
//! ```
//!
//! Traces a staircase-shaped curve, breaks it at its corners, smooths each
//! piece with a B-spline and reports the area under the trace.

use plotgeom::math::distance_2d::{closest_point, closest_segment, distance_to_segment};
use plotgeom::math::intersect_2d::{intersect_line_circle, intersect_segments};
use plotgeom::math::polygon_2d::polygon_area_2d;
use plotgeom::operations::{split_at_corners, BSplineFit, CornerParams, DetectCorners};
use plotgeom::{GridPoint, Point2, PlotGeomError};

/// Staircase with 1-pixel spacing: right 12, up 12, right 12.
fn traced_path() -> Vec<Point2> {
    let mut pts: Vec<Point2> = (0..=12).map(|i| Point2::new(f64::from(i), 0.0)).collect();
    pts.extend((1..=12).map(|j| Point2::new(12.0, f64::from(j))));
    pts.extend((13..=24).map(|i| Point2::new(f64::from(i), 12.0)));
    pts
}

fn main() -> Result<(), PlotGeomError> {
    // Default: WARN for everything, INFO for the demo and plotgeom.
    // Override with RUST_LOG (e.g. RUST_LOG=plotgeom=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("digitize=info".parse().unwrap_or_default())
        .add_directive("plotgeom=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = traced_path();

    let detection = DetectCorners::new(&path)
        .with_params(CornerParams::default())
        .execute()?;
    tracing::info!(
        corners = detection.corner_count,
        at = ?detection.corner_indices(),
        "corners detected"
    );

    let pieces = split_at_corners(&path, &detection.sharpness)?;
    for (i, piece) in pieces.iter().enumerate() {
        if piece.len() < 2 {
            continue;
        }
        let order = piece.len().min(3);
        let smooth = BSplineFit::new(piece, order)
            .with_target_points(20)
            .execute()?;
        tracing::info!(piece = i, input = piece.len(), output = smooth.len(), "piece smoothed");
    }

    // Close the trace down to the x axis to measure the area beneath it.
    let mut outline = path.clone();
    outline.push(Point2::new(24.0, 0.0));
    tracing::info!(area = polygon_area_2d(&outline), "area under trace");

    let click = Point2::new(11.2, 6.3);
    let nearest = closest_point(&path, &click);
    let segment = closest_segment(&path, &click);
    if let Some(seg) = segment {
        let d = distance_to_segment(&path[seg], &path[seg + 1], &click, false);
        tracing::info!(?nearest, segment = seg, distance = d, "click snapped");
    }

    let crossing = intersect_segments(
        &GridPoint::new(0, 0),
        &GridPoint::new(24, 12),
        &GridPoint::new(12, 0),
        &GridPoint::new(12, 12),
    );
    tracing::info!(?crossing, "diagonal meets riser");

    if let Some(hits) = intersect_line_circle(
        &Point2::new(0.0, 6.0),
        &Point2::new(24.0, 6.0),
        &Point2::new(12.0, 6.0),
        4.0,
    ) {
        tracing::info!(?hits, "marker circle crossings");
    }

    Ok(())
}
