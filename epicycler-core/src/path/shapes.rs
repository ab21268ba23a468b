use std::f64::consts::TAU;

use crate::foundation::core::Point;

/// Sample `n` points around an axis-aligned oval, counter-clockwise from the
/// positive x axis. Useful as a synthetic path source when no document is at
/// hand.
pub fn oval_points(center: Point, rx: f64, ry: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|t| {
            let angle = TAU * (t as f64) / (n as f64);
            Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

/// The five corner points of an axis-aligned rectangle, closed back to the
/// starting corner. Pair with [`crate::resample`] to densify the edges.
pub fn rect_points(center: Point, half_w: f64, half_h: f64) -> Vec<Point> {
    let (cx, cy) = (center.x, center.y);
    vec![
        Point::new(cx - half_w, cy - half_h),
        Point::new(cx + half_w, cy - half_h),
        Point::new(cx + half_w, cy + half_h),
        Point::new(cx - half_w, cy + half_h),
        Point::new(cx - half_w, cy - half_h),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/path/shapes.rs"]
mod tests;
