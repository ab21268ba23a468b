use crate::foundation::core::Point;
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Densify an ordered point sequence so consecutive points are no farther
/// apart than `max_spacing`.
///
/// Each segment longer than `max_spacing` is replaced by `ceil(d /
/// max_spacing)` evenly spaced points (linear interpolation); the final input
/// point is always appended once at the end, so the output starts at the
/// first input point and ends at the last. A sequence that is already dense
/// comes back unchanged.
pub fn resample(points: &[Point], max_spacing: f64) -> EpicycleResult<Vec<Point>> {
    if !(max_spacing > 0.0) {
        return Err(EpicycleError::validation(format!(
            "resample spacing must be > 0, got {max_spacing}"
        )));
    }
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = Vec::with_capacity(points.len());
    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let dist = start.distance(end);
        // Coincident points still emit the segment start once.
        let steps = (dist / max_spacing).ceil().max(1.0) as usize;
        let step = (end - start) / (steps as f64);
        for j in 0..steps {
            out.push(start + step * (j as f64));
        }
    }
    out.push(points[points.len() - 1]);

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/resample.rs"]
mod tests;
