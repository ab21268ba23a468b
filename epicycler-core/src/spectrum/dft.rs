use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::foundation::core::Point;
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// One rotating-vector component of a discretized closed path.
///
/// Produced by [`component`]/[`analyze`]; `amplitude` and `phase` are derived
/// from the full point sequence, never set independently. `amplitude` is a
/// vector magnitude and therefore always >= 0; `phase` is in radians, defined
/// modulo 2π.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrequencyComponent {
    /// Integer frequency index. For a length-T signal, indices `k` and `k+T`
    /// produce identical components; requesting frequencies >= T yields no
    /// new information.
    pub frequency: i64,
    /// Vector magnitude, always >= 0.
    pub amplitude: f64,
    /// Phase angle in radians.
    pub phase: f64,
}

/// An amplitude/phase pair without a frequency attached, for component
/// algebra outside the per-frame synthesis loop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Polar {
    /// Vector magnitude, always >= 0.
    pub amplitude: f64,
    /// Phase angle in radians.
    pub phase: f64,
}

/// Convert a rectangular complex value to polar form.
pub fn to_polar(re: f64, im: f64) -> Polar {
    Polar {
        amplitude: (re * re + im * im).sqrt(),
        phase: im.atan2(re),
    }
}

/// Sum two polar values: convert both to rectangular form, add, convert back.
pub fn add_polar(a: Polar, b: Polar) -> Polar {
    let re = a.amplitude * a.phase.cos() + b.amplitude * b.phase.cos();
    let im = a.amplitude * a.phase.sin() + b.amplitude * b.phase.sin();
    to_polar(re, im)
}

/// Compute the frequency component of a point sequence at one integer
/// frequency.
///
/// The sequence is treated as one period of a periodic signal of length
/// `T = points.len()`. This is the direct O(T) sum; for the tens-to-hundreds
/// of samples an interactive visualization feeds in, no FFT is warranted.
///
/// An empty sequence is a precondition violation and fails fast with
/// [`EpicycleError::Spectrum`] rather than producing NaN amplitudes.
pub fn component(points: &[Point], frequency: i64) -> EpicycleResult<FrequencyComponent> {
    if points.is_empty() {
        return Err(EpicycleError::spectrum(
            "cannot analyze an empty point sequence",
        ));
    }
    Ok(component_unchecked(points, frequency))
}

fn component_unchecked(points: &[Point], frequency: i64) -> FrequencyComponent {
    let period = points.len() as f64;
    let mut re = 0.0;
    let mut im = 0.0;

    for (t, p) in points.iter().enumerate() {
        let phi = TAU * (frequency as f64) * (t as f64) / period;
        re += p.x * phi.cos() + p.y * phi.sin();
        im += -p.x * phi.sin() + p.y * phi.cos();
    }

    let polar = to_polar(re / period, im / period);
    FrequencyComponent {
        frequency,
        amplitude: polar.amplitude,
        phase: polar.phase,
    }
}

/// Batch-analyze a point sequence over an arbitrary integer frequency set.
///
/// Output order matches `frequencies`; each frequency is computed over the
/// same immutable sequence into its own output slot, so the per-frequency
/// work parallelizes freely.
#[tracing::instrument(skip(points, frequencies), fields(samples = points.len(), set = frequencies.len()))]
pub fn analyze(points: &[Point], frequencies: &[i64]) -> EpicycleResult<Vec<FrequencyComponent>> {
    if points.is_empty() {
        return Err(EpicycleError::spectrum(
            "cannot analyze an empty point sequence",
        ));
    }
    Ok(frequencies
        .par_iter()
        .map(|&f| component_unchecked(points, f))
        .collect())
}

/// The conventional default frequency set: `1..=n`, ascending, no DC term.
pub fn ascending_frequencies(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/spectrum/dft.rs"]
mod tests;
