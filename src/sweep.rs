//! Sample-grid builders and post-processing helpers.

use crate::constants::angular_frequency;
use crate::math::{CScalar, RVec, Scalar};

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> RVec {
    match n {
        0 => RVec::zeros(0),
        1 => RVec::from_element(1, start),
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            RVec::from_fn(n, |i, _| start + step * i as Scalar)
        }
    }
}

/// Phase grid over one full period [0, 2π] with `n` samples.
#[must_use]
pub fn phase_period(n: usize) -> RVec {
    linspace(0.0, std::f64::consts::TAU, n)
}

/// Angular frequency sweep with linear spacing between f_start and f_stop (Hz).
#[must_use]
pub fn angular_freq_linspace(f_start_hz: Scalar, f_stop_hz: Scalar, n: usize) -> RVec {
    linspace(f_start_hz, f_stop_hz, n).map(angular_frequency)
}

/// Applies `f` to each sample and collects results.
#[must_use]
pub fn sweep_map<I, F, T>(samples: I, f: F) -> Vec<T>
where
    I: IntoIterator<Item = Scalar>,
    F: FnMut(Scalar) -> T,
{
    samples.into_iter().map(f).collect()
}

/// Magnitude of complex sequence.
#[must_use]
pub fn mag(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.norm()).collect()
}

/// Phase in degrees of complex sequence.
#[must_use]
pub fn phase_deg(values: impl IntoIterator<Item = CScalar>) -> Vec<Scalar> {
    values.into_iter().map(|v| v.arg().to_degrees()).collect()
}
