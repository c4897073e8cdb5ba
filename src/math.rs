//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::DVector;

use crate::errors::MesoError;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and impedances.
pub type CScalar = num_complex::Complex<Scalar>;
/// Dynamically sized real sample array (phase grids, field sweeps, channel lists).
pub type RVec = DVector<Scalar>;

/// Imaginary unit.
pub const J: CScalar = CScalar::new(0.0, 1.0);

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

/// Numerical derivative of sampled `values` with respect to the coordinates `x`.
///
/// Interior points use the second-order accurate central difference for
/// non-uniform spacing; the two end points use first-order one-sided
/// differences. At least two samples are required.
pub fn gradient(values: &RVec, x: &RVec) -> Result<RVec, MesoError> {
    let n = x.len();
    if values.len() != n {
        return Err(MesoError::LengthMismatch {
            expected: n,
            found: values.len(),
        });
    }
    if n < 2 {
        return Err(MesoError::InsufficientSamples {
            required: 2,
            found: n,
        });
    }
    log::trace!("finite-difference gradient over {n} samples");

    let mut out = RVec::zeros(n);
    out[0] = (values[1] - values[0]) / (x[1] - x[0]);
    out[n - 1] = (values[n - 1] - values[n - 2]) / (x[n - 1] - x[n - 2]);
    for i in 1..n - 1 {
        let hl = x[i] - x[i - 1];
        let hr = x[i + 1] - x[i];
        out[i] = (hl * hl * values[i + 1] - hr * hr * values[i - 1]
            + (hr * hr - hl * hl) * values[i])
            / (hl * hr * (hl + hr));
    }
    Ok(out)
}
