//! Baseline physical constants and utility functions.
//!
//! ## Accuracy
//!
//! Constants marked "exact" have zero uncertainty by SI definition (2019 revision).
//! Measured constants (ε₀, μ₀, mₑ) are provided with 11-12 significant figures.
//!
//! ## References
//!
//! Physical constants are based on CODATA 2018 recommended values:
//! - NIST Reference on Constants, Units, and Uncertainty: <https://physics.nist.gov/cuu/Constants/>

use std::f64::consts::PI;

use crate::math::Scalar;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: Scalar = 8.854_187_812_8e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: Scalar = 1.256_637_062_12e-6;
/// Speed of light in vacuum _c_ in meters per second (m/s).
/// Exact value by SI definition (2019): 299,792,458 m/s.
pub const SPEED_OF_LIGHT: Scalar = 299_792_458.0;
/// Elementary charge _e_ in coulombs (C).
/// Exact value by 2019 SI definition: 1.602176634 × 10⁻¹⁹ C.
pub const ELEMENTARY_CHARGE: Scalar = 1.602_176_634e-19;
/// Electron rest mass mₑ in kilograms (kg).
pub const ELECTRON_MASS: Scalar = 9.109_383_701_5e-31;
/// Reduced Planck constant ħ in joule seconds (J·s).
/// Exact, derived from h = 6.62607015 × 10⁻³⁴ J·s.
pub const REDUCED_PLANCK_CONSTANT: Scalar = 1.054_571_817e-34;
/// Bohr magneton μ_B = eħ / (2mₑ) in joules per tesla (J/T).
pub const BOHR_MAGNETON: Scalar =
    ELEMENTARY_CHARGE * REDUCED_PLANCK_CONSTANT / 2.0 / ELECTRON_MASS;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}
