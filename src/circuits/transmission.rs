//! Uniform transmission lines described by telegrapher's-equation parameters.

use crate::constants::angular_frequency;
use crate::math::{CScalar, Scalar, J};

/// Distributed RLGC parameters per unit length.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RLGC {
    /// Series resistance per meter (Ω/m).
    pub r_per_m: Scalar,
    /// Series inductance per meter (H/m).
    pub l_per_m: Scalar,
    /// Shunt conductance per meter (S/m).
    pub g_per_m: Scalar,
    /// Shunt capacitance per meter (F/m).
    pub c_per_m: Scalar,
}

impl RLGC {
    /// Lossless line parameters (R=G=0).
    #[must_use]
    pub fn lossless(l_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self {
            r_per_m: 0.0,
            l_per_m,
            g_per_m: 0.0,
            c_per_m,
        }
    }
}

/// Transmission line evaluated at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransmissionLine {
    omega: Scalar,
    rlgc: RLGC,
}

impl TransmissionLine {
    /// Line at `frequency` (Hz) with per-unit-length inductance, resistance,
    /// capacitance and conductance.
    #[must_use]
    pub fn new(
        frequency: Scalar,
        inductance: Scalar,
        resistance: Scalar,
        capacitance: Scalar,
        conductance: Scalar,
    ) -> Self {
        Self::from_rlgc(
            frequency,
            RLGC {
                r_per_m: resistance,
                l_per_m: inductance,
                g_per_m: conductance,
                c_per_m: capacitance,
            },
        )
    }

    /// Line at `frequency` (Hz) from a prepared [`RLGC`] set.
    #[must_use]
    pub fn from_rlgc(frequency: Scalar, rlgc: RLGC) -> Self {
        Self {
            omega: angular_frequency(frequency),
            rlgc,
        }
    }

    /// Lossless line shortcut.
    #[must_use]
    pub fn lossless(frequency: Scalar, l_per_m: Scalar, c_per_m: Scalar) -> Self {
        Self::from_rlgc(frequency, RLGC::lossless(l_per_m, c_per_m))
    }

    /// Angular frequency ω (rad/s).
    #[must_use]
    pub fn angular_frequency(&self) -> Scalar {
        self.omega
    }

    /// Per-unit-length parameters.
    #[must_use]
    pub fn rlgc(&self) -> RLGC {
        self.rlgc
    }

    fn series(&self) -> CScalar {
        self.rlgc.r_per_m + J * self.omega * self.rlgc.l_per_m
    }

    fn shunt(&self) -> CScalar {
        self.rlgc.g_per_m + J * self.omega * self.rlgc.c_per_m
    }

    /// Characteristic impedance Z₀ = √((R + jωL)/(G + jωC)).
    #[must_use]
    pub fn impedance_line(&self) -> CScalar {
        (self.series() / self.shunt()).sqrt()
    }

    /// Propagation constant γ = √((R + jωL)(G + jωC)).
    #[must_use]
    pub fn propagation_constant(&self) -> CScalar {
        (self.series() * self.shunt()).sqrt()
    }

    /// Reflection coefficient of `impedance_load` terminating the line.
    #[must_use]
    pub fn reflection_coefficient(&self, impedance_load: impl Into<CScalar>) -> CScalar {
        let zl = impedance_load.into();
        let z0 = self.impedance_line();
        (zl - z0) / (zl + z0)
    }

    /// Impedance seen at the input of `length` meters of line terminated by
    /// `impedance_load`, Z₀ (Z_L + jZ₀ tan γℓ) / (Z₀ + jZ_L tan γℓ).
    #[must_use]
    pub fn input_impedance(&self, length: Scalar, impedance_load: impl Into<CScalar>) -> CScalar {
        let zl = impedance_load.into();
        let z0 = self.impedance_line();
        let t = (self.propagation_constant() * length).tan();
        z0 * (zl + J * z0 * t) / (z0 + J * zl * t)
    }
}
