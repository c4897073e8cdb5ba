//! Free-electron transport models.

use crate::constants::{angular_frequency, ELECTRON_MASS, ELEMENTARY_CHARGE};
use crate::math::{CScalar, Scalar, J};

/// Drude model of a conductor with a single carrier species.
///
/// The frequency defaults to zero, in which case the conductivity is the
/// real DC value n q² τ / m.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrudeModelDC {
    density: Scalar,
    tau: Scalar,
    charge: Scalar,
    mass: Scalar,
    omega: Scalar,
}

impl DrudeModelDC {
    /// Electrons with carrier `density` (m⁻³) and mean free time (s).
    #[must_use]
    pub fn new(density: Scalar, mean_free_time: Scalar) -> Self {
        Self {
            density,
            tau: mean_free_time,
            charge: ELEMENTARY_CHARGE,
            mass: ELECTRON_MASS,
            omega: 0.0,
        }
    }

    /// Replaces the carrier charge (C).
    #[must_use]
    pub fn with_charge(self, charge: Scalar) -> Self {
        Self { charge, ..self }
    }

    /// Replaces the carrier (effective) mass (kg).
    #[must_use]
    pub fn with_mass(self, mass: Scalar) -> Self {
        Self { mass, ..self }
    }

    /// Evaluates the model at `frequency` (Hz) instead of DC.
    #[must_use]
    pub fn with_frequency(self, frequency: Scalar) -> Self {
        Self {
            omega: angular_frequency(frequency),
            ..self
        }
    }

    /// Carrier density (m⁻³).
    #[must_use]
    pub fn density(&self) -> Scalar {
        self.density
    }

    /// Mean free time τ (s).
    #[must_use]
    pub fn mean_free_time(&self) -> Scalar {
        self.tau
    }

    /// Carrier charge (C).
    #[must_use]
    pub fn charge(&self) -> Scalar {
        self.charge
    }

    /// Carrier mass (kg).
    #[must_use]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Angular frequency ω (rad/s).
    #[must_use]
    pub fn angular_frequency(&self) -> Scalar {
        self.omega
    }

    /// DC conductivity n q² τ / m (S/m).
    #[must_use]
    pub fn dc_conductivity(&self) -> Scalar {
        self.density * self.charge.powi(2) * self.tau / self.mass
    }

    /// DC resistivity (Ω·m).
    #[must_use]
    pub fn resistivity(&self) -> Scalar {
        1.0 / self.dc_conductivity()
    }

    /// Complex conductivity n q² τ / (m (1 + iωτ)) (S/m).
    #[must_use]
    pub fn complex_conductivity(&self) -> CScalar {
        self.density * self.charge.powi(2) * self.tau / (self.mass * (1.0 + J * self.omega * self.tau))
    }

    /// Current density J = σE for field `electric_field` (V/m), in A/m².
    #[must_use]
    pub fn current_density(&self, electric_field: Scalar) -> CScalar {
        self.complex_conductivity() * electric_field
    }

    /// Kinetic inductance m ℓ / (n q² A) of a wire of `length` (m) and
    /// `crosssection` (m²), in henries.
    #[must_use]
    pub fn kinetic_inductance(&self, length: Scalar, crosssection: Scalar) -> Scalar {
        self.mass / (self.density * self.charge.powi(2)) * length / crosssection
    }
}
