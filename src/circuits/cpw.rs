//! Coplanar waveguide per-unit-length parameters.
//!
//! Capacitance follows the zero-order conformal-mapping result for a CPW on a
//! thick substrate, with K(k)/K(k') replaced by the logarithmic approximation
//! split at `k = 1/√2`. Kinetic inductance is the zero-order sheet value
//! divided by the center-trace width.
//!
//! References:
//! - <http://qucs.sourceforge.net/tech/node86.html>
//! - Clem, J. Appl. Phys. 113, 013910 (2013), doi:10.1063/1.4773070

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::math::Scalar;

/// Coplanar waveguide geometry on a dielectric substrate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CPW {
    width: Scalar,
    spacing: Scalar,
    epsilon_r: Scalar,
    kinetic_sheet_inductance: Scalar,
}

impl CPW {
    /// Creates a CPW with center width and gap `spacing` in meters, substrate
    /// relative permittivity `epsilon_r` and kinetic sheet inductance in H/□.
    #[must_use]
    pub fn new(
        width: Scalar,
        spacing: Scalar,
        epsilon_r: Scalar,
        kinetic_sheet_inductance: Scalar,
    ) -> Self {
        let cpw = Self {
            width,
            spacing,
            epsilon_r,
            kinetic_sheet_inductance,
        };
        let k = cpw.k();
        if !(k > 0.0 && k < 1.0) {
            log::warn!("CPW geometry ratio k = {k} outside (0, 1); results will not be finite");
        }
        cpw
    }

    /// Center conductor width (m).
    #[must_use]
    pub fn width(&self) -> Scalar {
        self.width
    }

    /// Gap between center conductor and ground planes (m).
    #[must_use]
    pub fn spacing(&self) -> Scalar {
        self.spacing
    }

    /// Substrate relative permittivity.
    #[must_use]
    pub fn epsilon_r(&self) -> Scalar {
        self.epsilon_r
    }

    /// Kinetic inductance per square (H).
    #[must_use]
    pub fn kinetic_sheet_inductance(&self) -> Scalar {
        self.kinetic_sheet_inductance
    }

    /// Geometric ratio `w / (w + 2s)`.
    #[must_use]
    pub fn k(&self) -> Scalar {
        self.width / (self.width + 2.0 * self.spacing)
    }

    /// Approximate elliptic-integral ratio K(k)/K(k').
    #[must_use]
    pub fn elliptic_ratio(&self) -> Scalar {
        let k = self.k();
        if k <= FRAC_1_SQRT_2 {
            log::trace!("CPW k = {k}: small-k branch");
            let kprime = (1.0 - k * k).sqrt();
            PI / (2.0 * (1.0 + kprime.sqrt()) / (1.0 - kprime.sqrt())).ln()
        } else {
            log::trace!("CPW k = {k}: large-k branch");
            (2.0 * (1.0 + k.sqrt()) / (1.0 - k.sqrt())).ln() / PI
        }
    }

    /// Capacitance per unit length of the half-space above the line (F/m).
    #[must_use]
    pub fn capacitance_air(&self) -> Scalar {
        2.0 * VACUUM_PERMITTIVITY * self.elliptic_ratio()
    }

    /// Capacitance per unit length of the substrate half-space (F/m).
    #[must_use]
    pub fn capacitance_dielectric(&self) -> Scalar {
        2.0 * VACUUM_PERMITTIVITY * self.epsilon_r * self.elliptic_ratio()
    }

    /// Total capacitance per unit length (F/m).
    #[must_use]
    pub fn capacitance_total(&self) -> Scalar {
        self.capacitance_dielectric() + self.capacitance_air()
    }

    /// Effective permittivity `(ε_r + 1) / 2` seen by the quasi-TEM mode.
    #[must_use]
    pub fn effective_permittivity(&self) -> Scalar {
        (self.epsilon_r + 1.0) / 2.0
    }

    /// Characteristic impedance ignoring kinetic inductance (Ω).
    #[must_use]
    pub fn impedance_characteristic(&self) -> Scalar {
        30.0 * PI / self.effective_permittivity().sqrt() / self.elliptic_ratio()
    }

    /// Geometric (magnetic) inductance per unit length (H/m).
    #[must_use]
    pub fn inductance_geometric(&self) -> Scalar {
        VACUUM_PERMEABILITY / 4.0 / self.elliptic_ratio()
    }

    /// Kinetic inductance per unit length, zero-order approximation (H/m).
    #[must_use]
    pub fn inductance_kinetic(&self) -> Scalar {
        self.kinetic_sheet_inductance / self.width
    }

    /// Geometric plus kinetic inductance per unit length (H/m).
    #[must_use]
    pub fn inductance_total(&self) -> Scalar {
        self.inductance_geometric() + self.inductance_kinetic()
    }

    /// Share of the total inductance that is geometric.
    #[must_use]
    pub fn inductance_fraction(&self) -> Scalar {
        let geometric = self.inductance_geometric();
        geometric / (geometric + self.inductance_kinetic())
    }

    /// Phase velocity `1/√(L C)` including kinetic inductance (m/s).
    #[must_use]
    pub fn phase_velocity(&self) -> Scalar {
        1.0 / (self.inductance_total() * self.capacitance_total()).sqrt()
    }
}
