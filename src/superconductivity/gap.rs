use crate::math::{phasor, CScalar, Scalar};

/// Bulk superconductor described by its gap magnitude and condensate phase.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superconductivity {
    delta: Scalar,
    phi: Scalar,
}

impl Superconductivity {
    /// Creates a condensate with gap `delta` and phase `phi` (rad).
    #[must_use]
    pub fn new(delta: Scalar, phi: Scalar) -> Self {
        Self { delta, phi }
    }

    /// Gap magnitude Δ.
    #[must_use]
    pub fn delta(&self) -> Scalar {
        self.delta
    }

    /// Condensate phase φ (rad).
    #[must_use]
    pub fn phi(&self) -> Scalar {
        self.phi
    }

    /// Complex order parameter Δ e^{iφ}.
    #[must_use]
    pub fn order_parameter(&self) -> CScalar {
        self.delta * phasor(self.phi)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn magnitude_is_gap_for_any_phase() {
        for phi in [-3.0, -FRAC_PI_2, 0.0, 0.4, FRAC_PI_2, 2.5] {
            let op = Superconductivity::new(1.7e-4, phi).order_parameter();
            assert_relative_eq!(op.norm(), 1.7e-4, max_relative = 1e-12);
            assert_relative_eq!(op.arg(), phi, epsilon = 1e-12);
        }
    }

    #[test]
    fn phase_is_wrapped() {
        let op = Superconductivity::new(1.0, 3.0 * PI / 2.0).order_parameter();
        assert_relative_eq!(op.arg(), -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_is_imaginary() {
        let op = Superconductivity::new(1.0, FRAC_PI_2).order_parameter();
        assert_relative_eq!(op.re, 0.0, epsilon = 1e-15);
        assert_relative_eq!(op.im, 1.0, epsilon = 1e-15);
    }
}
