use crate::constants::{ELEMENTARY_CHARGE, REDUCED_PLANCK_CONSTANT};
use crate::errors::MesoError;
use crate::math::{gradient, RVec, Scalar};

/// Short Josephson junction with a single Andreev channel.
///
/// The phase difference is held as a sample array. Energy and wavefunction
/// are evaluated point by point; supercurrent and Josephson inductance are
/// finite-difference derivatives over the samples, so the grid must be fine
/// enough for the accuracy wanted and hold at least two points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct JosephsonJunction {
    delta: Scalar,
    transmission: Scalar,
    phase: RVec,
    eta: Scalar,
}

impl JosephsonJunction {
    /// Junction with gap `delta`, channel `transmission` in [0, 1] and
    /// phase-difference samples `phase` (rad). The energy scale η is 1.
    #[must_use]
    pub fn new(delta: Scalar, transmission: Scalar, phase: RVec) -> Self {
        Self {
            delta,
            transmission,
            phase,
            eta: 1.0,
        }
    }

    /// Junction biased at a single phase difference.
    #[must_use]
    pub fn at_phase(delta: Scalar, transmission: Scalar, phase: Scalar) -> Self {
        Self::new(delta, transmission, RVec::from_element(1, phase))
    }

    /// Sets the energy scale η used to normalise the wavefunction amplitude.
    #[must_use]
    pub fn with_eta(self, eta: Scalar) -> Self {
        Self { eta, ..self }
    }

    /// Gap magnitude Δ.
    #[must_use]
    pub fn delta(&self) -> Scalar {
        self.delta
    }

    /// Channel transmission probability τ.
    #[must_use]
    pub fn transmission(&self) -> Scalar {
        self.transmission
    }

    /// Phase-difference samples (rad).
    #[must_use]
    pub fn phase(&self) -> &RVec {
        &self.phase
    }

    /// Energy scale η.
    #[must_use]
    pub fn eta(&self) -> Scalar {
        self.eta
    }

    /// Andreev bound-state energy Δ √(1 − τ sin²(φ/2)) at a single phase.
    #[must_use]
    pub fn spectrum_short_at(&self, phase: Scalar) -> Scalar {
        self.delta * (1.0 - self.transmission * (phase / 2.0).sin().powi(2)).sqrt()
    }

    /// Andreev bound-state energy at every phase sample.
    #[must_use]
    pub fn spectrum_short(&self) -> RVec {
        self.phase.map(|p| self.spectrum_short_at(p))
    }

    /// Bound-state amplitude (1/η) √τ |sin(φ/2)| at every phase sample.
    #[must_use]
    pub fn wavefunction_short(&self) -> RVec {
        let scale = self.transmission.sqrt() / self.eta;
        self.phase.map(|p| scale * (p / 2.0).sin().abs())
    }

    /// Supercurrent −(2e/ħ) ∂E/∂φ carried by the bound state.
    pub fn supercurrent_short(&self) -> Result<RVec, MesoError> {
        let slope = gradient(&self.spectrum_short(), &self.phase)?;
        Ok(slope * (-2.0 * ELEMENTARY_CHARGE / REDUCED_PLANCK_CONSTANT))
    }

    /// Josephson inductance 1 / (∂I/∂φ).
    ///
    /// Points where the current-phase relation is flat give infinite
    /// inductance.
    pub fn josephson_inductance(&self) -> Result<RVec, MesoError> {
        let current = self.supercurrent_short()?;
        let slope = gradient(&current, &self.phase)?;
        log::debug!(
            "josephson inductance over {} phase samples (tau = {})",
            self.phase.len(),
            self.transmission
        );
        Ok(slope.map(|s| 1.0 / s))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::sweep::{linspace, phase_period};

    const TWO_E_OVER_HBAR: Scalar = 2.0 * ELEMENTARY_CHARGE / REDUCED_PLANCK_CONSTANT;

    #[test]
    fn opaque_junction_has_flat_spectrum() {
        let jj = JosephsonJunction::new(1.0, 0.0, phase_period(101));
        for e in jj.spectrum_short().iter() {
            assert_eq!(*e, 1.0);
        }
    }

    #[test]
    fn ballistic_junction_closes_gap_at_pi() {
        let jj = JosephsonJunction::at_phase(2.0, 1.0, PI);
        assert_relative_eq!(jj.spectrum_short()[0], 0.0, epsilon = 1e-7);
        let half = JosephsonJunction::at_phase(2.0, 0.5, PI);
        assert_relative_eq!(half.spectrum_short()[0], 2.0 * 0.5_f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn wavefunction_scales_with_eta() {
        let jj = JosephsonJunction::at_phase(1.0, 0.25, PI).with_eta(1e-9);
        assert_relative_eq!(jj.wavefunction_short()[0], 0.5e9, max_relative = 1e-12);
        let unit = JosephsonJunction::at_phase(1.0, 0.25, -PI);
        assert_relative_eq!(unit.wavefunction_short()[0], 0.5, max_relative = 1e-12);
    }

    #[test]
    fn supercurrent_follows_analytic_current_phase_relation() {
        let (delta, tau) = (1.0, 0.5);
        let jj = JosephsonJunction::new(delta, tau, phase_period(1001));
        let current = jj.supercurrent_short().unwrap();
        for i in 1..1000 {
            let phi = jj.phase()[i];
            let expected = delta * tau * phi.sin() / (4.0 * jj.spectrum_short_at(phi) / delta);
            assert_relative_eq!(current[i] / TWO_E_OVER_HBAR, expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn inductance_at_zero_phase() {
        let (delta, tau) = (1.0, 0.8);
        let jj = JosephsonJunction::new(delta, tau, linspace(-1.0, 1.0, 2001));
        let inductance = jj.josephson_inductance().unwrap();
        let expected = 4.0 / (TWO_E_OVER_HBAR * delta * tau);
        assert_relative_eq!(inductance[1000], expected, max_relative = 1e-4);
    }

    #[test]
    fn flat_current_phase_relation_gives_infinite_inductance() {
        let phase = RVec::from_vec(vec![0.0, 0.5, 1.0, 1.5]);
        let jj = JosephsonJunction::new(1.0, 0.0, phase);
        let inductance = jj.josephson_inductance().unwrap();
        assert!(inductance.iter().all(|l| l.is_infinite()));
    }

    #[test]
    fn single_phase_sample_cannot_be_differentiated() {
        let jj = JosephsonJunction::at_phase(1.0, 0.5, 0.3);
        assert_eq!(
            jj.supercurrent_short().unwrap_err(),
            MesoError::InsufficientSamples {
                required: 2,
                found: 1
            }
        );
        assert!(jj.josephson_inductance().is_err());
    }

    #[test]
    fn transmission_above_one_propagates_nan() {
        let jj = JosephsonJunction::at_phase(1.0, 2.0, PI);
        assert!(jj.spectrum_short()[0].is_nan());
    }
}
