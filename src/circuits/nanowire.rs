//! Hybrid nanowire modelled as weighted conduction channels in parallel.

use crate::constants::angular_frequency;
use crate::errors::MesoError;
use crate::math::{CScalar, RVec, Scalar, J};

/// Hybrid nanowire with one series L-R branch per conduction channel.
///
/// Each channel contributes an admittance `cᵢ / (jωLᵢ + Rᵢ)`; the wire
/// impedance is the inverse of their sum. The coefficient weights the
/// channel admittance, not its impedance: `1 / Σ 1/(cᵢ Zᵢ)` is a different
/// model and disagrees whenever some `cᵢ ≠ 1`. For example, at 4 GHz with
/// L = [100, 150] nH, R = [0, 1] Ω and c = [1, 0.5] this type gives
/// ≈ 0.125 + 1884.96j Ω, whereas impedance weighting gives ≈ 0.163 + 1077.1j Ω.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "NanowireChannels"))]
#[derive(Debug, Clone, PartialEq)]
pub struct HybridNW {
    omega: Scalar,
    inductance: RVec,
    resistance: RVec,
    coefficient: RVec,
}

impl HybridNW {
    /// Creates a nanowire at `frequency` (Hz) from per-channel inductance (H),
    /// resistance (Ω) and weighting coefficient.
    ///
    /// All three arrays must have the same, non-zero length.
    pub fn new(
        frequency: Scalar,
        inductance: RVec,
        resistance: RVec,
        coefficient: RVec,
    ) -> Result<Self, MesoError> {
        Self::from_angular(angular_frequency(frequency), inductance, resistance, coefficient)
    }

    fn from_angular(
        omega: Scalar,
        inductance: RVec,
        resistance: RVec,
        coefficient: RVec,
    ) -> Result<Self, MesoError> {
        let channels = coefficient.len();
        if channels == 0 {
            return Err(MesoError::EmptyChannels);
        }
        for found in [inductance.len(), resistance.len()] {
            if found != channels {
                return Err(MesoError::LengthMismatch {
                    expected: channels,
                    found,
                });
            }
        }
        let wire = Self {
            omega,
            inductance,
            resistance,
            coefficient,
        };
        for i in 0..channels {
            if wire.channel_impedance(i).is_some_and(|z| z.norm() == 0.0) {
                log::warn!("nanowire channel {i} has zero impedance");
            }
        }
        Ok(wire)
    }

    /// Convenience constructor from slices.
    pub fn from_slices(
        frequency: Scalar,
        inductance: &[Scalar],
        resistance: &[Scalar],
        coefficient: &[Scalar],
    ) -> Result<Self, MesoError> {
        Self::new(
            frequency,
            RVec::from_column_slice(inductance),
            RVec::from_column_slice(resistance),
            RVec::from_column_slice(coefficient),
        )
    }

    /// Number of conduction channels.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.coefficient.len()
    }

    /// Angular frequency ω (rad/s).
    #[must_use]
    pub fn angular_frequency(&self) -> Scalar {
        self.omega
    }

    /// Per-channel inductance (H).
    #[must_use]
    pub fn inductance(&self) -> &RVec {
        &self.inductance
    }

    /// Per-channel resistance (Ω).
    #[must_use]
    pub fn resistance(&self) -> &RVec {
        &self.resistance
    }

    /// Per-channel weighting coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &RVec {
        &self.coefficient
    }

    /// Series impedance `jωLᵢ + Rᵢ` of channel `index`, or `None` if out of range.
    #[must_use]
    pub fn channel_impedance(&self, index: usize) -> Option<CScalar> {
        let l = self.inductance.get(index)?;
        let r = self.resistance.get(index)?;
        Some(J * self.omega * *l + *r)
    }

    /// Total admittance Σ cᵢ / (jωLᵢ + Rᵢ).
    #[must_use]
    pub fn admittance(&self) -> CScalar {
        self.coefficient
            .iter()
            .zip(self.inductance.iter())
            .zip(self.resistance.iter())
            .map(|((c, l), r)| *c / (J * self.omega * *l + *r))
            .sum()
    }

    /// Effective wire impedance `1 / Σ cᵢ / (jωLᵢ + Rᵢ)`.
    #[must_use]
    pub fn impedance(&self) -> CScalar {
        1.0 / self.admittance()
    }
}

/// Unvalidated field set that deserialization routes through [`HybridNW`]'s checks.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct NanowireChannels {
    omega: Scalar,
    inductance: RVec,
    resistance: RVec,
    coefficient: RVec,
}

#[cfg(feature = "serde")]
impl TryFrom<NanowireChannels> for HybridNW {
    type Error = MesoError;

    fn try_from(raw: NanowireChannels) -> Result<Self, Self::Error> {
        Self::from_angular(raw.omega, raw.inductance, raw.resistance, raw.coefficient)
    }
}
