//! Convenience re-exports for evaluating mesoscopic formulas.

pub use crate::circuits::{HybridNW, TransmissionLine, CPW, RLGC};
pub use crate::constants::*;
pub use crate::errors::MesoError;
pub use crate::materials::DrudeModelDC;
pub use crate::math::{gradient, phasor, CScalar, RVec, Scalar, J};
pub use crate::solid_state::SolidState;
pub use crate::superconductivity::{JosephsonJunction, Superconductivity};
pub use crate::sweep::{angular_freq_linspace, linspace, mag, phase_deg, phase_period, sweep_map};
