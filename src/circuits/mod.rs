//! Distributed lines and channel networks.

/// Coplanar waveguide per-unit-length parameters.
pub mod cpw;
/// Hybrid nanowire channel combination.
pub mod nanowire;
/// RLGC transmission line quantities.
pub mod transmission;

pub use cpw::CPW;
pub use nanowire::HybridNW;
pub use transmission::{TransmissionLine, RLGC};
