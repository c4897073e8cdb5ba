#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Shared mathematical utilities (aliases, phasors, numerical gradient).
pub mod math;
/// Coplanar waveguides, transmission lines and nanowire channel networks.
pub mod circuits;
/// Drude transport model.
pub mod materials;
/// Superconducting order parameter and Josephson junctions.
pub mod superconductivity;
/// Zeeman energy formulas.
pub mod solid_state;
/// Sample-grid builders and post-processing helpers.
pub mod sweep;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
