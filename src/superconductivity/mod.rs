//! Superconducting order parameter and short Josephson junctions.

mod gap;
mod junction;

pub use gap::Superconductivity;
pub use junction::JosephsonJunction;
