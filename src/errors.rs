//! Shared error types used across submodules.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Numeric edge cases (division by zero, logarithm of a non-positive value)
/// are never reported here; they propagate as IEEE infinities and NaNs. Only
/// structural problems with array-valued inputs are errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MesoError {
    /// Two arrays that are combined element-wise have different lengths.
    #[error("length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch {
        /// Length of the reference array.
        expected: usize,
        /// Length of the offending array.
        found: usize,
    },
    /// A channel list was empty.
    #[error("at least one channel is required")]
    EmptyChannels,
    /// Too few samples for a finite-difference derivative.
    #[error("numerical gradient needs at least {required} samples, found {found}")]
    InsufficientSamples {
        /// Minimum sample count.
        required: usize,
        /// Supplied sample count.
        found: usize,
    },
}
