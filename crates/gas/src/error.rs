use thiserror::Error;

/// Errors returned when constructing a gas state from raw values.
///
/// Only constructors can fail.
/// Once a [`GasState`](crate::GasState) exists, every operation on it keeps
/// the same invariants and resolves numeric degeneracies to fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum StateError {
    /// The volume is not finite and strictly positive.
    #[error("volume must be finite and strictly positive, got {0}")]
    InvalidVolume(f64),

    /// The amount of gas is negative or not finite.
    #[error("moles must be finite and non-negative, got {0}")]
    NegativeMoles(f64),

    /// The absolute temperature is negative or not finite.
    #[error("temperature must be finite and non-negative, got {0}")]
    InvalidTemperature(f64),
}
