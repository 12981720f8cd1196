//! Error taxonomy for the knapsack engine.
//!
//! Validation errors are raised before any solver runs. The only runtime
//! failure a solver itself reports is [`KnapsackError::InstanceTooLarge`]
//! from the exact solver; every other degenerate condition is handled
//! locally (repair, guard or fallback).

use thiserror::Error;

/// Errors surfaced to callers of the knapsack engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// `weights` and `values` have different lengths.
    #[error("number of weights ({weights}) must match number of values ({values})")]
    LengthMismatch { weights: usize, values: usize },

    /// No items were supplied.
    #[error("weights and values cannot be empty")]
    EmptyInstance,

    /// Capacity is zero or negative.
    #[error("capacity must be positive, got {0}")]
    NonPositiveCapacity(f64),

    #[error("weight of item {index} must be positive, got {weight}")]
    NonPositiveWeight { index: usize, weight: f64 },

    #[error("value of item {index} must be positive, got {value}")]
    NonPositiveValue { index: usize, value: f64 },

    /// A weight, value or the capacity is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// The scaled DP table would exceed the configured ceiling.
    #[error("instance too large for exact solving: {cells} table cells exceed limit of {limit}")]
    InstanceTooLarge { cells: u128, limit: u128 },

    /// A solver configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A strategy name did not match any known solver.
    #[error("unknown solver strategy: {0}")]
    UnknownStrategy(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KnapsackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_descriptive() {
        let err = KnapsackError::LengthMismatch {
            weights: 2,
            values: 1,
        };
        assert_eq!(
            err.to_string(),
            "number of weights (2) must match number of values (1)"
        );

        let err = KnapsackError::InstanceTooLarge {
            cells: 10,
            limit: 5,
        };
        assert!(err.to_string().contains("too large for exact solving"));
    }
}
