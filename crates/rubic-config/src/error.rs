//! # Configuration Errors

use thiserror::Error;

use rubic_core::{Address, Amount, Ppm};

/// A configuration value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A fee rate exceeds its ceiling.
    #[error("fee rate {rate} exceeds limit {limit}")]
    FeeTooHigh { rate: Ppm, limit: Ppm },

    /// A platform share exceeds 100%.
    #[error("share {share} exceeds 100%")]
    ShareTooHigh { share: Ppm },

    /// A minimum above the token's current maximum.
    #[error("minimum {min} for {token} must not exceed maximum {max}")]
    MinMustBeLowerThanMax {
        token: Address,
        min: Amount,
        max: Amount,
    },

    /// A maximum below the token's current minimum.
    #[error("maximum {max} for {token} must not be below minimum {min}")]
    MaxMustBeBiggerThanMin {
        token: Address,
        min: Amount,
        max: Amount,
    },

    /// The null identity where a real one is required.
    #[error("invalid address: {0}")]
    InvalidAddress(Address),

    /// Deployment configuration could not be parsed.
    #[error("failed to parse bridge configuration: {0}")]
    Parse(String),
}
