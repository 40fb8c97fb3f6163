//! # Error Types
//!
//! Errors raised by the primitives in this crate. Component crates define
//! their own error enums next to the code that raises them.

use thiserror::Error;

/// Error while parsing an [`Address`](crate::Address) from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input is not valid hexadecimal.
    #[error("address is not valid hex: {0}")]
    InvalidHex(String),

    /// The decoded input has the wrong number of bytes.
    #[error("address must be 20 bytes, got {0}")]
    InvalidLength(usize),
}

/// A record could not be serialized to canonical JSON.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
