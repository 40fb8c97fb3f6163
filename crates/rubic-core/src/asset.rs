//! # Asset Selector
//!
//! Fees accrue in two kinds of asset: the chain's native asset (the fixed
//! fee) and fungible tokens (the percentage fee). External interfaces use
//! the null address for the native asset; inside the workspace the
//! distinction is a variant, not a sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// The native asset or a fungible token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    Native,
    Token(Address),
}

impl Asset {
    /// Map the external convention: the null address selects the native asset.
    pub fn from_address(address: Address) -> Self {
        if address.is_zero() {
            Self::Native
        } else {
            Self::Token(address)
        }
    }

    /// Inverse of [`Asset::from_address`].
    pub fn to_address(self) -> Address {
        match self {
            Self::Native => Address::ZERO,
            Self::Token(token) => token,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }
}

impl From<Address> for Asset {
    fn from(address: Address) -> Self {
        Self::from_address(address)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}
