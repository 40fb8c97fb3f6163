//! # Per-Token Amount Bounds
//!
//! Each token has an accepted input range `[min, max]`. Tokens without an
//! explicit entry use the deployment default. Both setters check against the
//! token's *current effective* bounds, so `min <= max` holds after every
//! successful call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use rubic_access::{Grant, Manager};
use rubic_core::amount::serde_amount;
use rubic_core::{Address, Amount};

use crate::error::ConfigError;

/// Inclusive `[min, max]` range of accepted source amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBounds {
    #[serde(with = "serde_amount")]
    pub min: Amount,
    #[serde(with = "serde_amount")]
    pub max: Amount,
}

impl AmountBounds {
    /// No restriction.
    pub const UNBOUNDED: Self = Self {
        min: 0,
        max: Amount::MAX,
    };

    /// Whether `amount` lies within the range.
    pub fn contains(&self, amount: Amount) -> bool {
        self.min <= amount && amount <= self.max
    }
}

impl Default for AmountBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Per-token bounds with a deployment-wide default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBoundsTable {
    default: AmountBounds,
    tokens: BTreeMap<Address, AmountBounds>,
}

impl TokenBoundsTable {
    /// Table where every token uses `default`.
    pub fn new(default: AmountBounds) -> Self {
        Self {
            default,
            tokens: BTreeMap::new(),
        }
    }

    /// Effective bounds for `token`.
    pub fn bounds(&self, token: &Address) -> AmountBounds {
        self.tokens.get(token).copied().unwrap_or(self.default)
    }

    pub fn min(&self, token: &Address) -> Amount {
        self.bounds(token).min
    }

    pub fn max(&self, token: &Address) -> Amount {
        self.bounds(token).max
    }

    /// Set the minimum for `token`.
    ///
    /// # Errors
    ///
    /// `MinMustBeLowerThanMax` if `min` exceeds the current maximum.
    pub fn set_min(
        &mut self,
        grant: &Grant<Manager>,
        token: Address,
        min: Amount,
    ) -> Result<(), ConfigError> {
        let current = self.bounds(&token);
        if min > current.max {
            return Err(ConfigError::MinMustBeLowerThanMax {
                token,
                min,
                max: current.max,
            });
        }
        self.tokens.insert(token, AmountBounds { min, ..current });
        info!(manager = %grant.caller(), %token, min, "token minimum updated");
        Ok(())
    }

    /// Set the maximum for `token`.
    ///
    /// # Errors
    ///
    /// `MaxMustBeBiggerThanMin` if `max` is below the current minimum.
    pub fn set_max(
        &mut self,
        grant: &Grant<Manager>,
        token: Address,
        max: Amount,
    ) -> Result<(), ConfigError> {
        let current = self.bounds(&token);
        if max < current.min {
            return Err(ConfigError::MaxMustBeBiggerThanMin {
                token,
                min: current.min,
                max,
            });
        }
        self.tokens.insert(token, AmountBounds { max, ..current });
        info!(manager = %grant.caller(), %token, max, "token maximum updated");
        Ok(())
    }

    /// Install bounds at construction time, before any grant exists.
    pub(crate) fn insert_initial(
        &mut self,
        token: Address,
        bounds: AmountBounds,
    ) -> Result<(), ConfigError> {
        if bounds.min > bounds.max {
            return Err(ConfigError::MinMustBeLowerThanMax {
                token,
                min: bounds.min,
                max: bounds.max,
            });
        }
        self.tokens.insert(token, bounds);
        Ok(())
    }
}
