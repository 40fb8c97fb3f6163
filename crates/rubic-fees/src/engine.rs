//! # Fee Engine
//!
//! Pure fee arithmetic. A [`FeeEngine`] is bound to one request's view of
//! the configuration: the platform settings plus the integrator record, if
//! the request names an integrator whose record is active. An inactive
//! record is discarded at construction, so "inactive" and "absent" take the
//! same code path everywhere below.
//!
//! ## Token fee
//!
//! ```text
//! fee               = floor(amount_with_fee * rate / D)
//! platform          = floor(fee * platform_token_share / D)   (integrator)
//!                   = fee                                      (no integrator)
//! integrator        = fee - platform
//! amount_without_fee = amount_with_fee - fee
//! ```
//!
//! ## Fixed fee
//!
//! An active integrator with a non-zero `fixed_fee_amount` replaces the
//! platform's fixed fee and splits it by `platform_fixed_share`. Otherwise
//! the platform's fixed fee applies and goes entirely to the platform.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rubic_config::{IntegratorFeeInfo, IntegratorRegistry, PlatformConfig};
use rubic_core::{mul_div_floor, Address, Amount, Ppm, DENOMINATOR};

use crate::error::FeeError;

/// Split of a percentage fee taken from the source amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFeeSplit {
    pub amount_with_fee: Amount,
    pub fee: Amount,
    pub platform: Amount,
    pub integrator: Amount,
    pub amount_without_fee: Amount,
}

/// Split of the flat native-asset fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFeeSplit {
    pub total: Amount,
    pub platform: Amount,
    pub integrator: Amount,
}

/// Gross amount a user must send so that at least `requested_net` reaches
/// the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossQuote {
    pub requested_net: Amount,
    pub split: TokenFeeSplit,
}

/// Fee computation for one request.
#[derive(Debug, Clone, Copy)]
pub struct FeeEngine<'a> {
    platform: &'a PlatformConfig,
    integrator: Option<IntegratorFeeInfo>,
}

impl<'a> FeeEngine<'a> {
    /// Bind to the platform settings and an optional integrator record.
    /// Inactive records are ignored.
    pub fn new(platform: &'a PlatformConfig, integrator: Option<&IntegratorFeeInfo>) -> Self {
        Self {
            platform,
            integrator: integrator.copied().filter(|info| info.active),
        }
    }

    /// Bind for a request naming `integrator`. The null address means none.
    pub fn for_request(
        platform: &'a PlatformConfig,
        registry: &IntegratorRegistry,
        integrator: Option<Address>,
    ) -> Self {
        let info = integrator
            .filter(|who| !who.is_zero())
            .and_then(|who| registry.active(&who));
        Self::new(platform, info.as_ref())
    }

    /// Whether an active integrator record is in effect.
    pub fn has_integrator(&self) -> bool {
        self.integrator.is_some()
    }

    /// Token fee rate that applies to this request.
    pub fn token_rate(&self) -> Ppm {
        match &self.integrator {
            Some(info) => info.token_fee_rate,
            None => self.platform.fee_rate(),
        }
    }

    /// Split the percentage fee out of `amount_with_fee`.
    pub fn token_fee(&self, amount_with_fee: Amount) -> Result<TokenFeeSplit, FeeError> {
        let rate = self.token_rate();
        let fee = apply(rate, amount_with_fee)?;
        let amount_without_fee = amount_with_fee
            .checked_sub(fee)
            .ok_or(FeeError::Overflow {
                amount: amount_with_fee,
                rate,
            })?;
        let (platform, integrator) = match &self.integrator {
            Some(info) => {
                let platform = apply(info.platform_token_share, fee)?.min(fee);
                (platform, fee - platform)
            }
            None => (fee, 0),
        };
        debug!(amount_with_fee, fee, platform, integrator, %rate, "token fee split");
        Ok(TokenFeeSplit {
            amount_with_fee,
            fee,
            platform,
            integrator,
            amount_without_fee,
        })
    }

    /// Split the flat native-asset fee.
    pub fn fixed_fee(&self) -> Result<FixedFeeSplit, FeeError> {
        let split = match &self.integrator {
            Some(info) if info.fixed_fee_amount > 0 => {
                let total = info.fixed_fee_amount;
                let platform = apply(info.platform_fixed_share, total)?.min(total);
                FixedFeeSplit {
                    total,
                    platform,
                    integrator: total - platform,
                }
            }
            _ => FixedFeeSplit {
                total: self.platform.fixed_crypto_fee(),
                platform: self.platform.fixed_crypto_fee(),
                integrator: 0,
            },
        };
        debug!(
            total = split.total,
            platform = split.platform,
            integrator = split.integrator,
            "fixed fee split"
        );
        Ok(split)
    }

    /// Inverse of [`FeeEngine::token_fee`]: the gross amount whose fee-free
    /// part is at least `net`, and its split.
    ///
    /// `amount_with_fee = floor(net * D / (D - rate))`.
    ///
    /// # Errors
    ///
    /// `FullFeeRate` when the rate is 100% or more.
    pub fn gross_up(&self, net: Amount) -> Result<GrossQuote, FeeError> {
        let rate = self.token_rate();
        let remaining = DENOMINATOR
            .checked_sub(rate.get())
            .filter(|r| *r > 0)
            .ok_or(FeeError::FullFeeRate)?;
        let amount_with_fee = mul_div_floor(
            net,
            Amount::from(DENOMINATOR),
            Amount::from(remaining),
        )
        .ok_or(FeeError::Overflow { amount: net, rate })?;
        Ok(GrossQuote {
            requested_net: net,
            split: self.token_fee(amount_with_fee)?,
        })
    }
}

fn apply(rate: Ppm, amount: Amount) -> Result<Amount, FeeError> {
    rate.apply(amount)
        .ok_or(FeeError::Overflow { amount, rate })
}
