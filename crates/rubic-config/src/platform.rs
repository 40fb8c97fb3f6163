//! # Platform Fee Settings
//!
//! Holds the global token-fee rate, the ceiling a manager may raise it to,
//! and the flat native-asset fee. `0 <= fee_rate <= max_fee_rate <=
//! DENOMINATOR` holds after every successful mutation.

use serde::{Deserialize, Serialize};
use tracing::info;

use rubic_access::{Admin, Grant, Manager};
use rubic_core::amount::serde_amount;
use rubic_core::{Amount, Ppm};

use crate::error::ConfigError;

/// Global fee configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    fee_rate: Ppm,
    max_fee_rate: Ppm,
    #[serde(with = "serde_amount")]
    fixed_crypto_fee: Amount,
}

impl PlatformConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    ///
    /// `FeeTooHigh` if the ceiling exceeds 100% or the rate exceeds the ceiling.
    pub fn new(
        fee_rate: Ppm,
        max_fee_rate: Ppm,
        fixed_crypto_fee: Amount,
    ) -> Result<Self, ConfigError> {
        check_ceiling(max_fee_rate)?;
        check_rate(fee_rate, max_fee_rate)?;
        Ok(Self {
            fee_rate,
            max_fee_rate,
            fixed_crypto_fee,
        })
    }

    pub fn fee_rate(&self) -> Ppm {
        self.fee_rate
    }

    pub fn max_fee_rate(&self) -> Ppm {
        self.max_fee_rate
    }

    pub fn fixed_crypto_fee(&self) -> Amount {
        self.fixed_crypto_fee
    }

    /// Set the platform token-fee rate.
    ///
    /// # Errors
    ///
    /// `FeeTooHigh` if `rate` exceeds the current ceiling.
    pub fn set_fee_rate(&mut self, grant: &Grant<Manager>, rate: Ppm) -> Result<(), ConfigError> {
        check_rate(rate, self.max_fee_rate)?;
        self.fee_rate = rate;
        info!(manager = %grant.caller(), %rate, "platform fee rate updated");
        Ok(())
    }

    /// Set the ceiling on the platform fee rate.
    ///
    /// Lowering the ceiling below the current rate also lowers the rate.
    ///
    /// # Errors
    ///
    /// `FeeTooHigh` if `max` exceeds 100%.
    pub fn set_max_fee_rate(&mut self, grant: &Grant<Admin>, max: Ppm) -> Result<(), ConfigError> {
        check_ceiling(max)?;
        self.max_fee_rate = max;
        if self.fee_rate > max {
            info!(old = %self.fee_rate, new = %max, "platform fee rate clamped to new ceiling");
            self.fee_rate = max;
        }
        info!(admin = %grant.caller(), %max, "platform fee ceiling updated");
        Ok(())
    }

    /// Set the flat native-asset fee.
    pub fn set_fixed_crypto_fee(&mut self, grant: &Grant<Manager>, fee: Amount) {
        self.fixed_crypto_fee = fee;
        info!(manager = %grant.caller(), fee, "fixed crypto fee updated");
    }
}

fn check_ceiling(max: Ppm) -> Result<(), ConfigError> {
    if max.exceeds_denominator() {
        return Err(ConfigError::FeeTooHigh {
            rate: max,
            limit: Ppm::FULL,
        });
    }
    Ok(())
}

fn check_rate(rate: Ppm, max: Ppm) -> Result<(), ConfigError> {
    if rate > max {
        return Err(ConfigError::FeeTooHigh { rate, limit: max });
    }
    Ok(())
}
