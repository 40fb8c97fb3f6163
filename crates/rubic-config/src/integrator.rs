//! # Integrator Fee Records
//!
//! An integrator is a third party that routes users through the bridge and
//! takes a cut of the fees. Its record overrides the platform token-fee rate
//! and fixed fee, and says what share of each goes to the platform. An
//! inactive record is kept but treated exactly like no record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use rubic_access::{Grant, Manager};
use rubic_core::amount::serde_amount;
use rubic_core::{Address, Amount, Ppm};

use crate::error::ConfigError;

/// Per-integrator fee override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegratorFeeInfo {
    /// Whether the fee engine honours this record.
    pub active: bool,
    /// Token fee rate charged on the source amount.
    pub token_fee_rate: Ppm,
    /// Platform's share of the fixed native fee.
    pub platform_fixed_share: Ppm,
    /// Platform's share of the token fee.
    pub platform_token_share: Ppm,
    /// Fixed native fee; zero falls back to the platform's fixed fee.
    #[serde(with = "serde_amount")]
    pub fixed_fee_amount: Amount,
}

impl IntegratorFeeInfo {
    /// Check rates and shares against 100%.
    ///
    /// # Errors
    ///
    /// `FeeTooHigh` for the token fee rate, `ShareTooHigh` for either share.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_fee_rate.exceeds_denominator() {
            return Err(ConfigError::FeeTooHigh {
                rate: self.token_fee_rate,
                limit: Ppm::FULL,
            });
        }
        for share in [self.platform_token_share, self.platform_fixed_share] {
            if share.exceeds_denominator() {
                return Err(ConfigError::ShareTooHigh { share });
            }
        }
        Ok(())
    }
}

/// Fee records keyed by integrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegratorRegistry {
    records: BTreeMap<Address, IntegratorFeeInfo>,
}

impl IntegratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored record, or the inactive all-zero default.
    pub fn get(&self, integrator: &Address) -> IntegratorFeeInfo {
        self.records.get(integrator).copied().unwrap_or_default()
    }

    /// The record the fee engine should honour: present only when active.
    pub fn active(&self, integrator: &Address) -> Option<IntegratorFeeInfo> {
        self.records.get(integrator).copied().filter(|r| r.active)
    }

    /// Replace the record for `integrator` wholesale.
    pub fn set_info(
        &mut self,
        grant: &Grant<Manager>,
        integrator: Address,
        info: IntegratorFeeInfo,
    ) -> Result<(), ConfigError> {
        info.validate()?;
        self.records.insert(integrator, info);
        info!(
            manager = %grant.caller(),
            %integrator,
            active = info.active,
            token_fee_rate = %info.token_fee_rate,
            "integrator fee info updated"
        );
        Ok(())
    }
}
