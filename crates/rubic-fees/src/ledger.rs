//! # Fee Ledger
//!
//! Collected, not-yet-withdrawn fees, keyed by asset and beneficiary.
//! Token fees and the native fixed fee share one table: the asset key
//! distinguishes them.
//!
//! ## Withdrawal
//!
//! [`FeeLedger::withdraw`] zeroes the entry, then runs the payout. If the
//! payout fails the entry is restored before the error is returned, so a
//! balance is never both paid and kept, nor lost without being paid.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use rubic_core::{Address, Amount, Asset};

use crate::error::LedgerError;

/// Who a ledger entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Beneficiary {
    /// The bridge operator.
    Platform,
    /// A third-party integrator.
    Integrator(Address),
}

impl fmt::Display for Beneficiary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform => f.write_str("platform"),
            Self::Integrator(who) => write!(f, "integrator {who}"),
        }
    }
}

/// Withdrawable fee balances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeLedger {
    balances: BTreeMap<(Asset, Beneficiary), Amount>,
}

impl FeeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of `beneficiary` in `asset`.
    pub fn balance(&self, asset: Asset, beneficiary: Beneficiary) -> Amount {
        self.balances
            .get(&(asset, beneficiary))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all balances held in `asset`.
    pub fn total(&self, asset: Asset) -> Amount {
        self.balances
            .iter()
            .filter(|((a, _), _)| *a == asset)
            .fold(0, |acc, (_, v)| acc.saturating_add(*v))
    }

    /// Credit `amount`. Zero credits are no-ops.
    ///
    /// # Errors
    ///
    /// `Overflow` if the balance would exceed [`Amount::MAX`]; the balance is
    /// left unchanged.
    pub fn accumulate(
        &mut self,
        asset: Asset,
        beneficiary: Beneficiary,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let balance = self.balance(asset, beneficiary);
        let updated = balance.checked_add(amount).ok_or(LedgerError::Overflow {
            asset,
            beneficiary,
            balance,
            amount,
        })?;
        self.balances.insert((asset, beneficiary), updated);
        debug!(%asset, %beneficiary, amount, balance = updated, "fee accumulated");
        Ok(())
    }

    /// Zero the entry and pay it out with `payout`. Returns the amount paid.
    ///
    /// A zero balance succeeds without calling `payout`. If `payout` fails,
    /// the balance is restored and its error returned.
    pub fn withdraw<E>(
        &mut self,
        asset: Asset,
        beneficiary: Beneficiary,
        payout: impl FnOnce(Amount) -> Result<(), E>,
    ) -> Result<Amount, E> {
        let amount = match self.balances.remove(&(asset, beneficiary)) {
            Some(amount) if amount > 0 => amount,
            _ => return Ok(0),
        };
        if let Err(e) = payout(amount) {
            self.balances.insert((asset, beneficiary), amount);
            return Err(e);
        }
        debug!(%asset, %beneficiary, amount, "fee withdrawn");
        Ok(amount)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Withdrawal pays out exactly what was accumulated and leaves zero.
        #[test]
        fn withdraw_after_accumulate(credits in prop::collection::vec(0u128..(1u128 << 64), 0..16)) {
            let asset = Asset::Token(Address::from_low_u64(1));
            let mut l = FeeLedger::new();
            for c in &credits {
                l.accumulate(asset, Beneficiary::Platform, *c).unwrap();
            }
            let expected: u128 = credits.iter().sum();
            let mut paid = 0;
            let out = l.withdraw(asset, Beneficiary::Platform, |a| {
                paid = a;
                Ok::<_, ()>(())
            }).unwrap();
            prop_assert_eq!(out, expected);
            prop_assert_eq!(paid, expected);
            prop_assert_eq!(l.balance(asset, Beneficiary::Platform), 0);
        }
    }
}
