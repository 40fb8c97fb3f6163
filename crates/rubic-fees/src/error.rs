//! # Fee Errors

use thiserror::Error;

use rubic_core::{Amount, Asset, Ppm};

use crate::ledger::Beneficiary;

/// Fee computation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    /// Applying `rate` to `amount` does not fit in an amount.
    #[error("fee computation overflowed: {amount} at {rate}")]
    Overflow { amount: Amount, rate: Ppm },

    /// A 100% rate leaves nothing to gross up from.
    #[error("cannot gross up a net amount at a 100% fee rate")]
    FullFeeRate,
}

/// Ledger mutation failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Crediting would overflow the beneficiary's balance.
    #[error("{asset} balance of {beneficiary} would overflow: {balance} + {amount}")]
    Overflow {
        asset: Asset,
        beneficiary: Beneficiary,
        balance: Amount,
        amount: Amount,
    },
}
