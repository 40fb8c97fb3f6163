//! # Asset Transfer Collaborator
//!
//! The bridge never owns balances directly; it asks an [`AssetLedger`] to
//! move them. The ledger is untrusted in the sense that any call may fail,
//! and every failure is a typed [`TransferError`].
//!
//! ## Checkpoints
//!
//! A bridge operation is all-or-nothing, including the transfers it has
//! already issued. The ledger therefore exposes `checkpoint` and
//! `revert_to`; the bridge takes a checkpoint when a transaction opens and
//! reverts to it when the transaction fails. Checkpoints nest.

use rubic_core::{Address, Amount, Asset};

use crate::error::TransferError;

/// Fungible-asset transfer primitive with an allowance concept.
pub trait AssetLedger {
    /// Opaque snapshot of every balance and allowance.
    type Checkpoint;

    fn checkpoint(&self) -> Self::Checkpoint;

    fn revert_to(&mut self, checkpoint: Self::Checkpoint);

    fn balance_of(&self, asset: Asset, holder: Address) -> Amount;

    /// Move `amount` of `asset` owned by `from`.
    fn transfer(
        &mut self,
        asset: Asset,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Move `amount` of `token` owned by `from`, spending `spender`'s allowance.
    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
