//! # In-Memory Collaborators
//!
//! Deterministic implementations of [`AssetLedger`] and [`SwapRouter`] for
//! tests and local simulation. `InMemoryAssets` checkpoints by cloning its
//! tables. `FixedPriceDex` pays out `amount_in * price` of the destination
//! token from its own reserve.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use rubic_core::{Address, Amount, Asset};

use crate::assets::AssetLedger;
use crate::handle::BridgeHandle;
use crate::error::{SwapError, TransferError};
use crate::router::{SwapCall, SwapRouter};

/// Balances and allowances held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryAssets {
    balances: BTreeMap<(Asset, Address), Amount>,
    allowances: BTreeMap<(Address, Address, Address), Amount>,
    rejecting: BTreeSet<Address>,
}

impl InMemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `amount` of `asset` out of thin air for `holder`.
    pub fn mint(&mut self, asset: Asset, holder: Address, amount: Amount) {
        let balance = self.balances.entry((asset, holder)).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Let `spender` move up to `amount` of `owner`'s `token`.
    pub fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((token, owner, spender), amount);
    }

    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(0)
    }

    /// Make every transfer *to* `holder` fail, like a contract that cannot
    /// receive funds.
    pub fn reject_incoming(&mut self, holder: Address) {
        self.rejecting.insert(holder);
    }

    fn check_debit(
        &self,
        asset: Asset,
        holder: Address,
        amount: Amount,
    ) -> Result<Amount, TransferError> {
        let balance = self.balance_of(asset, holder);
        balance
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientBalance {
                asset,
                holder,
                balance,
                amount,
            })
    }
}

impl AssetLedger for InMemoryAssets {
    type Checkpoint = InMemoryAssets;

    fn checkpoint(&self) -> Self::Checkpoint {
        self.clone()
    }

    fn revert_to(&mut self, checkpoint: Self::Checkpoint) {
        *self = checkpoint;
    }

    fn balance_of(&self, asset: Asset, holder: Address) -> Amount {
        self.balances.get(&(asset, holder)).copied().unwrap_or(0)
    }

    fn transfer(
        &mut self,
        asset: Asset,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let rest = self.check_debit(asset, from, amount)?;
        if from == to {
            return Ok(());
        }
        if self.rejecting.contains(&to) {
            return Err(TransferError::Rejected { asset, to });
        }
        let updated = self
            .balance_of(asset, to)
            .checked_add(amount)
            .ok_or(TransferError::Overflow { asset, holder: to })?;
        self.balances.insert((asset, from), rest);
        self.balances.insert((asset, to), updated);
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let allowance = self.allowance(token, from, spender);
        if allowance < amount {
            return Err(TransferError::InsufficientAllowance {
                token,
                owner: from,
                spender,
                allowance,
                amount,
            });
        }
        self.transfer(Asset::Token(token), from, to, amount)?;
        if allowance != Amount::MAX {
            self.allowances
                .insert((token, from, spender), allowance - amount);
        }
        Ok(())
    }
}

/// A router that swaps at a fixed integer price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPriceDex {
    pub address: Address,
    pub price: Amount,
}

impl FixedPriceDex {
    pub fn new(address: Address, price: Amount) -> Self {
        Self { address, price }
    }
}

impl<A: AssetLedger> SwapRouter<A> for FixedPriceDex {
    fn swap(
        &mut self,
        bridge: &mut BridgeHandle<'_>,
        assets: &mut A,
        call: &SwapCall,
    ) -> Result<(), SwapError> {
        let out = call
            .amount_in
            .checked_mul(self.price)
            .ok_or_else(|| SwapError::reverted("output overflow"))?;
        if out < call.min_amount_out {
            return Err(SwapError::InsufficientOutput {
                min: call.min_amount_out,
                actual: out,
            });
        }
        assets
            .transfer(
                Asset::from_address(call.dst_token),
                self.address,
                bridge.address(),
                out,
            )
            .map_err(|e| SwapError::reverted(e.to_string()))?;
        debug!(dex = %self.address, amount_in = call.amount_in, out, "swap executed");
        Ok(())
    }
}
