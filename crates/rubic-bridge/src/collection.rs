//! # Fee Collection
//!
//! Withdrawal of accumulated ledger balances. Each call zeroes one ledger
//! entry and pays it out in the same step; a failed payout leaves the entry
//! as it was. Collecting an empty entry succeeds and pays nothing.
//!
//! | Operation | Caller | Paid to |
//! |-----------|--------|---------|
//! | `collect_integrator_fee` | the integrator | the integrator |
//! | `collect_integrator_fee_for` | manager | the integrator |
//! | `collect_integrator_crypto_fee` | the integrator | the integrator |
//! | `collect_integrator_crypto_fee_for` | manager | the integrator |
//! | `collect_rubic_fee` | admin | `to` |
//! | `collect_rubic_crypto_fee` | admin | `to` |

use tracing::info;

use rubic_core::{Address, Amount, Asset};
use rubic_fees::Beneficiary;

use crate::assets::AssetLedger;
use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::request::CallContext;

impl Bridge {
    // ── Reads ────────────────────────────────────────────────────────

    pub fn available_rubic_token_fee(&self, token: Address) -> Amount {
        self.state
            .ledger
            .balance(Asset::Token(token), Beneficiary::Platform)
    }

    pub fn available_integrator_token_fee(&self, token: Address, integrator: Address) -> Amount {
        self.state
            .ledger
            .balance(Asset::Token(token), Beneficiary::Integrator(integrator))
    }

    pub fn available_rubic_crypto_fee(&self) -> Amount {
        self.state.ledger.balance(Asset::Native, Beneficiary::Platform)
    }

    pub fn available_integrator_crypto_fee(&self, integrator: Address) -> Amount {
        self.state
            .ledger
            .balance(Asset::Native, Beneficiary::Integrator(integrator))
    }

    // ── Integrator ───────────────────────────────────────────────────

    /// The caller collects its own integrator fees in `asset`.
    pub fn collect_integrator_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        asset: Asset,
    ) -> Result<Amount, BridgeError> {
        let integrator = ctx.caller;
        self.transact(assets, |bridge, assets| {
            bridge.pay_out(assets, asset, Beneficiary::Integrator(integrator), integrator)
        })
    }

    /// A manager collects `integrator`'s fees in `asset` on its behalf.
    pub fn collect_integrator_fee_for<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        integrator: Address,
        asset: Asset,
    ) -> Result<Amount, BridgeError> {
        self.transact(assets, |bridge, assets| {
            bridge.state.roles.require_manager(ctx.caller)?;
            bridge.pay_out(assets, asset, Beneficiary::Integrator(integrator), integrator)
        })
    }

    pub fn collect_integrator_crypto_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
    ) -> Result<Amount, BridgeError> {
        self.collect_integrator_fee(assets, ctx, Asset::Native)
    }

    pub fn collect_integrator_crypto_fee_for<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        integrator: Address,
    ) -> Result<Amount, BridgeError> {
        self.collect_integrator_fee_for(assets, ctx, integrator, Asset::Native)
    }

    // ── Platform ─────────────────────────────────────────────────────

    /// Admin withdraws the platform's `token` fees to `to`.
    pub fn collect_rubic_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        token: Address,
        to: Address,
    ) -> Result<Amount, BridgeError> {
        self.transact(assets, |bridge, assets| {
            bridge.state.roles.require_admin(ctx.caller)?;
            bridge.pay_out(assets, Asset::from_address(token), Beneficiary::Platform, to)
        })
    }

    /// Admin withdraws the platform's native fees to `to`.
    pub fn collect_rubic_crypto_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        to: Address,
    ) -> Result<Amount, BridgeError> {
        self.transact(assets, |bridge, assets| {
            bridge.state.roles.require_admin(ctx.caller)?;
            bridge.pay_out(assets, Asset::Native, Beneficiary::Platform, to)
        })
    }

    fn pay_out<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        asset: Asset,
        beneficiary: Beneficiary,
        to: Address,
    ) -> Result<Amount, BridgeError> {
        let me = self.address();
        let amount = self
            .state
            .ledger
            .withdraw(asset, beneficiary, |amount| assets.transfer(asset, me, to, amount))?;
        if amount > 0 {
            info!(%asset, %beneficiary, %to, amount, "fees collected");
        }
        Ok(amount)
    }
}
