//! # Re-Entry Handle
//!
//! What a router sees of the bridge while its swap runs. The handle derefs
//! to `&Bridge` for every query and forwards the public operations one by
//! one. It never hands out `&mut Bridge`, so a router cannot replace the
//! bridge, open a raw [`Bridge::transact`] or drain the event log.

use std::ops::Deref;

use rubic_config::IntegratorFeeInfo;
use rubic_core::{Address, Amount, Asset, Ppm, RequestSent};

use crate::assets::AssetLedger;
use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::request::{CallContext, CrossChainRequest};
use crate::router::SwapRouter;

/// Borrowed access to a bridge for a router in the middle of a swap.
#[derive(Debug)]
pub struct BridgeHandle<'a> {
    bridge: &'a mut Bridge,
}

impl<'a> BridgeHandle<'a> {
    pub(crate) fn new(bridge: &'a mut Bridge) -> Self {
        Self { bridge }
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Always fails with `SwapInProgress` while the handle exists.
    pub fn cross_chain_with_swap<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        router: &mut dyn SwapRouter<A>,
        ctx: &CallContext,
        request: &CrossChainRequest,
        provider_tag: &str,
    ) -> Result<RequestSent, BridgeError> {
        self.bridge
            .cross_chain_with_swap(assets, router, ctx, request, provider_tag)
    }

    // ── Collection ───────────────────────────────────────────────────

    pub fn collect_integrator_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        asset: Asset,
    ) -> Result<Amount, BridgeError> {
        self.bridge.collect_integrator_fee(assets, ctx, asset)
    }

    pub fn collect_integrator_fee_for<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        integrator: Address,
        asset: Asset,
    ) -> Result<Amount, BridgeError> {
        self.bridge
            .collect_integrator_fee_for(assets, ctx, integrator, asset)
    }

    pub fn collect_integrator_crypto_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
    ) -> Result<Amount, BridgeError> {
        self.bridge.collect_integrator_crypto_fee(assets, ctx)
    }

    pub fn collect_integrator_crypto_fee_for<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        integrator: Address,
    ) -> Result<Amount, BridgeError> {
        self.bridge
            .collect_integrator_crypto_fee_for(assets, ctx, integrator)
    }

    pub fn collect_rubic_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        token: Address,
        to: Address,
    ) -> Result<Amount, BridgeError> {
        self.bridge.collect_rubic_fee(assets, ctx, token, to)
    }

    pub fn collect_rubic_crypto_fee<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        ctx: &CallContext,
        to: Address,
    ) -> Result<Amount, BridgeError> {
        self.bridge.collect_rubic_crypto_fee(assets, ctx, to)
    }

    // ── Settings ─────────────────────────────────────────────────────

    pub fn transfer_admin(&mut self, caller: Address, new_admin: Address) -> Result<(), BridgeError> {
        self.bridge.transfer_admin(caller, new_admin)
    }

    pub fn accept_admin(&mut self, caller: Address) -> Result<(), BridgeError> {
        self.bridge.accept_admin(caller)
    }

    pub fn grant_manager(&mut self, caller: Address, who: Address) -> Result<bool, BridgeError> {
        self.bridge.grant_manager(caller, who)
    }

    pub fn revoke_manager(&mut self, caller: Address, who: Address) -> Result<bool, BridgeError> {
        self.bridge.revoke_manager(caller, who)
    }

    pub fn add_available_routers(
        &mut self,
        caller: Address,
        routers: &[Address],
    ) -> Result<usize, BridgeError> {
        self.bridge.add_available_routers(caller, routers)
    }

    pub fn remove_available_routers(
        &mut self,
        caller: Address,
        routers: &[Address],
    ) -> Result<usize, BridgeError> {
        self.bridge.remove_available_routers(caller, routers)
    }

    pub fn set_min_token_amount(
        &mut self,
        caller: Address,
        token: Address,
        min: Amount,
    ) -> Result<(), BridgeError> {
        self.bridge.set_min_token_amount(caller, token, min)
    }

    pub fn set_max_token_amount(
        &mut self,
        caller: Address,
        token: Address,
        max: Amount,
    ) -> Result<(), BridgeError> {
        self.bridge.set_max_token_amount(caller, token, max)
    }

    pub fn set_platform_fee(&mut self, caller: Address, rate: Ppm) -> Result<(), BridgeError> {
        self.bridge.set_platform_fee(caller, rate)
    }

    pub fn set_max_platform_fee(&mut self, caller: Address, max: Ppm) -> Result<(), BridgeError> {
        self.bridge.set_max_platform_fee(caller, max)
    }

    pub fn set_fixed_crypto_fee(&mut self, caller: Address, fee: Amount) -> Result<(), BridgeError> {
        self.bridge.set_fixed_crypto_fee(caller, fee)
    }

    pub fn set_integrator_info(
        &mut self,
        caller: Address,
        integrator: Address,
        info: IntegratorFeeInfo,
    ) -> Result<(), BridgeError> {
        self.bridge.set_integrator_info(caller, integrator, info)
    }
}

impl Deref for BridgeHandle<'_> {
    type Target = Bridge;

    fn deref(&self) -> &Bridge {
        self.bridge
    }
}
