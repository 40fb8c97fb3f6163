//! # Cross-Chain Request Processing
//!
//! `cross_chain_with_swap` runs as one transaction, ordered checks first,
//! effects second, external call last:
//!
//! ```text
//! ├─ no swap in flight?             SwapInProgress
//! ├─ router whitelisted?            NotInWhitelist(router)
//! ├─ src_amount within bounds?      AmountOutOfBounds
//! ├─ value covers fixed fee?        InsufficientCryptoFee
//! ├─ pull value + src_amount        TransferFailed
//! ├─ credit token + native ledgers
//! ├─ hand swap input to router, call it
//! ├─ measure own dst balance delta  SwapFailed
//! └─ emit RequestSent
//! ```
//!
//! By the time the router runs, the caller has been debited and every fee
//! credit is on the ledger. A router that re-enters sees that state and
//! nothing it does can make the request pay or credit twice. Nested
//! requests are refused outright: their output would land in the same
//! destination balance the outer request is measured by.

use tracing::{debug, info};

use rubic_core::{Amount, Asset, BridgeEvent, RequestSent};
use rubic_fees::Beneficiary;

use crate::assets::AssetLedger;
use crate::bridge::Bridge;
use crate::error::{BridgeError, RequestError, SwapError};
use crate::handle::BridgeHandle;
use crate::request::{CallContext, CrossChainRequest};
use crate::router::{SwapCall, SwapRouter};

impl Bridge {
    /// Validate, charge and route a cross-chain request, then emit its record.
    ///
    /// `router` is the code behind `request.router`. `ctx.value` is the native
    /// value the caller attached; whatever exceeds the fixed fee is forwarded
    /// to the router with the swap.
    pub fn cross_chain_with_swap<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        router: &mut dyn SwapRouter<A>,
        ctx: &CallContext,
        request: &CrossChainRequest,
        provider_tag: &str,
    ) -> Result<RequestSent, BridgeError> {
        self.transact(assets, |bridge, assets| {
            bridge.process_request(assets, router, ctx, request, provider_tag)
        })
    }

    fn process_request<A: AssetLedger>(
        &mut self,
        assets: &mut A,
        router: &mut dyn SwapRouter<A>,
        ctx: &CallContext,
        request: &CrossChainRequest,
        provider_tag: &str,
    ) -> Result<RequestSent, BridgeError> {
        let me = self.address();

        // Checks.
        if self.swap_in_flight {
            return Err(RequestError::SwapInProgress.into());
        }
        if request.src_token.is_zero() {
            return Err(RequestError::NativeSourceToken.into());
        }
        if !self.state.routers.contains(&request.router) {
            return Err(RequestError::NotInWhitelist(request.router).into());
        }
        let bounds = self.state.bounds.bounds(&request.src_token);
        if !bounds.contains(request.src_amount) {
            return Err(RequestError::AmountOutOfBounds {
                token: request.src_token,
                amount: request.src_amount,
                min: bounds.min,
                max: bounds.max,
            }
            .into());
        }
        let integrator = request.integrator();
        let engine = self.fee_engine(integrator);
        let fixed = engine.fixed_fee()?;
        if ctx.value < fixed.total {
            return Err(RequestError::InsufficientCryptoFee {
                required: fixed.total,
                attached: ctx.value,
            }
            .into());
        }
        let token_fee = engine.token_fee(request.src_amount)?;
        let excess_value = ctx.value - fixed.total;

        // Effects.
        if ctx.value > 0 {
            assets.transfer(Asset::Native, ctx.caller, me, ctx.value)?;
        }
        assets.transfer_from(request.src_token, me, ctx.caller, me, request.src_amount)?;
        let token = Asset::Token(request.src_token);
        self.credit(token, Beneficiary::Platform, token_fee.platform)?;
        self.credit(Asset::Native, Beneficiary::Platform, fixed.platform)?;
        if let Some(who) = integrator {
            self.credit(token, Beneficiary::Integrator(who), token_fee.integrator)?;
            self.credit(Asset::Native, Beneficiary::Integrator(who), fixed.integrator)?;
        }
        debug!(
            fee = token_fee.fee,
            fixed = fixed.total,
            excess_value,
            "request fees credited"
        );

        // Interaction.
        assets.transfer(token, me, request.router, token_fee.amount_without_fee)?;
        if excess_value > 0 {
            assets.transfer(Asset::Native, me, request.router, excess_value)?;
        }
        let dst = Asset::from_address(request.dst_token);
        let dst_before = assets.balance_of(dst, me);
        let call = SwapCall {
            router: request.router,
            src_token: request.src_token,
            amount_in: token_fee.amount_without_fee,
            dst_token: request.dst_token,
            min_amount_out: request.dst_min_output_amount,
            native_value: excess_value,
            provider_tag: provider_tag.to_owned(),
        };
        self.swap_in_flight = true;
        let outcome = router.swap(&mut BridgeHandle::new(self), assets, &call);
        self.swap_in_flight = false;
        outcome.map_err(|source| BridgeError::SwapFailed {
            router: request.router,
            source,
        })?;
        let received = assets.balance_of(dst, me).saturating_sub(dst_before);
        if received < request.dst_min_output_amount {
            return Err(BridgeError::SwapFailed {
                router: request.router,
                source: SwapError::InsufficientOutput {
                    min: request.dst_min_output_amount,
                    actual: received,
                },
            });
        }

        let sent = RequestSent::new(request.to_record(), provider_tag)?;
        self.emit(BridgeEvent::RequestSent(sent.clone()));
        info!(
            caller = %ctx.caller,
            router = %request.router,
            src_token = %request.src_token,
            src_amount = request.src_amount,
            dst_chain_id = request.dst_chain_id,
            received,
            digest = %sent.digest,
            "cross-chain request sent"
        );
        Ok(sent)
    }

    fn credit(
        &mut self,
        asset: Asset,
        beneficiary: Beneficiary,
        amount: Amount,
    ) -> Result<(), BridgeError> {
        Ok(self.state.ledger.accumulate(asset, beneficiary, amount)?)
    }
}
