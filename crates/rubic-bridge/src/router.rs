//! # Swap Router Collaborator
//!
//! A router converts the source token the bridge hands it into the
//! destination token and sends the output back to the bridge. Routers are
//! external and untrusted: they may revert, under-deliver, or call back
//! into the bridge before returning.
//!
//! The bridge transfers the swap input (and any excess native value) to the
//! router *before* calling [`SwapRouter::swap`], and judges the result by
//! its own destination-token balance afterwards, not by what the router
//! reports. Re-entry goes through a [`BridgeHandle`]; a nested
//! `cross_chain_with_swap` is rejected while the swap is in flight.

use serde::{Deserialize, Serialize};

use rubic_core::amount::serde_amount;
use rubic_core::{Address, Amount};

use crate::assets::AssetLedger;
use crate::handle::BridgeHandle;
use crate::error::SwapError;

/// Parameters of one swap handed to a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCall {
    /// Identity the swap input was sent to.
    pub router: Address,
    pub src_token: Address,
    #[serde(with = "serde_amount")]
    pub amount_in: Amount,
    pub dst_token: Address,
    #[serde(with = "serde_amount")]
    pub min_amount_out: Amount,
    /// Native value forwarded alongside the call.
    #[serde(with = "serde_amount")]
    pub native_value: Amount,
    pub provider_tag: String,
}

/// Swap execution engine at a whitelisted router address.
///
/// `bridge` is a handle on the live bridge: a router may re-enter the public
/// operations, and such calls see the request's debit and fee credits
/// already applied.
pub trait SwapRouter<A: AssetLedger> {
    fn swap(
        &mut self,
        bridge: &mut BridgeHandle<'_>,
        assets: &mut A,
        call: &SwapCall,
    ) -> Result<(), SwapError>;
}

impl<A, F> SwapRouter<A> for F
where
    A: AssetLedger,
    F: FnMut(&mut BridgeHandle<'_>, &mut A, &SwapCall) -> Result<(), SwapError>,
{
    fn swap(
        &mut self,
        bridge: &mut BridgeHandle<'_>,
        assets: &mut A,
        call: &SwapCall,
    ) -> Result<(), SwapError> {
        self(bridge, assets, call)
    }
}
