//! # Cross-Chain Request
//!
//! The transient input of [`Bridge::cross_chain_with_swap`]. It is validated,
//! charged, routed and then reduced to the [`RequestRecord`] the relay sees.
//!
//! [`Bridge::cross_chain_with_swap`]: crate::Bridge::cross_chain_with_swap

use serde::{Deserialize, Serialize};

use rubic_core::amount::serde_amount;
use rubic_core::{Address, Amount, RequestRecord};

/// Who is calling, and how much native value they attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Address,
    pub value: Amount,
}

impl CallContext {
    /// A call with no attached value.
    pub fn new(caller: Address) -> Self {
        Self { caller, value: 0 }
    }

    pub fn with_value(caller: Address, value: Amount) -> Self {
        Self { caller, value }
    }
}

/// A user's request to swap and bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainRequest {
    pub src_token: Address,
    pub dst_token: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrator: Option<Address>,
    pub recipient: Address,
    #[serde(with = "serde_amount")]
    pub src_amount: Amount,
    #[serde(with = "serde_amount")]
    pub dst_min_output_amount: Amount,
    pub dst_chain_id: u64,
    pub router: Address,
}

impl CrossChainRequest {
    /// The integrator, with the null address normalized to none.
    pub fn integrator(&self) -> Option<Address> {
        self.integrator.filter(|who| !who.is_zero())
    }

    /// The record emitted once the request commits.
    pub fn to_record(&self) -> RequestRecord {
        RequestRecord {
            src_token: self.src_token,
            src_amount: self.src_amount,
            dst_chain_id: self.dst_chain_id,
            dst_token: self.dst_token,
            dst_min_output_amount: self.dst_min_output_amount,
            recipient: self.recipient,
            integrator: self.integrator().unwrap_or(Address::ZERO),
            router: self.router,
        }
    }
}
