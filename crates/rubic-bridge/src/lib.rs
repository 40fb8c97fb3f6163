//! # rubic-bridge: Cross-Chain Swap-Bridge Entry Point
//!
//! The [`Bridge`] validates a user's cross-chain request, charges the
//! percentage token fee and the flat native fee, splits both between the
//! platform and an optional integrator, hands the rest to a whitelisted
//! swap router, and emits a normalized [`RequestSent`] record for the
//! off-chain relay. Accumulated fees are withdrawn through the collection
//! operations.
//!
//! ## Collaborators
//!
//! Assets and swaps live outside the bridge, behind two traits:
//!
//! - [`AssetLedger`] moves balances and spends allowances, and can revert to
//!   a checkpoint.
//! - [`SwapRouter`] performs the swap. It receives a [`BridgeHandle`] and
//!   may re-enter the public operations, except that a nested
//!   `cross_chain_with_swap` is rejected until the swap returns.
//!
//! [`mock`] provides in-memory implementations of both.
//!
//! ## Atomicity
//!
//! Every public operation is a transaction ([`Bridge::transact`]): on any
//! error the bridge state, the event log and the asset ledger are restored
//! to where the operation started.
//!
//! ## Crate Policy
//!
//! - Role checks happen before any effect; mutators consume role grants.
//! - Effects (debits, ledger credits) happen before the router call.
//! - No `unwrap()` or `expect()` outside tests.
//!
//! [`RequestSent`]: rubic_core::RequestSent

pub mod assets;
pub mod bridge;
pub mod collection;
pub mod error;
pub mod handle;
pub mod mock;
pub mod processor;
pub mod request;
pub mod router;
pub mod settings;
pub mod state;

pub use assets::AssetLedger;
pub use bridge::Bridge;
pub use error::{BridgeError, ErrorKind, RequestError, SwapError, TransferError};
pub use handle::BridgeHandle;
pub use request::{CallContext, CrossChainRequest};
pub use router::{SwapCall, SwapRouter};
pub use state::BridgeState;
