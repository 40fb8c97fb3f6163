//! # Bridge and Transactions
//!
//! [`Bridge`] is a single sequential state machine. Every public operation
//! runs inside [`Bridge::transact`], which either commits all of its effects
//! or none of them:
//!
//! ```text
//! transact ──▶ snapshot(state, event count, asset checkpoint)
//!    │
//!    ├─ Ok  ──▶ keep everything
//!    └─ Err ──▶ restore state, truncate events, revert assets
//! ```
//!
//! Transactions nest. A router that re-enters the bridge opens an inner
//! transaction; if the inner call fails only its effects are undone, and if
//! the outer call fails afterwards the inner effects go with it.
//!
//! `swap_in_flight` lives outside [`BridgeState`]: it tracks the call stack,
//! not committed state, and is never snapshotted.

use tracing::warn;

use rubic_config::BridgeConfig;
use rubic_core::{Address, BridgeEvent};

use crate::assets::AssetLedger;
use crate::error::BridgeError;
use crate::state::BridgeState;

/// The bridge entry point.
#[derive(Debug, Clone)]
pub struct Bridge {
    address: Address,
    pub(crate) state: BridgeState,
    events: Vec<BridgeEvent>,
    pub(crate) swap_in_flight: bool,
}

impl Bridge {
    /// Deploy a bridge at `address` with the given initial configuration.
    ///
    /// # Errors
    ///
    /// `Config(InvalidAddress)` for a null bridge address, or any error from
    /// [`BridgeConfig::build`].
    pub fn new(address: Address, config: &BridgeConfig) -> Result<Self, BridgeError> {
        if address.is_zero() {
            return Err(rubic_config::ConfigError::InvalidAddress(address).into());
        }
        Ok(Self {
            address,
            state: BridgeState::from_config(config)?,
            events: Vec::new(),
            swap_in_flight: false,
        })
    }

    /// The bridge's own identity, which holds collected fees and swap output.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Read-only view of the full state.
    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    /// Every committed event, oldest first.
    pub fn events(&self) -> &[BridgeEvent] {
        &self.events
    }

    /// Remove and return committed events, e.g. after handing them to a relay.
    pub fn drain_events(&mut self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: BridgeEvent) {
        self.events.push(event);
    }

    /// Run `op` as one all-or-nothing transaction.
    pub fn transact<A, T>(
        &mut self,
        assets: &mut A,
        op: impl FnOnce(&mut Self, &mut A) -> Result<T, BridgeError>,
    ) -> Result<T, BridgeError>
    where
        A: AssetLedger,
    {
        let state = self.state.clone();
        let event_count = self.events.len();
        let checkpoint = assets.checkpoint();
        match op(self, assets) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "transaction rolled back");
                self.state = state;
                self.events.truncate(event_count);
                assets.revert_to(checkpoint);
                Err(err)
            }
        }
    }

    /// Run `op` as a transaction that touches no assets.
    pub(crate) fn transact_local<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, BridgeError>,
    ) -> Result<T, BridgeError> {
        let state = self.state.clone();
        let event_count = self.events.len();
        match op(self) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "transaction rolled back");
                self.state = state;
                self.events.truncate(event_count);
                Err(err)
            }
        }
    }
}
