//! # Role Registry
//!
//! ## Admin handover
//!
//! ```text
//! Settled{A} ──transfer_admin(B)──▶ TransferPending{A, B}
//!     ▲                                 │        │
//!     │                 transfer_admin(C)        accept_admin() by B
//!     │                                 ▼        │
//!     │                    TransferPending{A, C} │
//!     └──────────── Settled{B} ◀─────────────────┘
//! ```
//!
//! While a transfer is pending, A is still the admin: every admin-gated
//! operation authorizes against A and B has no admin power until it accepts.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use rubic_core::{Address, BridgeEvent};

// ── Roles and grants ─────────────────────────────────────────────────

mod private {
    pub trait Sealed {}
    impl Sealed for super::Admin {}
    impl Sealed for super::Manager {}
}

/// Marker trait for the two roles. Sealed.
pub trait Role: private::Sealed + fmt::Debug {
    /// Canonical role name.
    fn name() -> &'static str;
}

/// The single, transferable, highest-privilege role.
#[derive(Debug, Clone, Copy)]
pub struct Admin;

/// The multi-member operational role.
#[derive(Debug, Clone, Copy)]
pub struct Manager;

impl Role for Admin {
    fn name() -> &'static str {
        "ADMIN"
    }
}

impl Role for Manager {
    fn name() -> &'static str {
        "MANAGER"
    }
}

/// Proof that `caller` passed the guard for role `R`.
#[derive(Debug)]
pub struct Grant<R: Role> {
    caller: Address,
    _role: PhantomData<R>,
}

impl<R: Role> Grant<R> {
    fn issue(caller: Address) -> Self {
        Self {
            caller,
            _role: PhantomData,
        }
    }

    /// The identity the grant was issued to.
    pub fn caller(&self) -> Address {
        self.caller
    }
}

// ── Errors ───────────────────────────────────────────────────────────

/// Access-control failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Caller does not hold the admin role.
    #[error("{0} is not an admin")]
    NotAnAdmin(Address),

    /// Caller holds neither the manager nor the admin role.
    #[error("{0} is not a manager")]
    NotAManager(Address),

    /// Caller is not the proposed successor of a pending admin transfer.
    #[error("{0} is not the pending admin")]
    NotPendingAdmin(Address),

    /// The null identity, or the current admin itself, was proposed.
    #[error("invalid address: {0}")]
    InvalidAddress(Address),
}

// ── Admin state ──────────────────────────────────────────────────────

/// Tagged admin state: either settled or mid-handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminState {
    /// No transfer outstanding.
    Settled { admin: Address },
    /// `admin` proposed `proposed`; `admin` keeps the role until acceptance.
    TransferPending { admin: Address, proposed: Address },
}

impl AdminState {
    /// The identity currently holding the admin role.
    pub fn admin(&self) -> Address {
        match self {
            Self::Settled { admin } | Self::TransferPending { admin, .. } => *admin,
        }
    }

    /// The proposed successor, if a transfer is pending.
    pub fn proposed(&self) -> Option<Address> {
        match self {
            Self::Settled { .. } => None,
            Self::TransferPending { proposed, .. } => Some(*proposed),
        }
    }
}

// ── Registry ─────────────────────────────────────────────────────────

/// Owner of the admin and manager roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    admin: AdminState,
    managers: BTreeSet<Address>,
}

impl RoleRegistry {
    /// Create a registry with `admin` as the sole role holder.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` if `admin` is the null identity.
    pub fn new(admin: Address) -> Result<Self, AccessError> {
        if admin.is_zero() {
            return Err(AccessError::InvalidAddress(admin));
        }
        Ok(Self {
            admin: AdminState::Settled { admin },
            managers: BTreeSet::new(),
        })
    }

    /// Current admin.
    pub fn admin(&self) -> Address {
        self.admin.admin()
    }

    /// Proposed successor, if a transfer is pending.
    pub fn pending_admin(&self) -> Option<Address> {
        self.admin.proposed()
    }

    /// Full admin state.
    pub fn admin_state(&self) -> AdminState {
        self.admin
    }

    /// Whether `who` currently holds the admin role.
    pub fn is_admin(&self, who: Address) -> bool {
        self.admin() == who
    }

    /// Whether `who` was explicitly granted the manager role.
    pub fn is_manager(&self, who: Address) -> bool {
        self.managers.contains(&who)
    }

    /// Explicit manager members, in address order.
    pub fn managers(&self) -> impl Iterator<Item = Address> + '_ {
        self.managers.iter().copied()
    }

    /// Admin guard.
    pub fn require_admin(&self, caller: Address) -> Result<Grant<Admin>, AccessError> {
        if self.is_admin(caller) {
            Ok(Grant::issue(caller))
        } else {
            Err(AccessError::NotAnAdmin(caller))
        }
    }

    /// Manager guard. The current admin passes.
    pub fn require_manager(&self, caller: Address) -> Result<Grant<Manager>, AccessError> {
        if self.is_manager(caller) || self.is_admin(caller) {
            Ok(Grant::issue(caller))
        } else {
            Err(AccessError::NotAManager(caller))
        }
    }

    /// Grant the manager role. Idempotent; returns whether membership changed.
    pub fn grant_manager(&mut self, grant: &Grant<Admin>, who: Address) -> bool {
        let added = self.managers.insert(who);
        if added {
            info!(admin = %grant.caller(), manager = %who, "manager role granted");
        }
        added
    }

    /// Revoke the manager role. Idempotent; returns whether membership changed.
    pub fn revoke_manager(&mut self, grant: &Grant<Admin>, who: Address) -> bool {
        let removed = self.managers.remove(&who);
        if removed {
            info!(admin = %grant.caller(), manager = %who, "manager role revoked");
        }
        removed
    }

    /// Propose `new_admin` as successor. Replaces any pending proposal.
    ///
    /// # Errors
    ///
    /// `NotAnAdmin` if the grant is stale, `InvalidAddress` if `new_admin` is
    /// the null identity or the current admin.
    pub fn transfer_admin(
        &mut self,
        grant: &Grant<Admin>,
        new_admin: Address,
    ) -> Result<BridgeEvent, AccessError> {
        let current = self.admin();
        if grant.caller() != current {
            return Err(AccessError::NotAnAdmin(grant.caller()));
        }
        if new_admin.is_zero() || new_admin == current {
            return Err(AccessError::InvalidAddress(new_admin));
        }
        self.admin = AdminState::TransferPending {
            admin: current,
            proposed: new_admin,
        };
        info!(from = %current, to = %new_admin, "admin transfer initiated");
        Ok(BridgeEvent::InitAdminTransfer {
            from: current,
            to: new_admin,
        })
    }

    /// Complete a pending transfer. Only the proposed successor may call.
    ///
    /// # Errors
    ///
    /// `NotPendingAdmin` if no transfer is pending or `caller` is not the
    /// proposed successor.
    pub fn accept_admin(&mut self, caller: Address) -> Result<BridgeEvent, AccessError> {
        match self.admin {
            AdminState::TransferPending { admin, proposed } if proposed == caller => {
                self.admin = AdminState::Settled { admin: proposed };
                info!(from = %admin, to = %proposed, "admin transfer accepted");
                Ok(BridgeEvent::AcceptAdmin {
                    from: admin,
                    to: proposed,
                })
            }
            _ => Err(AccessError::NotPendingAdmin(caller)),
        }
    }
}
