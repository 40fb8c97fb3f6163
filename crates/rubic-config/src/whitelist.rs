//! # Router Whitelist
//!
//! Ordered, duplicate-free set of swap routers the bridge may hand funds to.
//! Insertion appends; removal compacts in place and keeps the relative order
//! of the survivors, so `list()` is stable across unrelated edits.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use rubic_access::{Grant, Manager};
use rubic_core::Address;

use crate::error::ConfigError;

/// Approved swap routers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Address>", into = "Vec<Address>")]
pub struct RouterWhitelist {
    order: Vec<Address>,
    index: HashSet<Address>,
}

impl RouterWhitelist {
    /// Empty whitelist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an initial list. Duplicates collapse to their first position.
    pub fn from_routers(routers: impl IntoIterator<Item = Address>) -> Self {
        let mut list = Self::new();
        for router in routers {
            list.insert(router);
        }
        list
    }

    /// Whether `router` is approved.
    pub fn contains(&self, router: &Address) -> bool {
        self.index.contains(router)
    }

    /// Approved routers in insertion order.
    pub fn list(&self) -> &[Address] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Approve one router. Returns whether it was newly added.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` for the null identity.
    pub fn add(&mut self, grant: &Grant<Manager>, router: Address) -> Result<bool, ConfigError> {
        self.add_many(grant, [router]).map(|added| added == 1)
    }

    /// Approve several routers. Nothing is added if any entry is null.
    /// Returns how many were newly added.
    pub fn add_many(
        &mut self,
        grant: &Grant<Manager>,
        routers: impl IntoIterator<Item = Address>,
    ) -> Result<usize, ConfigError> {
        let routers: Vec<Address> = routers.into_iter().collect();
        if let Some(bad) = routers.iter().find(|r| r.is_zero()) {
            return Err(ConfigError::InvalidAddress(*bad));
        }
        let mut added = 0;
        for router in routers {
            if self.insert(router) {
                info!(manager = %grant.caller(), %router, "router whitelisted");
                added += 1;
            }
        }
        Ok(added)
    }

    /// Revoke one router. Returns whether it was present.
    pub fn remove(&mut self, grant: &Grant<Manager>, router: Address) -> bool {
        self.remove_many(grant, [router]) == 1
    }

    /// Revoke several routers. Absent entries are ignored. Returns how many
    /// were removed.
    pub fn remove_many(
        &mut self,
        grant: &Grant<Manager>,
        routers: impl IntoIterator<Item = Address>,
    ) -> usize {
        let mut removed = 0;
        for router in routers {
            if self.index.remove(&router) {
                info!(manager = %grant.caller(), %router, "router removed from whitelist");
                removed += 1;
            }
        }
        if removed > 0 {
            let index = &self.index;
            self.order.retain(|r| index.contains(r));
        }
        removed
    }

    fn insert(&mut self, router: Address) -> bool {
        if self.index.insert(router) {
            self.order.push(router);
            true
        } else {
            false
        }
    }
}

impl From<Vec<Address>> for RouterWhitelist {
    fn from(routers: Vec<Address>) -> Self {
        Self::from_routers(routers)
    }
}

impl From<RouterWhitelist> for Vec<Address> {
    fn from(list: RouterWhitelist) -> Self {
        list.order
    }
}
