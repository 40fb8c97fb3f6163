//! # Bridge State
//!
//! Everything a bridge operation may mutate, in one cloneable value. The
//! transaction wrapper snapshots it on entry and puts the snapshot back on
//! failure.

use rubic_access::RoleRegistry;
use rubic_config::{
    BridgeConfig, ConfigError, ConfiguredComponents, IntegratorRegistry, PlatformConfig,
    RouterWhitelist, TokenBoundsTable,
};
use rubic_fees::FeeLedger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeState {
    pub roles: RoleRegistry,
    pub routers: RouterWhitelist,
    pub bounds: TokenBoundsTable,
    pub platform: PlatformConfig,
    pub integrators: IntegratorRegistry,
    pub ledger: FeeLedger,
}

impl BridgeState {
    /// Fresh state for a new deployment.
    pub fn from_config(config: &BridgeConfig) -> Result<Self, ConfigError> {
        let ConfiguredComponents {
            roles,
            routers,
            bounds,
            platform,
        } = config.build()?;
        Ok(Self {
            roles,
            routers,
            bounds,
            platform,
            integrators: IntegratorRegistry::new(),
            ledger: FeeLedger::new(),
        })
    }
}
