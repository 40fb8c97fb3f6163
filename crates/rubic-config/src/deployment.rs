//! # Deployment Configuration
//!
//! `BridgeConfig` is the serde-facing description of a freshly deployed
//! bridge: initial roles, fee settings, routers and token bounds. Reading
//! files is left to the embedding application; this module parses strings.
//!
//! ```yaml
//! admin: "0x00000000000000000000000000000000000000aa"
//! managers: []
//! fixed_crypto_fee: "1000"
//! platform_fee: 30000
//! routers:
//!   - "0x00000000000000000000000000000000000000d0"
//! token_bounds:
//!   - token: "0x0000000000000000000000000000000000000001"
//!     min: "100"
//!     max: "1000000000"
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use rubic_access::RoleRegistry;
use rubic_core::amount::serde_amount;
use rubic_core::{Address, Amount, Ppm};

use crate::bounds::{AmountBounds, TokenBoundsTable};
use crate::error::ConfigError;
use crate::platform::PlatformConfig;
use crate::whitelist::RouterWhitelist;

/// Ceiling on the platform fee rate when none is configured: 25%.
pub const DEFAULT_MAX_PLATFORM_FEE: Ppm = Ppm::new(250_000);

/// Explicit bounds for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBoundsEntry {
    pub token: Address,
    #[serde(with = "serde_amount")]
    pub min: Amount,
    #[serde(with = "serde_amount")]
    pub max: Amount,
}

fn default_max_platform_fee() -> Ppm {
    DEFAULT_MAX_PLATFORM_FEE
}

/// Initial state of a bridge deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub admin: Address,
    #[serde(default)]
    pub managers: Vec<Address>,
    #[serde(default, with = "serde_amount")]
    pub fixed_crypto_fee: Amount,
    #[serde(default)]
    pub platform_fee: Ppm,
    #[serde(default = "default_max_platform_fee")]
    pub max_platform_fee: Ppm,
    #[serde(default)]
    pub routers: Vec<Address>,
    #[serde(default)]
    pub token_bounds: Vec<TokenBoundsEntry>,
    #[serde(default)]
    pub default_bounds: AmountBounds,
}

/// Components built from a validated [`BridgeConfig`].
#[derive(Debug, Clone)]
pub struct ConfiguredComponents {
    pub roles: RoleRegistry,
    pub routers: RouterWhitelist,
    pub bounds: TokenBoundsTable,
    pub platform: PlatformConfig,
}

impl BridgeConfig {
    /// Minimal configuration: `admin` only, everything else defaulted.
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            managers: Vec::new(),
            fixed_crypto_fee: 0,
            platform_fee: Ppm::ZERO,
            max_platform_fee: DEFAULT_MAX_PLATFORM_FEE,
            routers: Vec::new(),
            token_bounds: Vec::new(),
            default_bounds: AmountBounds::UNBOUNDED,
        }
    }

    /// Parse from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the built components enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build().map(|_| ())
    }

    /// Build the configuration components.
    ///
    /// # Errors
    ///
    /// `InvalidAddress` for a null admin, manager or router; `FeeTooHigh` if
    /// the ceiling exceeds 100% or the fee exceeds the ceiling;
    /// `MinMustBeLowerThanMax` for inverted bounds.
    pub fn build(&self) -> Result<ConfiguredComponents, ConfigError> {
        let mut roles = RoleRegistry::new(self.admin)
            .map_err(|_| ConfigError::InvalidAddress(self.admin))?;
        let grant = roles
            .require_admin(self.admin)
            .map_err(|_| ConfigError::InvalidAddress(self.admin))?;
        for manager in &self.managers {
            if manager.is_zero() {
                return Err(ConfigError::InvalidAddress(*manager));
            }
            roles.grant_manager(&grant, *manager);
        }

        if let Some(bad) = self.routers.iter().find(|r| r.is_zero()) {
            return Err(ConfigError::InvalidAddress(*bad));
        }
        let routers = RouterWhitelist::from_routers(self.routers.iter().copied());

        if self.default_bounds.min > self.default_bounds.max {
            return Err(ConfigError::MinMustBeLowerThanMax {
                token: Address::ZERO,
                min: self.default_bounds.min,
                max: self.default_bounds.max,
            });
        }
        let mut bounds = TokenBoundsTable::new(self.default_bounds);
        for entry in &self.token_bounds {
            bounds.insert_initial(
                entry.token,
                AmountBounds {
                    min: entry.min,
                    max: entry.max,
                },
            )?;
        }

        let platform =
            PlatformConfig::new(self.platform_fee, self.max_platform_fee, self.fixed_crypto_fee)?;

        debug!(
            admin = %self.admin,
            managers = self.managers.len(),
            routers = routers.len(),
            tokens = self.token_bounds.len(),
            "bridge configuration built"
        );
        Ok(ConfiguredComponents {
            roles,
            routers,
            bounds,
            platform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> Address {
        Address::from_low_u64(n)
    }

    #[test]
    fn minimal_config_builds() {
        let c = BridgeConfig::new(addr(1)).build().unwrap();
        assert!(c.roles.is_admin(addr(1)));
        assert!(c.routers.is_empty());
        assert_eq!(c.platform.max_fee_rate(), DEFAULT_MAX_PLATFORM_FEE);
        assert_eq!(c.bounds.max(&addr(5)), Amount::MAX);
    }

    #[test]
    fn null_admin_rejected() {
        assert_eq!(
            BridgeConfig::new(Address::ZERO).validate().unwrap_err(),
            ConfigError::InvalidAddress(Address::ZERO)
        );
    }

    #[test]
    fn null_router_rejected() {
        let mut c = BridgeConfig::new(addr(1));
        c.routers = vec![addr(2), Address::ZERO];
        assert_eq!(
            c.validate().unwrap_err(),
            ConfigError::InvalidAddress(Address::ZERO)
        );
    }

    #[test]
    fn fee_above_ceiling_rejected() {
        let mut c = BridgeConfig::new(addr(1));
        c.platform_fee = Ppm::new(300_000);
        assert!(matches!(
            c.validate().unwrap_err(),
            ConfigError::FeeTooHigh { .. }
        ));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut c = BridgeConfig::new(addr(1));
        c.token_bounds = vec![TokenBoundsEntry {
            token: addr(3),
            min: 10,
            max: 9,
        }];
        assert!(matches!(
            c.validate().unwrap_err(),
            ConfigError::MinMustBeLowerThanMax { .. }
        ));
    }

    #[test]
    fn json_with_defaults() {
        let json = r#"{
            "admin": "0x00000000000000000000000000000000000000aa",
            "routers": [
                "0x00000000000000000000000000000000000000d0",
                "0x00000000000000000000000000000000000000d0"
            ],
            "fixed_crypto_fee": "1000",
            "platform_fee": 30000
        }"#;
        let c = BridgeConfig::from_json_str(json).unwrap();
        assert_eq!(c.admin, addr(0xaa));
        assert_eq!(c.fixed_crypto_fee, 1_000);
        assert_eq!(c.platform_fee, Ppm::new(30_000));
        assert_eq!(c.max_platform_fee, DEFAULT_MAX_PLATFORM_FEE);
        assert_eq!(c.default_bounds, AmountBounds::UNBOUNDED);
        let built = c.build().unwrap();
        assert_eq!(built.routers.list(), &[addr(0xd0)]);
    }

    #[test]
    fn yaml_with_bounds() {
        let yaml = r#"
admin: "0x00000000000000000000000000000000000000aa"
managers:
  - "0x00000000000000000000000000000000000000bb"
token_bounds:
  - token: "0x0000000000000000000000000000000000000001"
    min: "100"
    max: 1000000000
default_bounds:
  min: 1
  max: "5000"
"#;
        let c = BridgeConfig::from_yaml_str(yaml).unwrap();
        let built = c.build().unwrap();
        assert!(built.roles.is_manager(addr(0xbb)));
        assert_eq!(built.bounds.min(&addr(1)), 100);
        assert_eq!(built.bounds.max(&addr(1)), 1_000_000_000);
        assert_eq!(built.bounds.min(&addr(2)), 1);
        assert_eq!(built.bounds.max(&addr(2)), 5_000);
    }

    #[test]
    fn malformed_input_is_parse_error() {
        assert!(matches!(
            BridgeConfig::from_json_str("{").unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            BridgeConfig::from_yaml_str("admin: [").unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            BridgeConfig::from_json_str(r#"{"admin": "0x12"}"#).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let mut c = BridgeConfig::new(addr(1));
        c.fixed_crypto_fee = Amount::MAX;
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(BridgeConfig::from_json_str(&json).unwrap(), c);
    }
}
