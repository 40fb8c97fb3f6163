//! # rubic-config: Bridge Configuration Components
//!
//! Each configuration concern is an explicit state struct owned by the
//! bridge. Every mutator takes a role grant from `rubic-access`, so the
//! access check happens before the call and cannot be skipped.
//!
//! | Component | Mutators | Guard |
//! |-----------|----------|-------|
//! | [`RouterWhitelist`] | `add`, `add_many`, `remove`, `remove_many` | Manager |
//! | [`TokenBoundsTable`] | `set_min`, `set_max` | Manager |
//! | [`PlatformConfig`] | `set_fee_rate`, `set_fixed_crypto_fee` | Manager |
//! | [`PlatformConfig`] | `set_max_fee_rate` | Admin |
//! | [`IntegratorRegistry`] | `set_info` | Manager |
//!
//! [`BridgeConfig`] is the serde-facing deployment description from which
//! all of the above are built at construction time.
//!
//! ## Crate Policy
//!
//! - Validation failures are typed ([`ConfigError`]) and carry the offending
//!   value and the limit it violated.
//! - A failed setter leaves its component unchanged.

pub mod bounds;
pub mod deployment;
pub mod error;
pub mod integrator;
pub mod platform;
pub mod whitelist;

pub use bounds::{AmountBounds, TokenBoundsTable};
pub use deployment::{BridgeConfig, ConfiguredComponents, TokenBoundsEntry, DEFAULT_MAX_PLATFORM_FEE};
pub use error::ConfigError;
pub use integrator::{IntegratorFeeInfo, IntegratorRegistry};
pub use platform::PlatformConfig;
pub use whitelist::RouterWhitelist;
