//! # rubic-core: Foundational Types for the Rubic Bridge Core
//!
//! This crate defines the primitives every other crate in the workspace
//! builds on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `Address` is a 20-byte
//!    identity with a validated hex constructor; `Ppm` is a fixed-point rate
//!    against [`DENOMINATOR`]. No bare integers for rates.
//!
//! 2. **Exact arithmetic.** All fee math goes through [`mul_div_floor`],
//!    which floors without intermediate overflow and reports overflow of the
//!    result instead of wrapping.
//!
//! 3. **`CanonicalBytes` newtype.** Digests of emitted records flow through
//!    `CanonicalBytes::new()` (JCS, amounts as strings), so the relay and the
//!    bridge agree on record identity byte-for-byte.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rubic-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod address;
pub mod amount;
pub mod asset;
pub mod canonical;
pub mod digest;
pub mod error;
pub mod event;

// Re-export primary types for ergonomic imports.
pub use address::Address;
pub use amount::{mul_div_floor, Amount, Ppm, DENOMINATOR};
pub use asset::Asset;
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{AddressError, CanonicalizationError};
pub use event::{BridgeEvent, RequestRecord, RequestSent};
