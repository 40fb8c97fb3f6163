//! # rubic-access: Roles and Capability Grants
//!
//! Two roles guard every configuration mutation:
//!
//! - **Admin**: exactly one identity at a time, handed over in two steps
//!   (`transfer_admin` then `accept_admin` by the proposed successor).
//! - **Manager**: any number of identities, granted and revoked by the admin.
//!   The current admin passes every manager check.
//!
//! ## Grants
//!
//! `RoleRegistry::require_admin` / `require_manager` return a [`Grant`]
//! capability. Mutators elsewhere in the workspace take `&Grant<Admin>` or
//! `&Grant<Manager>`, so calling one without first passing the guard does
//! not compile. Grants cannot be constructed outside this crate.
//!
//! ```text
//! let grant = roles.require_manager(caller)?;   // NotAManager on failure
//! whitelist.add(&grant, router);
//! ```
//!
//! A grant proves the check passed at the moment it was issued. Obtain one
//! per operation; do not keep them across transactions.

pub mod roles;

pub use roles::{AccessError, Admin, AdminState, Grant, Manager, Role, RoleRegistry};
