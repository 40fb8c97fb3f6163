//! # rubic-fees: Fee Engine and Fee Ledger
//!
//! Two halves with a hard boundary between them:
//!
//! - [`engine`] is pure. Given an amount and the applicable configuration it
//!   returns the exact platform/integrator split. No state, no side effects.
//! - [`ledger`] is state. It accumulates splits per asset and beneficiary
//!   and pays them out through a caller-supplied transfer, zeroing and
//!   paying as one step.
//!
//! ## Conservation
//!
//! Every split computes the platform side by flooring and the integrator
//! side by subtraction, so `platform + integrator == total` exactly for all
//! inputs. The proptests in each module check this over the full rate range.

pub mod engine;
pub mod error;
pub mod ledger;

pub use engine::{FeeEngine, FixedFeeSplit, GrossQuote, TokenFeeSplit};
pub use error::{FeeError, LedgerError};
pub use ledger::{Beneficiary, FeeLedger};
