//! # Emitted Event Records
//!
//! Events are append-only log records, not state. The bridge produces them
//! only when a transaction commits; a rolled-back transaction leaves no
//! record behind.
//!
//! `RequestSent` is what the off-chain relay consumes. Its field order
//! follows the normalized request tuple: source token, source amount,
//! destination chain, destination token, minimum output, recipient,
//! integrator (null when absent), router.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::amount::{serde_amount, Amount};
use crate::canonical::CanonicalBytes;
use crate::digest::{sha256_digest, ContentDigest};
use crate::error::CanonicalizationError;

/// Normalized cross-chain request, as handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub src_token: Address,
    #[serde(with = "serde_amount")]
    pub src_amount: Amount,
    pub dst_chain_id: u64,
    pub dst_token: Address,
    #[serde(with = "serde_amount")]
    pub dst_min_output_amount: Amount,
    pub recipient: Address,
    /// [`Address::ZERO`] when the request named no integrator.
    pub integrator: Address,
    pub router: Address,
}

#[derive(Serialize)]
struct DigestInput<'a> {
    record: &'a RequestRecord,
    provider_tag: &'a str,
}

/// A committed cross-chain request together with its provider tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSent {
    pub record: RequestRecord,
    pub provider_tag: String,
    /// SHA-256 over the canonical `{record, provider_tag}` object.
    pub digest: ContentDigest,
}

impl RequestSent {
    /// Build the event and compute its content digest.
    pub fn new(
        record: RequestRecord,
        provider_tag: impl Into<String>,
    ) -> Result<Self, CanonicalizationError> {
        let provider_tag = provider_tag.into();
        let bytes = CanonicalBytes::new(&DigestInput {
            record: &record,
            provider_tag: &provider_tag,
        })?;
        Ok(Self {
            digest: sha256_digest(&bytes),
            record,
            provider_tag,
        })
    }
}

/// Every record the bridge can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum BridgeEvent {
    /// A cross-chain request was accepted and handed to the router.
    RequestSent(RequestSent),
    /// The admin proposed a successor.
    InitAdminTransfer { from: Address, to: Address },
    /// The proposed successor accepted the admin role.
    AcceptAdmin { from: Address, to: Address },
}
