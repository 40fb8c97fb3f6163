//! # Canonical Serialization
//!
//! `CanonicalBytes` is the only input [`sha256_digest`](crate::sha256_digest)
//! accepts. Records are serialized with `serde_jcs` (RFC 8785: sorted keys,
//! no insignificant whitespace), so the bridge and a relay re-deriving a
//! record digest hash the same bytes. Amounts serialize as decimal strings,
//! never as JSON numbers, so no float formatting is involved.

use serde::Serialize;

use crate::error::CanonicalizationError;

/// Bytes produced by JCS canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        Ok(Self(serde_jcs::to_vec(obj)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, RequestRecord};

    #[test]
    fn sorted_keys_compact_separators() {
        let data = serde_json::json!({"b": 2, "a": 1, "c": "hello"});
        let cb = CanonicalBytes::new(&data).unwrap();
        assert_eq!(cb.as_bytes(), br#"{"a":1,"b":2,"c":"hello"}"#);
    }

    #[test]
    fn request_record_amounts_are_strings() {
        let record = RequestRecord {
            src_token: Address::from_low_u64(1),
            src_amount: u128::MAX,
            dst_chain_id: 228,
            dst_token: Address::from_low_u64(2),
            dst_min_output_amount: 0,
            recipient: Address::from_low_u64(3),
            integrator: Address::ZERO,
            router: Address::from_low_u64(4),
        };
        let cb = CanonicalBytes::new(&record).unwrap();
        let text = std::str::from_utf8(cb.as_bytes()).unwrap();
        assert!(text.starts_with(r#"{"dst_chain_id":228,"dst_min_output_amount":"0","#));
        assert!(text.contains(&format!(r#""src_amount":"{}""#, u128::MAX)));
        assert!(!cb.is_empty());
    }
}
