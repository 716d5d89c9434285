//! NEAR accounts: implicit hex addresses and named accounts

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::error::{Error, Result};

/// NEAR account codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearCodec;

impl NearCodec {
    pub fn new() -> Self {
        Self
    }

    /// Whether an address is a 64-hex-character implicit account.
    pub fn is_implicit(address: &str) -> bool {
        address.len() == 64 && address.bytes().all(|c| c.is_ascii_hexdigit())
    }

    /// Whether an address is a well-formed named account
    /// (2–64 chars, dot-separated parts of `[a-z0-9]` with inner `_`/`-`).
    pub fn is_named(address: &str) -> bool {
        if address.len() < 2 || address.len() > 64 {
            return false;
        }
        address.split('.').all(|part| {
            !part.is_empty()
                && part.bytes().all(|c| matches!(c, b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-'))
                && !part.starts_with(['_', '-'])
                && !part.ends_with(['_', '-'])
        })
    }

    /// The top-level account of a sub-account (`bob.alice.near` → `near`).
    pub fn top_level_account(address: &str) -> &str {
        address.rsplit('.').next().unwrap_or(address)
    }

    /// The parent of a sub-account (`bob.alice.near` → `alice.near`).
    pub fn parent_account(address: &str) -> Option<&str> {
        address.split_once('.').map(|(_, parent)| parent)
    }
}

impl AddressCodec for NearCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "near requires a 32-byte ed25519 public key, got {}",
                public_key.len()
            )));
        }
        Ok(hex::encode(public_key))
    }

    fn validate(&self, address: &str) -> bool {
        Self::is_implicit(address) || Self::is_named(address)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Near
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if Self::is_implicit(address) {
            let bytes = hex::decode(address.to_lowercase())
                .map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;
            return Ok(AddressInfo {
                address: address.to_string(),
                public_key: bytes,
                chain_id: ChainId::Near,
                address_type: AddressType::Hex,
                version: 0,
            });
        }

        if Self::is_named(address) {
            return Ok(AddressInfo {
                address: address.to_string(),
                public_key: address.as_bytes().to_vec(),
                chain_id: ChainId::Near,
                address_type: AddressType::AccountId,
                version: 0,
            });
        }

        Err(Error::InvalidAddress(address.to_string()))
    }

    fn address_type(&self, address: &str) -> Result<String> {
        if Self::is_implicit(address) {
            Ok("implicit".to_string())
        } else if Self::is_named(address) {
            Ok("named".to_string())
        } else {
            Err(Error::InvalidAddress(address.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_address() {
        let mut public_key = [0u8; 32];
        public_key[31] = 1;
        let codec = NearCodec::new();
        let addr = codec.generate(&public_key).unwrap();
        assert_eq!(
            addr,
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "implicit");
        assert_eq!(codec.decode(&addr).unwrap().public_key, public_key);
    }

    #[test]
    fn test_named_accounts() {
        let codec = NearCodec::new();
        for valid in ["alice.near", "bob.alice.near", "a1", "x-y_z.near"] {
            assert!(codec.validate(valid), "{} should be valid", valid);
            assert_eq!(codec.address_type(valid).unwrap(), "named");
        }
        for invalid in ["a", "-alice.near", "alice-.near", "Alice.near", "a..b", ""] {
            assert!(!codec.validate(invalid), "{} should be invalid", invalid);
        }
    }

    #[test]
    fn test_account_hierarchy_helpers() {
        assert_eq!(NearCodec::top_level_account("bob.alice.near"), "near");
        assert_eq!(
            NearCodec::parent_account("bob.alice.near"),
            Some("alice.near")
        );
        assert_eq!(NearCodec::parent_account("near"), None);
    }
}
