//! Flow addresses
//!
//! Flow account addresses are assigned by the network, not derived from
//! keys. `generate` emits a deterministic 8-byte digest of the public key
//! as a reference value; it must not be treated as the authoritative
//! on-chain identifier.

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::hash160;
use crate::error::{Error, Result};

const ADDRESS_BYTES: usize = 8;

/// Flow address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowCodec;

impl FlowCodec {
    pub fn new() -> Self {
        Self
    }

    /// Render a network-assigned account index as an address.
    pub fn from_index(index: u64) -> String {
        format!("0x{}", hex::encode(index.to_be_bytes()))
    }

    /// The numeric value of an address.
    pub fn parse_index(address: &str) -> Result<u64> {
        let codec = FlowCodec::new();
        if !codec.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        let cleaned = strip_prefix(address);
        let bytes = hex::decode(cleaned)
            .map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;
        Ok(u64::from_be_bytes(bytes.try_into().expect("length checked")))
    }
}

fn strip_prefix(address: &str) -> &str {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address)
}

impl AddressCodec for FlowCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if !matches!(public_key.len(), 32 | 33 | 64 | 65) {
            return Err(Error::InvalidLength(format!(
                "unexpected public key length {}",
                public_key.len()
            )));
        }

        let hash = hash160(public_key);
        Ok(format!(
            "0x{}",
            hex::encode(&hash[hash.len() - ADDRESS_BYTES..])
        ))
    }

    fn validate(&self, address: &str) -> bool {
        let cleaned = strip_prefix(address);
        if cleaned.len() != 2 * ADDRESS_BYTES || hex::decode(cleaned).is_err() {
            return false;
        }
        // The all-zeros address is reserved
        cleaned.bytes().any(|c| c != b'0')
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Flow
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let bytes = hex::decode(strip_prefix(address))
            .map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: bytes,
            chain_id: ChainId::Flow,
            address_type: AddressType::Hex,
            version: 0,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let value = Self::parse_index(address)?;
        // Very low account numbers belong to service accounts
        Ok(if value < 100 {
            "Service Account".to_string()
        } else {
            "User Account".to_string()
        })
    }
}
