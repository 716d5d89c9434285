//! Aptos addresses: SHA3-256 over `key ‖ scheme`

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::sha3_256;
use crate::error::{Error, Result};

/// Single-signer Ed25519 scheme.
pub const ED25519_SCHEME: u8 = 0x00;
/// Single-signer secp256k1 scheme.
pub const SECP256K1_SCHEME: u8 = 0x01;

/// Aptos address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct AptosCodec;

impl AptosCodec {
    pub fn new() -> Self {
        Self
    }

    /// Derive an address under an explicit signature scheme.
    pub fn generate_with_scheme(&self, public_key: &[u8], scheme: u8) -> Result<String> {
        let expected_len = match scheme {
            ED25519_SCHEME => 32,
            SECP256K1_SCHEME => 33,
            other => {
                return Err(Error::Unsupported(format!(
                    "aptos signature scheme {:#04x}",
                    other
                )))
            }
        };
        if public_key.len() != expected_len {
            return Err(Error::InvalidLength(format!(
                "public key must be {} bytes for this scheme, got {}",
                expected_len,
                public_key.len()
            )));
        }

        let mut data = Vec::with_capacity(public_key.len() + 1);
        data.extend_from_slice(public_key);
        data.push(scheme);

        Ok(format!("0x{}", hex::encode(sha3_256(&data))))
    }
}

impl AddressCodec for AptosCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.generate_with_scheme(public_key, ED25519_SCHEME)
    }

    fn validate(&self, address: &str) -> bool {
        let Some(hex_part) = address.strip_prefix("0x") else {
            return false;
        };
        // Shorter forms (leading zero bytes dropped) are accepted
        !hex_part.is_empty() && hex_part.len() <= 64 && hex::decode(hex_part).is_ok()
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Aptos
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let hex_part = &address[2..];
        let padded = format!("{:0>64}", hex_part);
        let bytes =
            hex::decode(padded).map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: bytes,
            chain_id: ChainId::Aptos,
            address_type: AddressType::Hex,
            version: 0,
        })
    }
}
