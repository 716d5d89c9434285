//! Sui addresses: Blake2b-256 over `flag ‖ key`

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::blake2b_256;
use crate::error::{Error, Result};

/// Ed25519 scheme flag.
pub const ED25519_FLAG: u8 = 0x00;
/// secp256k1 scheme flag.
pub const SECP256K1_FLAG: u8 = 0x01;
/// secp256r1 scheme flag.
pub const SECP256R1_FLAG: u8 = 0x02;

/// Sui address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuiCodec;

impl SuiCodec {
    pub fn new() -> Self {
        Self
    }

    /// Derive an address under an explicit scheme flag.
    pub fn generate_with_flag(&self, public_key: &[u8], flag: u8) -> Result<String> {
        let expected_len = match flag {
            ED25519_FLAG => 32,
            SECP256K1_FLAG | SECP256R1_FLAG => 33,
            other => {
                return Err(Error::Unsupported(format!(
                    "sui signature scheme {:#04x}",
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

        let mut data = Vec::with_capacity(1 + public_key.len());
        data.push(flag);
        data.extend_from_slice(public_key);

        Ok(format!("0x{}", hex::encode(blake2b_256(&data))))
    }
}

impl AddressCodec for SuiCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.generate_with_flag(public_key, ED25519_FLAG)
    }

    fn validate(&self, address: &str) -> bool {
        let Some(hex_part) = address.strip_prefix("0x") else {
            return false;
        };
        hex_part.len() == 64 && hex::decode(hex_part).is_ok()
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Sui
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let bytes = hex::decode(&address[2..])
            .map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: bytes,
            chain_id: ChainId::Sui,
            address_type: AddressType::Hex,
            version: 0,
        })
    }
}
