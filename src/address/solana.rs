//! Solana addresses: Base58 of the raw Ed25519 public key

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Solana address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaCodec;

impl SolanaCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AddressCodec for SolanaCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "solana requires a 32-byte ed25519 public key, got {}",
                public_key.len()
            )));
        }
        Ok(base58::encode(public_key))
    }

    fn validate(&self, address: &str) -> bool {
        if address.len() < 32 || address.len() > 44 {
            return false;
        }
        matches!(base58::decode(address), Ok(decoded) if decoded.len() == 32)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Solana
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let decoded = base58::decode(address)?;
        if decoded.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "solana address must decode to 32 bytes, got {}",
                decoded.len()
            )));
        }

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded,
            chain_id: ChainId::Solana,
            address_type: AddressType::Base58,
            version: 0,
        })
    }
}
