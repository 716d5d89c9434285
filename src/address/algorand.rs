//! Algorand addresses: Base32 of the public key plus a SHA-256 tail checksum

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::sha256;
use crate::encoding::base32::{self, Alphabet};
use crate::error::{Error, Result};

const ADDRESS_LEN: usize = 58;

/// Algorand address codec.
///
/// The checksum is the last 4 bytes of a 32-byte hash of the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorandCodec;

impl AlgorandCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AddressCodec for AlgorandCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "algorand requires a 32-byte ed25519 public key, got {}",
                public_key.len()
            )));
        }

        let hash = sha256(public_key);
        let mut payload = Vec::with_capacity(36);
        payload.extend_from_slice(public_key);
        payload.extend_from_slice(&hash[28..]);

        Ok(base32::encode(&payload, Alphabet::Rfc4648Upper))
    }

    fn validate(&self, address: &str) -> bool {
        if address.len() != ADDRESS_LEN {
            return false;
        }

        let Ok(decoded) = base32::decode(address, Alphabet::Rfc4648Upper) else {
            return false;
        };
        if decoded.len() != 36 {
            return false;
        }

        let hash = sha256(&decoded[..32]);
        decoded[32..] == hash[28..]
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Algorand
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = base32::decode(address, Alphabet::Rfc4648Upper)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[..32].to_vec(),
            chain_id: ChainId::Algorand,
            address_type: AddressType::Base32,
            version: 0,
        })
    }
}
