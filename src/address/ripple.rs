//! Ripple (XRP) addresses: Base58Check over the Ripple alphabet

use bs58::Alphabet;

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::{checksum4, hash160};
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Account prefix; addresses start with `r`.
pub const ACCOUNT_PREFIX: u8 = 0x00;

/// Ripple address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct RippleCodec;

impl RippleCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AddressCodec for RippleCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "ripple requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }

        let account_id = hash160(public_key);
        let mut payload = Vec::with_capacity(25);
        payload.push(ACCOUNT_PREFIX);
        payload.extend_from_slice(&account_id);
        let checksum = checksum4(&payload);
        payload.extend_from_slice(&checksum);

        Ok(base58::encode_with(&payload, Alphabet::RIPPLE))
    }

    fn validate(&self, address: &str) -> bool {
        if !address.starts_with('r') {
            return false;
        }

        let Ok(decoded) = base58::decode_with(address, Alphabet::RIPPLE) else {
            return false;
        };
        if decoded.len() != 25 || decoded[0] != ACCOUNT_PREFIX {
            return false;
        }

        let (payload, checksum) = decoded.split_at(21);
        checksum == checksum4(payload)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Ripple
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = base58::decode_with(address, Alphabet::RIPPLE)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[1..21].to_vec(),
            chain_id: ChainId::Ripple,
            address_type: AddressType::Base58Check,
            version: decoded[0],
        })
    }
}
