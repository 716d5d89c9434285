//! Filecoin f1 addresses: Blake2b-160 payloads with a Blake2b-32 checksum

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::{blake2b_160, blake2b_checksum};
use crate::encoding::base32::{self, Alphabet};
use crate::error::{Error, Result};

/// Protocol indicator for secp256k1 (f1) addresses.
pub const PROTOCOL_SECP256K1: u8 = 1;

/// Filecoin address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilecoinCodec {
    testnet: bool,
}

impl FilecoinCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    fn network_prefix(&self) -> char {
        if self.testnet {
            't'
        } else {
            'f'
        }
    }

    fn checksum(payload: &[u8]) -> [u8; 4] {
        let mut data = Vec::with_capacity(1 + payload.len());
        data.push(PROTOCOL_SECP256K1);
        data.extend_from_slice(payload);
        blake2b_checksum(&data)
    }
}

impl AddressCodec for FilecoinCodec {
    /// f1 address from a 65-byte uncompressed secp256k1 public key.
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 65 {
            return Err(Error::InvalidLength(format!(
                "filecoin f1 requires a 65-byte uncompressed public key, got {}",
                public_key.len()
            )));
        }

        let payload = blake2b_160(public_key);
        let checksum = Self::checksum(&payload);

        let mut data = Vec::with_capacity(24);
        data.extend_from_slice(&payload);
        data.extend_from_slice(&checksum);

        Ok(format!(
            "{}1{}",
            self.network_prefix(),
            base32::encode(&data, Alphabet::Rfc4648Lower)
        ))
    }

    fn validate(&self, address: &str) -> bool {
        let bytes = address.as_bytes();
        if bytes.len() < 3 || bytes[0] != self.network_prefix() as u8 {
            return false;
        }
        // Only f1 carries a verifiable checksum here
        if bytes[1] != b'1' {
            return matches!(bytes[1], b'0' | b'2' | b'3');
        }

        let Ok(decoded) = base32::decode(&address[2..], Alphabet::Rfc4648Lower) else {
            return false;
        };
        if decoded.len() != 24 {
            return false;
        }

        let (payload, checksum) = decoded.split_at(20);
        checksum == Self::checksum(payload)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Filecoin
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        if address.as_bytes()[1] != b'1' {
            return Err(Error::Unsupported(
                "only f1 addresses can be decoded".into(),
            ));
        }

        let decoded = base32::decode(&address[2..], Alphabet::Rfc4648Lower)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[..20].to_vec(),
            chain_id: ChainId::Filecoin,
            address_type: AddressType::Base32,
            version: PROTOCOL_SECP256K1,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let bytes = address.as_bytes();
        if bytes.len() < 2 {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        let label = match bytes[1] {
            b'0' => "ID (f0)",
            b'1' => "Secp256k1 (f1)",
            b'2' => "Actor (f2)",
            b'3' => "BLS (f3)",
            _ => return Err(Error::InvalidAddress(address.to_string())),
        };
        Ok(label.to_string())
    }
}
