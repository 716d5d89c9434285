//! Tezos addresses: Blake2b-160 hashes under multi-byte Base58Check prefixes

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::{blake2b_160, checksum4};
use crate::encoding::base58;
use crate::error::{Error, Result};

/// `tz1` prefix — Ed25519 key hashes.
pub const TZ1_PREFIX: [u8; 3] = [6, 161, 159];
/// `tz2` prefix — secp256k1 key hashes.
pub const TZ2_PREFIX: [u8; 3] = [6, 161, 161];
/// `tz3` prefix — P-256 key hashes.
pub const TZ3_PREFIX: [u8; 3] = [6, 161, 164];

const ADDRESS_LEN: usize = 36;

/// The curve behind a Tezos address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TezosKeyType {
    #[default]
    Ed25519,
    Secp256k1,
    P256,
}

/// Tezos address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct TezosCodec {
    key_type: TezosKeyType,
}

impl TezosCodec {
    /// An Ed25519 (`tz1`) codec.
    pub fn new() -> Self {
        Self::with_key_type(TezosKeyType::Ed25519)
    }

    /// A codec for a specific curve.
    pub fn with_key_type(key_type: TezosKeyType) -> Self {
        Self { key_type }
    }

    /// `tz1` address from a 32-byte Ed25519 public key.
    pub fn generate_tz1(public_key: &[u8]) -> Result<String> {
        Self::hash_with_prefix(public_key, 32, &TZ1_PREFIX)
    }

    /// `tz2` address from a 33-byte compressed secp256k1 public key.
    pub fn generate_tz2(public_key: &[u8]) -> Result<String> {
        Self::hash_with_prefix(public_key, 33, &TZ2_PREFIX)
    }

    /// `tz3` address from a 33-byte compressed P-256 public key.
    pub fn generate_tz3(public_key: &[u8]) -> Result<String> {
        Self::hash_with_prefix(public_key, 33, &TZ3_PREFIX)
    }

    fn hash_with_prefix(public_key: &[u8], expected_len: usize, prefix: &[u8]) -> Result<String> {
        if public_key.len() != expected_len {
            return Err(Error::InvalidLength(format!(
                "public key must be {} bytes for this curve, got {}",
                expected_len,
                public_key.len()
            )));
        }
        Ok(base58::check_encode_prefixed(
            prefix,
            &blake2b_160(public_key),
        ))
    }
}

impl AddressCodec for TezosCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        match self.key_type {
            TezosKeyType::Ed25519 => Self::generate_tz1(public_key),
            TezosKeyType::Secp256k1 => Self::generate_tz2(public_key),
            TezosKeyType::P256 => Self::generate_tz3(public_key),
        }
    }

    fn validate(&self, address: &str) -> bool {
        if address.len() != ADDRESS_LEN {
            return false;
        }
        if !address.starts_with("tz1") && !address.starts_with("tz2") && !address.starts_with("tz3")
        {
            return false;
        }

        let Ok(decoded) = base58::decode(address) else {
            return false;
        };
        // 3-byte prefix + 20-byte hash + 4-byte checksum
        if decoded.len() != 27 {
            return false;
        }

        let (payload, checksum) = decoded.split_at(23);
        checksum == checksum4(payload)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Tezos
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = base58::decode(address)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[3..23].to_vec(),
            chain_id: ChainId::Tezos,
            address_type: AddressType::Base58Check,
            version: decoded[2],
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let label = if address.starts_with("tz1") {
            "Ed25519"
        } else if address.starts_with("tz2") {
            "Secp256k1"
        } else if address.starts_with("tz3") {
            "P256"
        } else {
            return Err(Error::InvalidAddress(address.to_string()));
        };
        Ok(label.to_string())
    }
}
