//! Internet Computer principals: DER-wrapped keys, SHA-224, CRC-32 text form

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::crc32_iso3309;
use crate::encoding::base32::{self, Alphabet};
use crate::error::{Error, Result};
use sha2::{Digest, Sha224};

/// Self-authenticating principal marker.
pub const SELF_AUTHENTICATING: u8 = 0x02;
/// Anonymous principal marker.
pub const ANONYMOUS: u8 = 0x04;

// DER prefix for an Ed25519 subject public key (RFC 8410)
const ED25519_DER_PREFIX: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
];

// DER prefix for a secp256k1 subject public key
const SECP256K1_DER_PREFIX: [u8; 23] = [
    0x30, 0x56, 0x30, 0x10, 0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, 0x06, 0x05,
    0x2b, 0x81, 0x04, 0x00, 0x0a, 0x03, 0x42, 0x00,
];

/// ICP principal codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcpCodec;

impl IcpCodec {
    pub fn new() -> Self {
        Self
    }

    fn principal_bytes(public_key: &[u8]) -> Result<[u8; 29]> {
        let der = match public_key.len() {
            32 => {
                let mut der = Vec::with_capacity(ED25519_DER_PREFIX.len() + 32);
                der.extend_from_slice(&ED25519_DER_PREFIX);
                der.extend_from_slice(public_key);
                der
            }
            33 => {
                // secp256k1 keys are DER-wrapped uncompressed
                let uncompressed = crate::crypto::secp256k1::decompress(public_key)?;
                let mut der = Vec::with_capacity(SECP256K1_DER_PREFIX.len() + 65);
                der.extend_from_slice(&SECP256K1_DER_PREFIX);
                der.extend_from_slice(&uncompressed);
                der
            }
            other => {
                return Err(Error::InvalidLength(format!(
                    "public key must be 32 (ed25519) or 33 (secp256k1) bytes, got {}",
                    other
                )))
            }
        };

        let hash: [u8; 28] = Sha224::digest(&der).into();
        let mut principal = [0u8; 29];
        principal[..28].copy_from_slice(&hash);
        principal[28] = SELF_AUTHENTICATING;
        Ok(principal)
    }

    fn render(principal: &[u8]) -> String {
        let crc = crc32_iso3309(principal);
        let mut data = Vec::with_capacity(4 + principal.len());
        data.extend_from_slice(&crc.to_be_bytes());
        data.extend_from_slice(principal);

        let encoded = base32::encode(&data, Alphabet::Rfc4648Lower);
        encoded
            .as_bytes()
            .chunks(5)
            .map(|chunk| std::str::from_utf8(chunk).expect("ascii"))
            .collect::<Vec<_>>()
            .join("-")
    }

    fn parse(address: &str) -> Result<Vec<u8>> {
        let cleaned: String = address.chars().filter(|&c| c != '-').collect();
        let decoded = base32::decode(&cleaned, Alphabet::Rfc4648Lower)?;
        if decoded.len() < 5 {
            return Err(Error::InvalidLength("principal too short".into()));
        }

        let crc = u32::from_be_bytes(decoded[..4].try_into().expect("length checked"));
        let principal = &decoded[4..];
        if crc != crc32_iso3309(principal) {
            return Err(Error::ChecksumMismatch);
        }

        Ok(principal.to_vec())
    }
}

impl AddressCodec for IcpCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        let principal = Self::principal_bytes(public_key)?;
        Ok(Self::render(&principal))
    }

    fn validate(&self, address: &str) -> bool {
        Self::parse(address).is_ok()
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Icp
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let principal = Self::parse(address)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: principal,
            chain_id: ChainId::Icp,
            address_type: AddressType::Base32,
            version: 0,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let principal = Self::parse(address)?;
        let label = match principal.last() {
            Some(&SELF_AUTHENTICATING) => "Self-Authenticating Principal",
            Some(&ANONYMOUS) => "Anonymous Principal",
            _ => "Opaque Principal",
        };
        Ok(label.to_string())
    }
}
