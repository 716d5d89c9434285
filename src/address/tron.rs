//! TRON addresses: Keccak-derived with Base58 and hex renderings

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::{checksum4, keccak256};
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Mainnet prefix byte; Base58 addresses start with `T`.
pub const MAINNET_PREFIX: u8 = 0x41;
/// Testnet (Shasta) prefix byte.
pub const TESTNET_PREFIX: u8 = 0xA0;

/// TRON address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct TronCodec {
    testnet: bool,
}

impl TronCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    fn prefix(&self) -> u8 {
        if self.testnet {
            TESTNET_PREFIX
        } else {
            MAINNET_PREFIX
        }
    }

    fn address_bytes(&self, public_key: &[u8]) -> Result<[u8; 21]> {
        let key = match public_key.len() {
            64 => public_key,
            65 => {
                if public_key[0] != 0x04 {
                    return Err(Error::InvalidEncoding(
                        "uncompressed public key must start with 0x04".into(),
                    ));
                }
                &public_key[1..]
            }
            other => {
                return Err(Error::InvalidLength(format!(
                    "public key must be 64 or 65 bytes, got {}",
                    other
                )))
            }
        };

        let hash = keccak256(key);
        let mut out = [0u8; 21];
        out[0] = self.prefix();
        out[1..].copy_from_slice(&hash[12..]);
        Ok(out)
    }

    /// The 21-byte address in hex form (`41…`).
    pub fn generate_hex(&self, public_key: &[u8]) -> Result<String> {
        Ok(hex::encode(self.address_bytes(public_key)?))
    }

    /// Convert a hex address to its Base58 form.
    pub fn hex_to_base58(&self, hex_addr: &str) -> Result<String> {
        let decoded =
            hex::decode(hex_addr).map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;
        if decoded.len() != 21 {
            return Err(Error::InvalidLength(format!(
                "hex address must be 21 bytes, got {}",
                decoded.len()
            )));
        }

        let mut full = decoded;
        let checksum = checksum4(&full);
        full.extend_from_slice(&checksum);
        Ok(base58::encode(&full))
    }

    /// Convert a Base58 address to its hex form.
    pub fn base58_to_hex(&self, base58_addr: &str) -> Result<String> {
        let decoded = base58::decode(base58_addr)?;
        if decoded.len() != 25 {
            return Err(Error::InvalidLength(format!(
                "base58 address must decode to 25 bytes, got {}",
                decoded.len()
            )));
        }
        Ok(hex::encode(&decoded[..21]))
    }

    fn is_hex_form(address: &str) -> bool {
        address.starts_with("41") || address.starts_with("a0")
    }
}

impl AddressCodec for TronCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        let bytes = self.address_bytes(public_key)?;
        let mut full = bytes.to_vec();
        let checksum = checksum4(&full);
        full.extend_from_slice(&checksum);
        Ok(base58::encode(&full))
    }

    fn validate(&self, address: &str) -> bool {
        if Self::is_hex_form(address) {
            return address.len() == 42 && hex::decode(address).is_ok();
        }

        if !address.starts_with('T') {
            return false;
        }

        let Ok(decoded) = base58::decode(address) else {
            return false;
        };
        if decoded.len() != 25 || decoded[0] != self.prefix() {
            return false;
        }

        let (payload, checksum) = decoded.split_at(21);
        checksum == checksum4(payload)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Tron
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if Self::is_hex_form(address) {
            let decoded =
                hex::decode(address).map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;
            if decoded.len() != 21 {
                return Err(Error::InvalidLength(format!(
                    "hex address must be 21 bytes, got {}",
                    decoded.len()
                )));
            }
            return Ok(AddressInfo {
                address: address.to_string(),
                public_key: decoded[1..].to_vec(),
                chain_id: ChainId::Tron,
                address_type: AddressType::Base58Check,
                version: decoded[0],
            });
        }

        let decoded = base58::decode(address)?;
        if decoded.len() != 25 {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        let (payload, checksum) = decoded.split_at(21);
        if checksum != checksum4(payload) {
            return Err(Error::ChecksumMismatch);
        }

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: payload[1..].to_vec(),
            chain_id: ChainId::Tron,
            address_type: AddressType::Base58Check,
            version: payload[0],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::secp256k1;

    fn test_public_key() -> [u8; 65] {
        let mut one = [0u8; 32];
        one[31] = 1;
        secp256k1::public_uncompressed_from_private(&one).unwrap()
    }

    #[test]
    fn test_generate_starts_with_t() {
        let codec = TronCodec::new(false);
        let addr = codec.generate(&test_public_key()).unwrap();
        assert!(addr.starts_with('T'));
        assert!(codec.validate(&addr));
    }

    #[test]
    fn test_hex_base58_conversion_round_trip() {
        let codec = TronCodec::new(false);
        let base58_addr = codec.generate(&test_public_key()).unwrap();
        let hex_addr = codec.generate_hex(&test_public_key()).unwrap();
        assert!(hex_addr.starts_with("41"));
        assert_eq!(hex_addr.len(), 42);

        assert_eq!(codec.hex_to_base58(&hex_addr).unwrap(), base58_addr);
        assert_eq!(codec.base58_to_hex(&base58_addr).unwrap(), hex_addr);
    }

    #[test]
    fn test_decode_matches_keccak_payload() {
        let codec = TronCodec::new(false);
        let public_key = test_public_key();
        let addr = codec.generate(&public_key).unwrap();

        let info = codec.decode(&addr).unwrap();
        assert_eq!(info.version, MAINNET_PREFIX);
        assert_eq!(info.public_key, keccak256(&public_key[1..])[12..]);
    }

    #[test]
    fn test_corruption_and_garbage_rejected() {
        let codec = TronCodec::new(false);
        assert!(!codec.validate("invalid"));
        assert!(!codec.validate("T123"));

        let addr = codec.generate(&test_public_key()).unwrap();
        let mut corrupted = addr.into_bytes();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'a' { b'b' } else { b'a' };
        assert!(!codec.validate(&String::from_utf8(corrupted).unwrap()));
    }
}
