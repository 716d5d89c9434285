//! Zcash transparent addresses: Base58Check with two-byte version prefixes
//!
//! Shielded z-addresses require zk-SNARK machinery and are out of scope.

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::{checksum4, hash160};
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Mainnet P2PKH version (`t1…`).
pub const P2PKH_VERSION: [u8; 2] = [0x1C, 0xB8];
/// Mainnet P2SH version (`t3…`).
pub const P2SH_VERSION: [u8; 2] = [0x1C, 0xBD];
/// Testnet P2PKH version.
pub const TESTNET_P2PKH_VERSION: [u8; 2] = [0x1D, 0x25];
/// Testnet P2SH version.
pub const TESTNET_P2SH_VERSION: [u8; 2] = [0x1C, 0xBA];

/// Zcash transparent-address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZcashCodec {
    testnet: bool,
}

impl ZcashCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    /// Transparent P2PKH address.
    pub fn p2pkh(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 && public_key.len() != 65 {
            return Err(Error::InvalidLength(format!(
                "public key must be 33 or 65 bytes, got {}",
                public_key.len()
            )));
        }

        let version = if self.testnet {
            TESTNET_P2PKH_VERSION
        } else {
            P2PKH_VERSION
        };
        Ok(base58::check_encode_prefixed(
            &version,
            &hash160(public_key),
        ))
    }

    /// Transparent P2SH address from a 20-byte script hash.
    pub fn p2sh(&self, script_hash: &[u8]) -> Result<String> {
        if script_hash.len() != 20 {
            return Err(Error::InvalidLength(format!(
                "script hash must be 20 bytes, got {}",
                script_hash.len()
            )));
        }

        let version = if self.testnet {
            TESTNET_P2SH_VERSION
        } else {
            P2SH_VERSION
        };
        Ok(base58::check_encode_prefixed(&version, script_hash))
    }

    fn known_version(&self, version: [u8; 2]) -> bool {
        if self.testnet {
            version == TESTNET_P2PKH_VERSION || version == TESTNET_P2SH_VERSION
        } else {
            version == P2PKH_VERSION || version == P2SH_VERSION
        }
    }
}

impl AddressCodec for ZcashCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.p2pkh(public_key)
    }

    fn validate(&self, address: &str) -> bool {
        if !address.starts_with('t') {
            return false;
        }

        let Ok(decoded) = base58::decode(address) else {
            return false;
        };
        // 2-byte version + 20-byte hash + 4-byte checksum
        if decoded.len() != 26 {
            return false;
        }

        let (payload, checksum) = decoded.split_at(22);
        if checksum != checksum4(payload) {
            return false;
        }

        self.known_version([payload[0], payload[1]])
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Zcash
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = base58::decode(address)?;
        let address_type = if [decoded[0], decoded[1]] == P2SH_VERSION
            || [decoded[0], decoded[1]] == TESTNET_P2SH_VERSION
        {
            AddressType::P2sh
        } else {
            AddressType::P2pkh
        };

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[2..22].to_vec(),
            chain_id: ChainId::Zcash,
            address_type,
            version: decoded[1],
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        if address.starts_with('z') {
            return Ok("shielded (not supported)".to_string());
        }
        let info = self.decode(address)?;
        Ok(match info.address_type {
            AddressType::P2sh => "P2SH (t3)".to_string(),
            _ => "P2PKH (t1)".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_G: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_p2pkh_starts_with_t1() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = ZcashCodec::new(false);
        let addr = codec.generate(&public_key).unwrap();
        assert!(addr.starts_with("t1"));
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "P2PKH (t1)");
        assert_eq!(
            codec.decode(&addr).unwrap().public_key,
            hash160(&public_key)
        );
    }

    #[test]
    fn test_p2sh_starts_with_t3() {
        let codec = ZcashCodec::new(false);
        let addr = codec.p2sh(&[0x42u8; 20]).unwrap();
        assert!(addr.starts_with("t3"));
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "P2SH (t3)");
    }

    #[test]
    fn test_network_separation_and_garbage() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let mainnet = ZcashCodec::new(false);
        let testnet = ZcashCodec::new(true);

        let addr = testnet.generate(&public_key).unwrap();
        assert!(testnet.validate(&addr));
        assert!(!mainnet.validate(&addr));

        assert!(!mainnet.validate("invalid"));
        assert!(!mainnet.validate("zs1shielded"));
        assert!(mainnet.p2sh(&[0u8; 32]).is_err());
    }
}
