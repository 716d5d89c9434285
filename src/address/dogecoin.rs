//! Dogecoin addresses: Base58Check with Dogecoin version bytes

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::hash160;
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Mainnet P2PKH version byte (addresses start with `D`).
pub const P2PKH_VERSION: u8 = 0x1E;
/// Mainnet P2SH version byte.
pub const P2SH_VERSION: u8 = 0x16;
/// Testnet P2PKH version byte.
pub const TESTNET_P2PKH_VERSION: u8 = 0x71;
/// Testnet P2SH version byte.
pub const TESTNET_P2SH_VERSION: u8 = 0xC4;

/// Dogecoin address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct DogecoinCodec {
    testnet: bool,
}

impl DogecoinCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    /// Pay-to-Public-Key-Hash address.
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
        Ok(base58::check_encode(version, &hash160(public_key)))
    }

    /// Pay-to-Script-Hash address.
    pub fn p2sh(&self, redeem_script: &[u8]) -> Result<String> {
        if redeem_script.is_empty() {
            return Err(Error::InvalidLength("empty redeem script".into()));
        }

        let version = if self.testnet {
            TESTNET_P2SH_VERSION
        } else {
            P2SH_VERSION
        };
        Ok(base58::check_encode(version, &hash160(redeem_script)))
    }
}

impl AddressCodec for DogecoinCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.p2pkh(public_key)
    }

    fn validate(&self, address: &str) -> bool {
        match base58::check_decode(address) {
            Ok((version, payload)) if payload.len() == 20 => match version {
                P2PKH_VERSION | P2SH_VERSION => !self.testnet,
                TESTNET_P2PKH_VERSION | TESTNET_P2SH_VERSION => self.testnet,
                _ => false,
            },
            _ => false,
        }
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Dogecoin
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let (version, payload) = base58::check_decode(address)?;
        let address_type = match version {
            P2PKH_VERSION | TESTNET_P2PKH_VERSION => AddressType::P2pkh,
            P2SH_VERSION | TESTNET_P2SH_VERSION => AddressType::P2sh,
            _ => return Err(Error::InvalidAddress(format!("version {:#04x}", version))),
        };

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: payload,
            chain_id: ChainId::Dogecoin,
            address_type,
            version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_G: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_p2pkh_starts_with_d() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = DogecoinCodec::new(false);
        let addr = codec.generate(&public_key).unwrap();
        assert!(addr.starts_with('D'));
        assert!(codec.validate(&addr));
        assert_eq!(
            codec.decode(&addr).unwrap().public_key,
            hash160(&public_key)
        );
    }

    #[test]
    fn test_network_separation() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let mainnet = DogecoinCodec::new(false);
        let testnet = DogecoinCodec::new(true);
        let addr = testnet.generate(&public_key).unwrap();
        assert!(testnet.validate(&addr));
        assert!(!mainnet.validate(&addr));
    }

    #[test]
    fn test_garbage_rejected() {
        let codec = DogecoinCodec::new(false);
        assert!(!codec.validate("invalid"));
        // A Bitcoin address has the wrong version byte
        assert!(!codec.validate("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"));
    }
}
