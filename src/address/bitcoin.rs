//! Bitcoin addresses: P2PKH, P2SH, and the SegWit family

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::{hash160, sha256};
use crate::encoding::base58;
use crate::encoding::bech32;
use crate::error::{Error, Result};

/// Mainnet P2PKH version byte (addresses start with `1`).
pub const P2PKH_VERSION: u8 = 0x00;
/// Mainnet P2SH version byte (addresses start with `3`).
pub const P2SH_VERSION: u8 = 0x05;
/// Testnet P2PKH version byte.
pub const TESTNET_P2PKH_VERSION: u8 = 0x6F;
/// Testnet P2SH version byte.
pub const TESTNET_P2SH_VERSION: u8 = 0xC4;

const MAINNET_HRP: &str = "bc";
const TESTNET_HRP: &str = "tb";

/// Bitcoin address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinCodec {
    testnet: bool,
}

impl BitcoinCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    fn hrp(&self) -> &'static str {
        if self.testnet {
            TESTNET_HRP
        } else {
            MAINNET_HRP
        }
    }

    /// Pay-to-Public-Key-Hash from a 33- or 65-byte public key.
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

    /// Pay-to-Script-Hash from a redeem script.
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

    /// Native SegWit v0 from a compressed public key.
    pub fn p2wpkh(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "p2wpkh requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }
        bech32::segwit_encode(self.hrp(), 0, &hash160(public_key))
    }

    /// Native SegWit v0 script address: program is SHA-256 of the script.
    pub fn p2wsh(&self, witness_script: &[u8]) -> Result<String> {
        if witness_script.is_empty() {
            return Err(Error::InvalidLength("empty witness script".into()));
        }
        bech32::segwit_encode(self.hrp(), 0, &sha256(witness_script))
    }

    /// Taproot (SegWit v1, Bech32m) from a 32-byte x-only key.
    pub fn p2tr(&self, taproot_key: &[u8]) -> Result<String> {
        if taproot_key.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "p2tr requires a 32-byte x-only key, got {}",
                taproot_key.len()
            )));
        }
        bech32::segwit_encode(self.hrp(), 1, taproot_key)
    }

    fn is_segwit_form(address: &str) -> bool {
        let lower = address.to_lowercase();
        lower.starts_with("bc1") || lower.starts_with("tb1")
    }
}

impl AddressCodec for BitcoinCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.p2pkh(public_key)
    }

    fn validate(&self, address: &str) -> bool {
        if Self::is_segwit_form(address) {
            return matches!(bech32::segwit_decode(address), Ok((hrp, _, _)) if hrp == self.hrp());
        }

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
        ChainId::Bitcoin
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if Self::is_segwit_form(address) {
            let (hrp, version, program) = bech32::segwit_decode(address)?;
            if hrp != self.hrp() {
                return Err(Error::InvalidAddress(format!(
                    "hrp {} does not match network",
                    hrp
                )));
            }
            return Ok(AddressInfo {
                address: address.to_string(),
                public_key: program,
                chain_id: ChainId::Bitcoin,
                address_type: AddressType::Segwit,
                version,
            });
        }

        let (version, payload) = base58::check_decode(address)?;
        let address_type = match version {
            P2PKH_VERSION | TESTNET_P2PKH_VERSION => AddressType::P2pkh,
            P2SH_VERSION | TESTNET_P2SH_VERSION => AddressType::P2sh,
            _ => return Err(Error::InvalidAddress(format!("version {:#04x}", version))),
        };

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: payload,
            chain_id: ChainId::Bitcoin,
            address_type,
            version,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let info = self.decode(address)?;
        let label = match info.address_type {
            AddressType::P2pkh => "P2PKH",
            AddressType::P2sh => "P2SH",
            AddressType::Segwit => match (info.version, info.public_key.len()) {
                (0, 20) => "P2WPKH",
                (0, 32) => "P2WSH",
                (1, 32) => "P2TR",
                _ => "SegWit",
            },
            _ => "unknown",
        };
        Ok(label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_G: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_p2pkh_vector() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = BitcoinCodec::new(false);
        let addr = codec.p2pkh(&public_key).unwrap();
        assert_eq!(addr, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "P2PKH");
    }

    #[test]
    fn test_p2wpkh_vector() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = BitcoinCodec::new(false);
        let addr = codec.p2wpkh(&public_key).unwrap();
        assert_eq!(addr, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "P2WPKH");
    }

    #[test]
    fn test_p2tr_is_bech32m() {
        let codec = BitcoinCodec::new(false);
        let addr = codec.p2tr(&[0x55u8; 32]).unwrap();
        assert!(addr.starts_with("bc1p"));
        assert_eq!(codec.address_type(&addr).unwrap(), "P2TR");
    }

    #[test]
    fn test_decode_round_trip() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = BitcoinCodec::new(false);
        let addr = codec.p2pkh(&public_key).unwrap();

        let info = codec.decode(&addr).unwrap();
        assert_eq!(info.public_key, hash160(&public_key));
        assert_eq!(info.version, P2PKH_VERSION);
    }

    #[test]
    fn test_network_separation() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let mainnet = BitcoinCodec::new(false);
        let testnet = BitcoinCodec::new(true);

        let main_addr = mainnet.p2pkh(&public_key).unwrap();
        let test_addr = testnet.p2pkh(&public_key).unwrap();
        assert!(!testnet.validate(&main_addr));
        assert!(!mainnet.validate(&test_addr));
        assert!(testnet.validate(&test_addr));

        let test_segwit = testnet.p2wpkh(&public_key).unwrap();
        assert!(test_segwit.starts_with("tb1"));
        assert!(!mainnet.validate(&test_segwit));
    }

    #[test]
    fn test_invalid_input_does_not_panic() {
        let codec = BitcoinCodec::new(false);
        assert!(!codec.validate("invalid"));
        assert!(!codec.validate(""));
        assert!(codec.p2pkh(&[0u8; 10]).is_err());
    }
}
