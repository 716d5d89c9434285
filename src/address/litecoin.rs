//! Litecoin addresses: the Bitcoin pattern with Litecoin prefixes

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::hash160;
use crate::encoding::base58;
use crate::encoding::bech32;
use crate::error::{Error, Result};

/// Mainnet P2PKH version byte (addresses start with `L`).
pub const P2PKH_VERSION: u8 = 0x30;
/// Mainnet P2SH version byte (addresses start with `M`).
pub const P2SH_VERSION: u8 = 0x32;
/// Testnet P2PKH version byte.
pub const TESTNET_P2PKH_VERSION: u8 = 0x6F;
/// Testnet P2SH version byte.
pub const TESTNET_P2SH_VERSION: u8 = 0x3A;

const MAINNET_HRP: &str = "ltc";
const TESTNET_HRP: &str = "tltc";

/// Litecoin address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct LitecoinCodec {
    testnet: bool,
}

impl LitecoinCodec {
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

    /// Native SegWit v0 address.
    pub fn p2wpkh(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "p2wpkh requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }
        bech32::segwit_encode(self.hrp(), 0, &hash160(public_key))
    }
}

impl AddressCodec for LitecoinCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.p2pkh(public_key)
    }

    fn validate(&self, address: &str) -> bool {
        let lower = address.to_lowercase();
        if lower.starts_with("ltc1") || lower.starts_with("tltc1") {
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
        ChainId::Litecoin
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let lower = address.to_lowercase();
        if lower.starts_with("ltc1") || lower.starts_with("tltc1") {
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
                chain_id: ChainId::Litecoin,
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
            chain_id: ChainId::Litecoin,
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
    fn test_p2pkh_starts_with_l() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = LitecoinCodec::new(false);
        let addr = codec.generate(&public_key).unwrap();
        assert!(addr.starts_with('L'));
        assert!(codec.validate(&addr));

        let info = codec.decode(&addr).unwrap();
        assert_eq!(info.public_key, hash160(&public_key));
        assert_eq!(info.address_type, AddressType::P2pkh);
    }

    #[test]
    fn test_p2sh_starts_with_m() {
        let codec = LitecoinCodec::new(false);
        let addr = codec.p2sh(&[0x51u8, 0xAE]).unwrap();
        assert!(addr.starts_with('M'));
        assert!(codec.validate(&addr));
    }

    #[test]
    fn test_segwit() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = LitecoinCodec::new(false);
        let addr = codec.p2wpkh(&public_key).unwrap();
        assert!(addr.starts_with("ltc1"));
        assert!(codec.validate(&addr));
        assert_eq!(
            codec.decode(&addr).unwrap().public_key,
            hash160(&public_key)
        );
    }

    #[test]
    fn test_network_separation() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let mainnet = LitecoinCodec::new(false);
        let testnet = LitecoinCodec::new(true);
        let addr = mainnet.generate(&public_key).unwrap();
        assert!(!testnet.validate(&addr));
        assert!(!mainnet.validate("invalid"));
    }
}
