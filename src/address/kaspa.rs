//! Kaspa addresses: Bech32 over a version byte and 32-byte payload

use bech32::Variant;

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::encoding::bech32;
use crate::error::{Error, Result};

/// Pay-to-Public-Key (ECDSA x-coordinate).
pub const TYPE_P2PK: u8 = 0x00;
/// Alternative P2PK marker.
pub const TYPE_P2PK_ALT: u8 = 0x01;
/// Pay-to-Script-Hash.
pub const TYPE_P2SH: u8 = 0x08;

/// Kaspa address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct KaspaCodec {
    testnet: bool,
}

impl KaspaCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    fn hrp(&self) -> &'static str {
        if self.testnet {
            "kaspatest"
        } else {
            "kaspa"
        }
    }

    /// P2SH address from a 32-byte script hash.
    pub fn generate_p2sh(&self, script_hash: &[u8]) -> Result<String> {
        if script_hash.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "script hash must be 32 bytes, got {}",
                script_hash.len()
            )));
        }
        self.encode(TYPE_P2SH, script_hash)
    }

    fn encode(&self, version: u8, payload: &[u8]) -> Result<String> {
        let mut data = Vec::with_capacity(33);
        data.push(version);
        data.extend_from_slice(payload);
        bech32::encode(self.hrp(), &data, Variant::Bech32)
    }
}

impl AddressCodec for KaspaCodec {
    /// P2PK address: the x coordinate of a 33-byte compressed public key.
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "kaspa requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }
        self.encode(TYPE_P2PK, &public_key[1..])
    }

    fn validate(&self, address: &str) -> bool {
        let Ok((hrp, data, _)) = bech32::decode(address) else {
            return false;
        };
        hrp == self.hrp()
            && data.len() == 33
            && matches!(data[0], TYPE_P2PK | TYPE_P2PK_ALT | TYPE_P2SH)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Kaspa
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let (_, data, _) = bech32::decode(address)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: data[1..].to_vec(),
            chain_id: ChainId::Kaspa,
            address_type: AddressType::Bech32,
            version: data[0],
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let info = self.decode(address)?;
        let label = match info.version {
            TYPE_P2PK => "P2PK (ECDSA)",
            TYPE_P2PK_ALT => "P2PK (ECDSA alternative)",
            TYPE_P2SH => "P2SH",
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
    fn test_p2pk_round_trip() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = KaspaCodec::new(false);
        let addr = codec.generate(&public_key).unwrap();
        assert!(addr.starts_with("kaspa1"));
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "P2PK (ECDSA)");

        // Payload is the x coordinate, not the full compressed key
        let info = codec.decode(&addr).unwrap();
        assert_eq!(info.public_key, public_key[1..]);
    }

    #[test]
    fn test_p2sh() {
        let codec = KaspaCodec::new(false);
        let addr = codec.generate_p2sh(&[0xAAu8; 32]).unwrap();
        assert_eq!(codec.address_type(&addr).unwrap(), "P2SH");
        assert!(codec.generate_p2sh(&[0u8; 20]).is_err());
    }

    #[test]
    fn test_network_separation() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let testnet = KaspaCodec::new(true);
        let addr = testnet.generate(&public_key).unwrap();
        assert!(addr.starts_with("kaspatest1"));
        assert!(!KaspaCodec::new(false).validate(&addr));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!KaspaCodec::new(false).validate("invalid"));
        assert!(KaspaCodec::new(false).generate(&[0u8; 32]).is_err());
    }
}
