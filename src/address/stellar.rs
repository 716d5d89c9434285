//! Stellar addresses: Base32 with a CRC-16/XModem checksum

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::crc16_xmodem;
use crate::encoding::base32::{self, Alphabet};
use crate::error::{Error, Result};

/// Version byte for account addresses; renders as a leading `G`.
pub const ACCOUNT_VERSION: u8 = 6 << 3;

const ADDRESS_LEN: usize = 56;

/// Stellar address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct StellarCodec;

impl StellarCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AddressCodec for StellarCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "stellar requires a 32-byte ed25519 public key, got {}",
                public_key.len()
            )));
        }

        let mut payload = Vec::with_capacity(35);
        payload.push(ACCOUNT_VERSION);
        payload.extend_from_slice(public_key);

        // CRC-16 appended little-endian
        let checksum = crc16_xmodem(&payload);
        payload.push((checksum & 0xFF) as u8);
        payload.push((checksum >> 8) as u8);

        Ok(base32::encode(&payload, Alphabet::Rfc4648Upper))
    }

    fn validate(&self, address: &str) -> bool {
        if address.len() != ADDRESS_LEN || !address.starts_with('G') {
            return false;
        }

        let Ok(decoded) = base32::decode(address, Alphabet::Rfc4648Upper) else {
            return false;
        };
        if decoded.len() != 35 || decoded[0] != ACCOUNT_VERSION {
            return false;
        }

        let expected = crc16_xmodem(&decoded[..33]);
        let actual = decoded[33] as u16 | (decoded[34] as u16) << 8;
        expected == actual
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Stellar
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = base32::decode(address, Alphabet::Rfc4648Upper)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[1..33].to_vec(),
            chain_id: ChainId::Stellar,
            address_type: AddressType::Base32,
            version: decoded[0],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape_and_round_trip() {
        let mut public_key = [0u8; 32];
        public_key[31] = 1;

        let codec = StellarCodec::new();
        let addr = codec.generate(&public_key).unwrap();
        assert_eq!(addr.len(), 56);
        assert!(addr.starts_with('G'));
        assert!(codec.validate(&addr));

        let info = codec.decode(&addr).unwrap();
        assert_eq!(info.public_key, public_key);
        assert_eq!(info.version, ACCOUNT_VERSION);
    }

    #[test]
    fn test_known_account_validates() {
        // Stellar's documented master account of the test network
        let addr = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
        assert!(StellarCodec::new().validate(addr));
        let info = StellarCodec::new().decode(addr).unwrap();
        assert_eq!(info.public_key.len(), 32);
    }

    #[test]
    fn test_corruption_rejected() {
        let codec = StellarCodec::new();
        let addr = codec.generate(&[7u8; 32]).unwrap();
        let mut corrupted = addr.into_bytes();
        corrupted[30] = if corrupted[30] == b'A' { b'B' } else { b'A' };
        assert!(!codec.validate(&String::from_utf8(corrupted).unwrap()));
        assert!(!codec.validate("invalid"));
    }

    #[test]
    fn test_key_length_enforced() {
        assert!(StellarCodec::new().generate(&[0u8; 33]).is_err());
    }
}
