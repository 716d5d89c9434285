//! Monero addresses: dual-key payloads under block Base58

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::keccak256;
use crate::encoding::monero_base58;
use crate::error::{Error, Result};

/// Mainnet standard address network byte (renders as `4…`).
pub const MAINNET_STANDARD: u8 = 0x12;
/// Mainnet integrated address network byte.
pub const MAINNET_INTEGRATED: u8 = 0x13;
/// Mainnet subaddress network byte (renders as `8…`).
pub const MAINNET_SUBADDRESS: u8 = 0x2A;
/// Testnet standard address network byte.
pub const TESTNET_STANDARD: u8 = 0x35;
/// Testnet integrated address network byte.
pub const TESTNET_INTEGRATED: u8 = 0x36;
/// Testnet subaddress network byte.
pub const TESTNET_SUBADDRESS: u8 = 0x3F;
/// Stagenet standard address network byte.
pub const STAGENET_STANDARD: u8 = 0x18;
/// Stagenet integrated address network byte.
pub const STAGENET_INTEGRATED: u8 = 0x19;
/// Stagenet subaddress network byte.
pub const STAGENET_SUBADDRESS: u8 = 0x24;

/// Monero address codec.
///
/// Input to `generate` is the 64-byte concatenation of the spend and view
/// public keys; Monero addresses cannot be formed from a single key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoneroCodec {
    testnet: bool,
}

impl MoneroCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    /// Standard address from separate spend and view public keys.
    pub fn generate_standard(&self, spend_key: &[u8], view_key: &[u8]) -> Result<String> {
        let network = if self.testnet {
            TESTNET_STANDARD
        } else {
            MAINNET_STANDARD
        };
        self.encode(network, spend_key, view_key)
    }

    /// Subaddress from separate spend and view public keys.
    pub fn generate_subaddress(&self, spend_key: &[u8], view_key: &[u8]) -> Result<String> {
        let network = if self.testnet {
            TESTNET_SUBADDRESS
        } else {
            MAINNET_SUBADDRESS
        };
        self.encode(network, spend_key, view_key)
    }

    fn encode(&self, network: u8, spend_key: &[u8], view_key: &[u8]) -> Result<String> {
        if spend_key.len() != 32 || view_key.len() != 32 {
            return Err(Error::InvalidLength(
                "spend and view keys must each be 32 bytes".into(),
            ));
        }

        let mut payload = Vec::with_capacity(69);
        payload.push(network);
        payload.extend_from_slice(spend_key);
        payload.extend_from_slice(view_key);

        let checksum = keccak256(&payload);
        payload.extend_from_slice(&checksum[..4]);

        Ok(monero_base58::encode(&payload))
    }

    fn network_label(network: u8) -> Option<&'static str> {
        match network {
            MAINNET_STANDARD => Some("Mainnet Standard"),
            MAINNET_INTEGRATED => Some("Mainnet Integrated"),
            MAINNET_SUBADDRESS => Some("Mainnet Subaddress"),
            TESTNET_STANDARD => Some("Testnet Standard"),
            TESTNET_INTEGRATED => Some("Testnet Integrated"),
            TESTNET_SUBADDRESS => Some("Testnet Subaddress"),
            STAGENET_STANDARD => Some("Stagenet Standard"),
            STAGENET_INTEGRATED => Some("Stagenet Integrated"),
            STAGENET_SUBADDRESS => Some("Stagenet Subaddress"),
            _ => None,
        }
    }

    fn network_matches(&self, network: u8) -> bool {
        let testnet = matches!(
            network,
            TESTNET_STANDARD | TESTNET_INTEGRATED | TESTNET_SUBADDRESS
        );
        let known = Self::network_label(network).is_some();
        known && testnet == self.testnet
    }
}

impl AddressCodec for MoneroCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 64 {
            return Err(Error::InvalidLength(format!(
                "monero requires 64 bytes (spend ‖ view), got {}",
                public_key.len()
            )));
        }
        self.generate_standard(&public_key[..32], &public_key[32..])
    }

    fn validate(&self, address: &str) -> bool {
        // 95 chars for standard/subaddress, 106 for integrated
        if address.len() != 95 && address.len() != 106 {
            return false;
        }

        let Ok(decoded) = monero_base58::decode(address) else {
            return false;
        };
        if decoded.len() != 69 && decoded.len() != 77 {
            return false;
        }
        if !self.network_matches(decoded[0]) {
            return false;
        }

        let (payload, checksum) = decoded.split_at(decoded.len() - 4);
        checksum == &keccak256(payload)[..4]
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Monero
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = monero_base58::decode(address)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: decoded[1..65].to_vec(),
            chain_id: ChainId::Monero,
            address_type: AddressType::Base58,
            version: decoded[0],
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let decoded = monero_base58::decode(address)
            .map_err(|_| Error::InvalidAddress(address.to_string()))?;
        if decoded.is_empty() {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        Ok(Self::network_label(decoded[0]).unwrap_or("Unknown").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_address_shape() {
        let codec = MoneroCodec::new(false);
        let keys = [0x77u8; 64];
        let addr = codec.generate(&keys).unwrap();
        assert_eq!(addr.len(), 95);
        assert!(addr.starts_with('4'));
        assert!(codec.validate(&addr));
        assert_eq!(codec.address_type(&addr).unwrap(), "Mainnet Standard");
    }

    #[test]
    fn test_subaddress_prefix() {
        let codec = MoneroCodec::new(false);
        let addr = codec
            .generate_subaddress(&[1u8; 32], &[2u8; 32])
            .unwrap();
        assert_eq!(addr.len(), 95);
        assert!(addr.starts_with('8'));
        assert_eq!(codec.address_type(&addr).unwrap(), "Mainnet Subaddress");
    }

    #[test]
    fn test_decode_returns_both_keys() {
        let codec = MoneroCodec::new(false);
        let addr = codec.generate_standard(&[1u8; 32], &[2u8; 32]).unwrap();
        let info = codec.decode(&addr).unwrap();
        assert_eq!(&info.public_key[..32], [1u8; 32]);
        assert_eq!(&info.public_key[32..], [2u8; 32]);
        assert_eq!(info.version, MAINNET_STANDARD);
    }

    #[test]
    fn test_network_separation_and_corruption() {
        let mainnet = MoneroCodec::new(false);
        let testnet = MoneroCodec::new(true);

        let test_addr = testnet.generate(&[5u8; 64]).unwrap();
        assert!(testnet.validate(&test_addr));
        assert!(!mainnet.validate(&test_addr));

        let addr = mainnet.generate(&[5u8; 64]).unwrap();
        let mut corrupted = addr.into_bytes();
        corrupted[94] = if corrupted[94] == b'2' { b'3' } else { b'2' };
        assert!(!mainnet.validate(&String::from_utf8(corrupted).unwrap()));
        assert!(!mainnet.validate("invalid"));
    }
}
