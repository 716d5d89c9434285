//! Polkadot / Substrate addresses in SS58 form

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::encoding::ss58;
use crate::error::{Error, Result};

/// Polkadot mainnet prefix.
pub const POLKADOT_PREFIX: u16 = 0;
/// Kusama prefix.
pub const KUSAMA_PREFIX: u16 = 2;
/// Generic Substrate prefix.
pub const SUBSTRATE_PREFIX: u16 = 42;

/// SS58 address codec, parameterized by network prefix.
#[derive(Debug, Clone, Copy)]
pub struct PolkadotCodec {
    prefix: u16,
}

impl PolkadotCodec {
    /// The Polkadot mainnet codec (prefix 0).
    pub fn new() -> Self {
        Self {
            prefix: POLKADOT_PREFIX,
        }
    }

    /// A codec for another Substrate network prefix.
    pub fn with_prefix(prefix: u16) -> Self {
        Self { prefix }
    }

    /// The network prefix this codec emits.
    pub fn prefix(&self) -> u16 {
        self.prefix
    }
}

impl Default for PolkadotCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressCodec for PolkadotCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        ss58::encode(self.prefix, public_key)
    }

    fn validate(&self, address: &str) -> bool {
        matches!(ss58::decode(address), Ok((prefix, _)) if prefix == self.prefix)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Polkadot
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let (prefix, public_key) = ss58::decode(address)?;
        if prefix != self.prefix {
            return Err(Error::InvalidAddress(format!(
                "ss58 prefix {} does not match network {}",
                prefix, self.prefix
            )));
        }

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: public_key.to_vec(),
            chain_id: ChainId::Polkadot,
            address_type: AddressType::Ss58,
            version: prefix as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let key = [0x11u8; 32];
        let codec = PolkadotCodec::new();
        let addr = codec.generate(&key).unwrap();
        assert!(codec.validate(&addr));
        assert_eq!(codec.decode(&addr).unwrap().public_key, key);
        // Polkadot mainnet addresses start with '1'
        assert!(addr.starts_with('1'));
    }

    #[test]
    fn test_prefix_separation() {
        let key = [0x22u8; 32];
        let polkadot = PolkadotCodec::new();
        let kusama = PolkadotCodec::with_prefix(KUSAMA_PREFIX);

        let kusama_addr = kusama.generate(&key).unwrap();
        assert!(kusama.validate(&kusama_addr));
        assert!(!polkadot.validate(&kusama_addr));
    }

    #[test]
    fn test_generic_substrate_prefix() {
        let codec = PolkadotCodec::with_prefix(SUBSTRATE_PREFIX);
        let addr = codec.generate(&[0x33u8; 32]).unwrap();
        // Prefix 42 renders with a leading '5'
        assert!(addr.starts_with('5'));
        assert!(codec.validate(&addr));
    }

    #[test]
    fn test_garbage_rejected() {
        let codec = PolkadotCodec::new();
        assert!(!codec.validate("invalid"));
        assert!(codec.generate(&[0u8; 20]).is_err());
    }
}
