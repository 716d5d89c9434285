//! Cosmos-SDK family addresses: Bech32 over `hash160(pub33)`

use bech32::Variant;

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::hash160;
use crate::encoding::bech32;
use crate::error::{Error, Result};

/// Codec for Cosmos-SDK chains, parameterized by HRP.
#[derive(Debug, Clone)]
pub struct CosmosCodec {
    hrp: &'static str,
    chain: ChainId,
}

impl CosmosCodec {
    /// The Cosmos Hub codec (`cosmos1…`).
    pub fn new() -> Self {
        Self {
            hrp: "cosmos",
            chain: ChainId::Cosmos,
        }
    }

    /// A Cosmos-SDK codec with a custom HRP.
    pub fn with_hrp(hrp: &'static str, chain: ChainId) -> Self {
        Self { hrp, chain }
    }

    /// Binance Chain BEP-2 (`bnb1…`).
    pub fn binance_bep2() -> Self {
        Self::with_hrp("bnb", ChainId::BinanceBep2)
    }

    /// Sei (`sei1…`).
    pub fn sei() -> Self {
        Self::with_hrp("sei", ChainId::Sei)
    }

    /// The HRP this codec emits.
    pub fn hrp(&self) -> &'static str {
        self.hrp
    }

    fn account_hash(&self, public_key: &[u8]) -> Result<[u8; 20]> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "{} requires a 33-byte compressed public key, got {}",
                self.hrp,
                public_key.len()
            )));
        }
        Ok(hash160(public_key))
    }

    /// The validator-operator address (`…valoper1…`).
    pub fn generate_validator(&self, public_key: &[u8]) -> Result<String> {
        let hash = self.account_hash(public_key)?;
        bech32::encode(&format!("{}valoper", self.hrp), &hash, Variant::Bech32)
    }

    /// The consensus-node address (`…valcons1…`).
    pub fn generate_consensus(&self, public_key: &[u8]) -> Result<String> {
        let hash = self.account_hash(public_key)?;
        bech32::encode(&format!("{}valcons", self.hrp), &hash, Variant::Bech32)
    }

    fn hrp_matches(&self, hrp: &str) -> bool {
        hrp == self.hrp
            || hrp == format!("{}valoper", self.hrp)
            || hrp == format!("{}valcons", self.hrp)
    }
}

impl Default for CosmosCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressCodec for CosmosCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        let hash = self.account_hash(public_key)?;
        bech32::encode(self.hrp, &hash, Variant::Bech32)
    }

    fn validate(&self, address: &str) -> bool {
        matches!(bech32::decode(address), Ok((hrp, _, _)) if self.hrp_matches(&hrp))
    }

    fn chain_id(&self) -> ChainId {
        self.chain
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let (hrp, data, _) = bech32::decode(address)?;
        if !self.hrp_matches(&hrp) {
            return Err(Error::InvalidAddress(format!(
                "expected hrp {}, got {}",
                self.hrp, hrp
            )));
        }

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: data,
            chain_id: self.chain,
            address_type: AddressType::Bech32,
            version: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_G: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_generate_and_validate() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = CosmosCodec::new();
        let addr = codec.generate(&public_key).unwrap();
        assert!(addr.starts_with("cosmos1"));
        assert!(codec.validate(&addr));

        let info = codec.decode(&addr).unwrap();
        assert_eq!(info.public_key, hash160(&public_key));
    }

    #[test]
    fn test_validator_and_consensus_variants() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let codec = CosmosCodec::new();

        let valoper = codec.generate_validator(&public_key).unwrap();
        assert!(valoper.starts_with("cosmosvaloper1"));
        assert!(codec.validate(&valoper));

        let valcons = codec.generate_consensus(&public_key).unwrap();
        assert!(valcons.starts_with("cosmosvalcons1"));
        assert!(codec.validate(&valcons));
    }

    #[test]
    fn test_hrp_separation() {
        let public_key = hex::decode(COMPRESSED_G).unwrap();
        let cosmos = CosmosCodec::new();
        let bnb = CosmosCodec::binance_bep2();
        let sei = CosmosCodec::sei();

        let bnb_addr = bnb.generate(&public_key).unwrap();
        assert!(bnb_addr.starts_with("bnb1"));
        assert!(!cosmos.validate(&bnb_addr));
        assert!(bnb.validate(&bnb_addr));

        let sei_addr = sei.generate(&public_key).unwrap();
        assert!(sei_addr.starts_with("sei1"));
        assert_eq!(sei.chain_id(), ChainId::Sei);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(!CosmosCodec::new().validate("invalid"));
        assert!(CosmosCodec::new().generate(&[0u8; 32]).is_err());
    }
}
