//! Bitcoin Cash addresses in CashAddr form

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::hash160;
use crate::encoding::cashaddr;
use crate::error::{Error, Result};

/// P2PKH type nibble (version byte 0x00).
pub const TYPE_P2PKH: u8 = 0x00;
/// P2SH type nibble (version byte 0x08).
pub const TYPE_P2SH: u8 = 0x08;

/// Bitcoin Cash address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinCashCodec {
    testnet: bool,
}

impl BitcoinCashCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    fn prefix(&self) -> &'static str {
        if self.testnet {
            "bchtest"
        } else {
            "bitcoincash"
        }
    }

    /// P2SH address from a 20-byte script hash.
    pub fn p2sh(&self, script_hash: &[u8]) -> Result<String> {
        if script_hash.len() != 20 {
            return Err(Error::InvalidLength(format!(
                "script hash must be 20 bytes, got {}",
                script_hash.len()
            )));
        }
        cashaddr::encode(self.prefix(), TYPE_P2SH, script_hash)
    }
}

impl AddressCodec for BitcoinCashCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 && public_key.len() != 65 {
            return Err(Error::InvalidLength(format!(
                "public key must be 33 or 65 bytes, got {}",
                public_key.len()
            )));
        }
        cashaddr::encode(self.prefix(), TYPE_P2PKH, &hash160(public_key))
    }

    fn validate(&self, address: &str) -> bool {
        matches!(cashaddr::decode(address), Ok((prefix, _, _)) if prefix == self.prefix())
    }

    fn chain_id(&self) -> ChainId {
        ChainId::BitcoinCash
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let (prefix, version, hash) = cashaddr::decode(address)?;
        if prefix != self.prefix() {
            return Err(Error::InvalidAddress(format!(
                "prefix {} does not match network",
                prefix
            )));
        }

        let address_type = if version >> 3 & 1 == 1 {
            AddressType::P2sh
        } else {
            AddressType::P2pkh
        };

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: hash,
            chain_id: ChainId::BitcoinCash,
            address_type,
            version,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let info = self.decode(address)?;
        Ok(match info.address_type {
            AddressType::P2sh => "P2SH".to_string(),
            _ => "P2PKH".to_string(),
        })
    }
}
