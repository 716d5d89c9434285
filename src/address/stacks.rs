//! Stacks addresses: c32check over `hash160(pub33)`

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::hash160;
use crate::encoding::c32;
use crate::error::{Error, Result};

/// Mainnet single-sig version (`SP…`).
pub const MAINNET_SINGLE_SIG: u8 = 22;
/// Mainnet multi-sig version (`SM…`).
pub const MAINNET_MULTI_SIG: u8 = 20;
/// Testnet single-sig version (`ST…`).
pub const TESTNET_SINGLE_SIG: u8 = 26;
/// Testnet multi-sig version (`SN…`).
pub const TESTNET_MULTI_SIG: u8 = 21;

/// Stacks address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct StacksCodec {
    testnet: bool,
}

impl StacksCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    /// Generate with an explicit version byte.
    pub fn generate_with_version(&self, public_key: &[u8], version: u8) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "stacks requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }
        c32::check_encode(version, &hash160(public_key))
    }
}

impl AddressCodec for StacksCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        let version = if self.testnet {
            TESTNET_SINGLE_SIG
        } else {
            MAINNET_SINGLE_SIG
        };
        self.generate_with_version(public_key, version)
    }

    fn validate(&self, address: &str) -> bool {
        let Ok((version, payload)) = c32::check_decode(address) else {
            return false;
        };
        if payload.len() != 20 {
            return false;
        }
        if self.testnet {
            version == TESTNET_SINGLE_SIG || version == TESTNET_MULTI_SIG
        } else {
            version == MAINNET_SINGLE_SIG || version == MAINNET_MULTI_SIG
        }
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Stacks
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        let (version, payload) = c32::check_decode(address)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: payload,
            chain_id: ChainId::Stacks,
            address_type: AddressType::Base32,
            version,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let (version, _) = c32::check_decode(address)
            .map_err(|_| Error::InvalidAddress(address.to_string()))?;
        let label = match version {
            MAINNET_SINGLE_SIG => "Mainnet Single-sig (P)",
            MAINNET_MULTI_SIG => "Mainnet Multi-sig (M)",
            TESTNET_SINGLE_SIG => "Testnet Single-sig (T)",
            TESTNET_MULTI_SIG => "Testnet Multi-sig (N)",
            _ => "unknown",
        };
        Ok(label.to_string())
    }
}
