//! Ethereum and EVM-compatible addresses with the EIP-55 checksum

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::keccak256;
use crate::error::{Error, Result};

/// Codec for Ethereum and every EVM chain that shares its address format.
#[derive(Debug, Clone, Copy)]
pub struct EvmCodec {
    chain: ChainId,
}

impl EvmCodec {
    /// The Ethereum mainnet codec.
    pub fn new() -> Self {
        Self {
            chain: ChainId::Ethereum,
        }
    }

    /// A codec reporting a specific EVM chain identifier.
    pub fn for_chain(chain: ChainId) -> Self {
        Self { chain }
    }

    /// Validate including the EIP-55 casing, not just the hex shape.
    pub fn validate_checksum(&self, address: &str) -> bool {
        if !self.validate(address) {
            return false;
        }
        let Ok(bytes) = hex::decode(address[2..].to_lowercase()) else {
            return false;
        };
        address == checksum_address(&bytes)
    }
}

impl Default for EvmCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Render 20 address bytes with the EIP-55 mixed-case checksum.
pub fn checksum_address(address: &[u8]) -> String {
    let hex_addr = hex::encode(address);
    let hash = keccak256(hex_addr.as_bytes());

    let mut out = String::with_capacity(2 + hex_addr.len());
    out.push_str("0x");
    for (i, c) in hex_addr.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0F
        };
        if c.is_ascii_lowercase() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl AddressCodec for EvmCodec {
    /// Accepts a 64-byte raw or 65-byte `0x04`-prefixed uncompressed key.
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        let key = match public_key.len() {
            64 => public_key,
            65 => {
                if public_key[0] != 0x04 {
                    return Err(Error::InvalidEncoding(
                        "uncompressed public key must start with 0x04".into(),
                    ));
                }
                &public_key[1..]
            }
            33 => {
                return Err(Error::Unsupported(
                    "compressed public keys must be decompressed first".into(),
                ))
            }
            other => {
                return Err(Error::InvalidLength(format!(
                    "public key must be 64 or 65 bytes, got {}",
                    other
                )))
            }
        };

        let hash = keccak256(key);
        Ok(checksum_address(&hash[12..]))
    }

    fn validate(&self, address: &str) -> bool {
        let Some(hex_part) = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
        else {
            return false;
        };
        hex_part.len() == 40 && hex::decode(hex_part).is_ok()
    }

    fn chain_id(&self) -> ChainId {
        self.chain
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let bytes = hex::decode(address[2..].to_lowercase())
            .map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?;

        Ok(AddressInfo {
            address: address.to_string(),
            public_key: bytes,
            chain_id: self.chain,
            address_type: AddressType::Ethereum,
            version: 0,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        Ok("EIP-55".to_string())
    }
}
