//! Cardano Shelley addresses: Blake2b-224 key hashes under Bech32

use bech32::Variant;

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::blake2b_224;
use crate::encoding::bech32;
use crate::error::{Error, Result};

// Address type nibbles (upper half of the header byte)
const TYPE_BASE: u8 = 0x00;
const TYPE_ENTERPRISE: u8 = 0x06;
const TYPE_REWARD: u8 = 0x0E;

// Network nibbles (lower half of the header byte)
const NET_MAINNET: u8 = 0x01;
const NET_TESTNET: u8 = 0x00;

const KEY_HASH_LEN: usize = 28;

/// Cardano address codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardanoCodec {
    testnet: bool,
}

impl CardanoCodec {
    pub fn new(testnet: bool) -> Self {
        Self { testnet }
    }

    fn network_nibble(&self) -> u8 {
        if self.testnet {
            NET_TESTNET
        } else {
            NET_MAINNET
        }
    }

    fn payment_hrp(&self) -> &'static str {
        if self.testnet {
            "addr_test"
        } else {
            "addr"
        }
    }

    fn stake_hrp(&self) -> &'static str {
        if self.testnet {
            "stake_test"
        } else {
            "stake"
        }
    }

    fn key_hash(public_key: &[u8]) -> Result<[u8; KEY_HASH_LEN]> {
        if public_key.len() != 32 {
            return Err(Error::InvalidLength(format!(
                "cardano requires a 32-byte ed25519 public key, got {}",
                public_key.len()
            )));
        }
        Ok(blake2b_224(public_key))
    }

    /// Enterprise address: payment key only, no staking rights.
    pub fn generate_enterprise(&self, public_key: &[u8]) -> Result<String> {
        let hash = Self::key_hash(public_key)?;

        let mut data = Vec::with_capacity(1 + KEY_HASH_LEN);
        data.push(TYPE_ENTERPRISE << 4 | self.network_nibble());
        data.extend_from_slice(&hash);

        bech32::encode(self.payment_hrp(), &data, Variant::Bech32)
    }

    /// Base address: payment key hash followed by stake key hash.
    pub fn generate_base(&self, payment_key: &[u8], stake_key: &[u8]) -> Result<String> {
        let payment_hash = Self::key_hash(payment_key)?;
        let stake_hash = Self::key_hash(stake_key)?;

        let mut data = Vec::with_capacity(1 + 2 * KEY_HASH_LEN);
        data.push(TYPE_BASE << 4 | self.network_nibble());
        data.extend_from_slice(&payment_hash);
        data.extend_from_slice(&stake_hash);

        bech32::encode(self.payment_hrp(), &data, Variant::Bech32)
    }

    /// Reward (stake) address.
    pub fn generate_reward(&self, stake_key: &[u8]) -> Result<String> {
        let hash = Self::key_hash(stake_key)?;

        let mut data = Vec::with_capacity(1 + KEY_HASH_LEN);
        data.push(TYPE_REWARD << 4 | self.network_nibble());
        data.extend_from_slice(&hash);

        bech32::encode(self.stake_hrp(), &data, Variant::Bech32)
    }
}

impl AddressCodec for CardanoCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        self.generate_enterprise(public_key)
    }

    fn validate(&self, address: &str) -> bool {
        let Ok((hrp, data, _)) = bech32::decode(address) else {
            return false;
        };
        if !["addr", "addr_test", "stake", "stake_test"].contains(&hrp.as_str()) {
            return false;
        }
        if data.len() < 1 + KEY_HASH_LEN {
            return false;
        }

        let address_type = data[0] >> 4;
        let network = data[0] & 0x0F;
        if network != NET_MAINNET && network != NET_TESTNET {
            return false;
        }

        match address_type {
            0x00..=0x03 => data.len() == 1 + 2 * KEY_HASH_LEN,
            0x06 | 0x07 | 0x0E | 0x0F => data.len() == 1 + KEY_HASH_LEN,
            0x04 | 0x05 => data.len() > 1 + KEY_HASH_LEN,
            _ => false,
        }
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Cardano
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let (_, data, _) = bech32::decode(address)?;
        Ok(AddressInfo {
            address: address.to_string(),
            public_key: data[1..1 + KEY_HASH_LEN].to_vec(),
            chain_id: ChainId::Cardano,
            address_type: AddressType::Bech32,
            version: data[0],
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let (_, data, _) = bech32::decode(address)?;
        let label = match data[0] >> 4 {
            0x00 => "base (key/key)",
            0x01 => "base (script/key)",
            0x02 => "base (key/script)",
            0x03 => "base (script/script)",
            0x04 => "pointer (key)",
            0x05 => "pointer (script)",
            0x06 => "enterprise (key)",
            0x07 => "enterprise (script)",
            0x0E => "reward (key)",
            0x0F => "reward (script)",
            _ => "unknown",
        };
        Ok(label.to_string())
    }
}
