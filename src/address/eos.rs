//! EOS public-key strings and account names

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::ripemd160;
use crate::encoding::base58;
use crate::error::{Error, Result};

const NAME_CHARSET: &[u8] = b".12345abcdefghijklmnopqrstuvwxyz";
const MAX_NAME_LEN: usize = 12;

/// EOS address codec.
///
/// Account names are chosen by users, not derived from keys; `generate`
/// renders the legacy public-key string.
#[derive(Debug, Clone, Copy, Default)]
pub struct EosCodec;

impl EosCodec {
    pub fn new() -> Self {
        Self
    }

    /// The newer `PUB_K1_` public-key string: the checksum covers
    /// `"K1" ‖ key`.
    pub fn generate_pub_k1(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "eos requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }

        let mut checksum_input = Vec::with_capacity(2 + 33);
        checksum_input.extend_from_slice(b"K1");
        checksum_input.extend_from_slice(public_key);
        let checksum = &ripemd160(&checksum_input)[..4];

        let mut data = Vec::with_capacity(37);
        data.extend_from_slice(public_key);
        data.extend_from_slice(checksum);

        Ok(format!("PUB_K1_{}", base58::encode(&data)))
    }

    /// Whether `name` is a legal account name: up to 12 characters from
    /// `.12345a-z`, not starting with a digit.
    pub fn validate_account_name(name: &str) -> bool {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return false;
        }
        if name.as_bytes()[0].is_ascii_digit() {
            return false;
        }
        name.bytes().all(|c| NAME_CHARSET.contains(&c))
    }

    /// The on-chain u64 form of an account name (base-32, 5 bits per
    /// character, left-aligned).
    pub fn name_to_u64(name: &str) -> Result<u64> {
        if !Self::validate_account_name(name) {
            return Err(Error::InvalidAddress(format!(
                "invalid account name: {}",
                name
            )));
        }

        let mut value: u64 = 0;
        for &c in name.as_bytes() {
            let char_value = match c {
                b'.' => 0,
                b'1'..=b'5' => (c - b'1') as u64 + 1,
                b'a'..=b'z' => (c - b'a') as u64 + 6,
                _ => unreachable!("charset validated above"),
            };
            value = value << 5 | char_value;
        }
        value <<= 5 * (MAX_NAME_LEN - name.len()) as u32;
        Ok(value)
    }

    fn check_key(encoded: &str, checksum_prefix: &[u8]) -> bool {
        let Ok(decoded) = base58::decode(encoded) else {
            return false;
        };
        if decoded.len() != 37 {
            return false;
        }

        let (key, checksum) = decoded.split_at(33);
        let mut input = Vec::with_capacity(checksum_prefix.len() + 33);
        input.extend_from_slice(checksum_prefix);
        input.extend_from_slice(key);
        checksum == &ripemd160(&input)[..4]
    }
}

impl AddressCodec for EosCodec {
    /// The legacy `EOS…` public-key string.
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "eos requires a 33-byte compressed public key, got {}",
                public_key.len()
            )));
        }

        let checksum = &ripemd160(public_key)[..4];
        let mut data = Vec::with_capacity(37);
        data.extend_from_slice(public_key);
        data.extend_from_slice(checksum);

        Ok(format!("EOS{}", base58::encode(&data)))
    }

    fn validate(&self, address: &str) -> bool {
        if let Some(encoded) = address.strip_prefix("EOS") {
            return Self::check_key(encoded, b"");
        }
        if let Some(encoded) = address.strip_prefix("PUB_K1_") {
            return Self::check_key(encoded, b"K1");
        }
        Self::validate_account_name(address)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Eos
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let encoded = address
            .strip_prefix("EOS")
            .or_else(|| address.strip_prefix("PUB_K1_"));

        let public_key = match encoded {
            Some(encoded) => base58::decode(encoded)?[..33].to_vec(),
            // Account names carry no key material
            None => address.as_bytes().to_vec(),
        };

        Ok(AddressInfo {
            address: address.to_string(),
            public_key,
            chain_id: ChainId::Eos,
            address_type: if encoded.is_some() {
                AddressType::Base58
            } else {
                AddressType::AccountId
            },
            version: 0,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        let label = if address.starts_with("EOS") {
            "Legacy Public Key (EOS)"
        } else if address.starts_with("PUB_K1_") {
            "Public Key (K1/secp256k1)"
        } else if address.starts_with("PUB_R1_") {
            "Public Key (R1/secp256r1)"
        } else if Self::validate_account_name(address) {
            "Account Name"
        } else {
            return Err(Error::InvalidAddress(address.to_string()));
        };
        Ok(label.to_string())
    }
}
