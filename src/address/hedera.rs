//! Hedera account identifiers: `shard.realm.account` and key aliases

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::error::{Error, Result};

/// Hedera account codec.
///
/// Numeric account ids are assigned by the network; `generate` renders the
/// public-key alias form `shard.realm.<hex key>`.
#[derive(Debug, Clone, Copy)]
pub struct HederaCodec {
    shard: u64,
    realm: u64,
}

impl HederaCodec {
    /// The default `0.0.x` codec.
    pub fn new() -> Self {
        Self { shard: 0, realm: 0 }
    }

    /// A codec for another shard/realm.
    pub fn with_shard_realm(shard: u64, realm: u64) -> Self {
        Self { shard, realm }
    }

    /// Render a network-assigned numeric account id.
    pub fn account_id(&self, account: u64) -> String {
        format!("{}.{}.{}", self.shard, self.realm, account)
    }

    /// Split an account id into `(shard, realm, account)`; the account
    /// part is `None` for alias addresses.
    pub fn parse_account_id(address: &str) -> Result<(u64, u64, Option<u64>)> {
        let parts: Vec<&str> = address.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::InvalidAddress(format!(
                "expected shard.realm.account, got {}",
                address
            )));
        }

        let shard = parts[0]
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid shard: {}", parts[0])))?;
        let realm = parts[1]
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid realm: {}", parts[1])))?;
        let account = parts[2].parse().ok();

        Ok((shard, realm, account))
    }

    fn alias_hex(address: &str) -> Option<&str> {
        let parts: Vec<&str> = address.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        if parts[0].parse::<u64>().is_err() || parts[1].parse::<u64>().is_err() {
            return None;
        }

        let tail = parts[2];
        // 32-byte Ed25519 or 33-byte ECDSA keys as lowercase-or-upper hex
        if (tail.len() == 64 || tail.len() == 66) && tail.bytes().all(|c| c.is_ascii_hexdigit())
        {
            Some(tail)
        } else {
            None
        }
    }
}

impl Default for HederaCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressCodec for HederaCodec {
    fn generate(&self, public_key: &[u8]) -> Result<String> {
        if public_key.len() != 32 && public_key.len() != 33 {
            return Err(Error::InvalidLength(format!(
                "public key must be 32 (ed25519) or 33 (ecdsa) bytes, got {}",
                public_key.len()
            )));
        }
        Ok(format!(
            "{}.{}.{}",
            self.shard,
            self.realm,
            hex::encode(public_key)
        ))
    }

    fn validate(&self, address: &str) -> bool {
        match Self::parse_account_id(address) {
            Ok((_, _, Some(_))) => true,
            Ok((_, _, None)) => Self::alias_hex(address).is_some(),
            Err(_) => false,
        }
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Hedera
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let public_key = match Self::alias_hex(address) {
            Some(alias) => hex::decode(alias.to_lowercase())
                .map_err(|e| Error::InvalidEncoding(format!("hex: {}", e)))?,
            // Numeric ids carry no key material
            None => Vec::new(),
        };

        Ok(AddressInfo {
            address: address.to_string(),
            public_key,
            chain_id: ChainId::Hedera,
            address_type: AddressType::AccountId,
            version: 0,
        })
    }

    fn address_type(&self, address: &str) -> Result<String> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }
        let label = match Self::alias_hex(address) {
            Some(alias) if alias.len() == 64 => "Ed25519 Alias",
            Some(_) => "ECDSA Alias",
            None => "Account ID",
        };
        Ok(label.to_string())
    }
}
