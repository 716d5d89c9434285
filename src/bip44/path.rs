//! The five-level BIP-44 path schema

use std::fmt;
use std::str::FromStr;

use super::coin::CoinType;
use crate::bip32::{harden, DerivationPath};
use crate::error::{Error, Result};

/// BIP-44 purpose level.
pub const PURPOSE: u32 = 44;

/// Change-chain value for receiving addresses.
pub const EXTERNAL_CHAIN: u32 = 0;

/// Change-chain value for change addresses.
pub const INTERNAL_CHAIN: u32 = 1;

/// A structured `m/44'/coin'/account'/change/index` path.
///
/// Purpose, coin type and account are hardened; change and address index
/// are not. Only change values 0 and 1 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bip44Path {
    pub purpose: u32,
    pub coin_type: CoinType,
    pub account: u32,
    pub change: u32,
    pub address_index: u32,
}

impl Bip44Path {
    /// A path with purpose 44 and the given levels.
    pub fn new(coin_type: CoinType, account: u32, change: u32, address_index: u32) -> Self {
        Self {
            purpose: PURPOSE,
            coin_type,
            account,
            change,
            address_index,
        }
    }

    /// `m/44'/coin'/0'/0/0`.
    pub fn default_for(coin_type: CoinType) -> Self {
        Self::new(coin_type, 0, EXTERNAL_CHAIN, 0)
    }

    /// `m/44'/0'/account'/change/index`.
    pub fn bitcoin(account: u32, change: u32, address_index: u32) -> Self {
        Self::new(CoinType::BITCOIN, account, change, address_index)
    }

    /// `m/44'/60'/account'/change/index`.
    pub fn ethereum(account: u32, change: u32, address_index: u32) -> Self {
        Self::new(CoinType::ETHEREUM, account, change, address_index)
    }

    /// `m/44'/2'/account'/change/index`.
    pub fn litecoin(account: u32, change: u32, address_index: u32) -> Self {
        Self::new(CoinType::LITECOIN, account, change, address_index)
    }

    /// `m/44'/3'/account'/change/index`.
    pub fn dogecoin(account: u32, change: u32, address_index: u32) -> Self {
        Self::new(CoinType::DOGECOIN, account, change, address_index)
    }

    /// Parse `m/44'/coin'/account'/change/index`.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        let stripped = path
            .strip_prefix("m/")
            .ok_or_else(|| Error::InvalidPath("bip44 path must start with m/".into()))?;

        let parts: Vec<&str> = stripped.split('/').collect();
        if parts.len() != 5 {
            return Err(Error::InvalidPath(format!(
                "bip44 path must have 5 levels, got {}",
                parts.len()
            )));
        }

        let purpose = parse_hardened(parts[0])?;
        if purpose != PURPOSE {
            return Err(Error::InvalidPath(format!(
                "purpose must be 44', got {}'",
                purpose
            )));
        }

        let coin_type = parse_hardened(parts[1])?;
        let account = parse_hardened(parts[2])?;

        let change = parse_plain(parts[3])?;
        if change > INTERNAL_CHAIN {
            return Err(Error::InvalidPath(format!(
                "change must be 0 or 1, got {}",
                change
            )));
        }
        let address_index = parse_plain(parts[4])?;

        Ok(Self {
            purpose,
            coin_type: CoinType(coin_type),
            account,
            change,
            address_index,
        })
    }

    /// The account-level prefix `m/44'/coin'/account'`, the cacheable root
    /// for bulk address derivation.
    pub fn account_path(&self) -> String {
        format!(
            "m/{}'/{}'/{}'",
            self.purpose,
            self.coin_type.value(),
            self.account
        )
    }

    /// Lower to a raw BIP-32 index sequence.
    pub fn to_bip32_path(&self) -> DerivationPath {
        DerivationPath::new(vec![
            harden(self.purpose),
            harden(self.coin_type.value()),
            harden(self.account),
            self.change,
            self.address_index,
        ])
    }

    /// Same path with a different account.
    pub fn with_account(self, account: u32) -> Self {
        Self { account, ..self }
    }

    /// Same path with a different change chain.
    pub fn with_change(self, change: u32) -> Self {
        Self { change, ..self }
    }

    /// Same path with a different address index.
    pub fn with_address_index(self, address_index: u32) -> Self {
        Self {
            address_index,
            ..self
        }
    }

    /// The next address on the same chain.
    pub fn next(self) -> Self {
        self.with_address_index(self.address_index + 1)
    }
}

fn parse_hardened(part: &str) -> Result<u32> {
    let digits = part
        .strip_suffix('\'')
        .or_else(|| part.strip_suffix('h'))
        .ok_or_else(|| Error::InvalidPath(format!("expected hardened index: {}", part)))?;
    digits
        .parse()
        .map_err(|_| Error::InvalidPath(format!("invalid index '{}'", part)))
}

fn parse_plain(part: &str) -> Result<u32> {
    if part.ends_with('\'') || part.ends_with('h') {
        return Err(Error::InvalidPath(format!(
            "unexpected hardened index: {}",
            part
        )));
    }
    part.parse()
        .map_err(|_| Error::InvalidPath(format!("invalid index '{}'", part)))
}

impl fmt::Display for Bip44Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m/{}'/{}'/{}'/{}/{}",
            self.purpose,
            self.coin_type.value(),
            self.account,
            self.change,
            self.address_index
        )
    }
}

impl FromStr for Bip44Path {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
