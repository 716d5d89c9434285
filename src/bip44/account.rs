//! Account-level key management

use super::coin::CoinType;
use super::path::Bip44Path;
use crate::bip32::ExtendedKey;
use crate::error::Result;

/// A BIP-44 account: the cached `m/44'/coin'/account'` key plus its
/// coordinates.
#[derive(Debug, Clone)]
pub struct Account {
    coin_type: CoinType,
    index: u32,
    key: ExtendedKey,
}

/// The key material of one derived address.
#[derive(Debug, Clone)]
pub struct DerivedAddressInfo {
    /// Full five-level path of the address.
    pub path: Bip44Path,
    /// 33-byte compressed public key.
    pub public_key: [u8; 33],
    /// Chain code of the address-level key.
    pub chain_code: [u8; 32],
    /// Private scalar, absent when derived from a neutered account.
    pub private_key: Option<[u8; 32]>,
}

impl Account {
    /// Wrap an account-level extended key.
    pub fn new(coin_type: CoinType, index: u32, key: ExtendedKey) -> Self {
        Self {
            coin_type,
            index,
            key,
        }
    }

    /// The account's coin type.
    pub fn coin_type(&self) -> CoinType {
        self.coin_type
    }

    /// The account index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The account-level extended key.
    pub fn key(&self) -> &ExtendedKey {
        &self.key
    }

    /// The account-level extended public key.
    pub fn public_key(&self) -> ExtendedKey {
        self.key.neuter()
    }

    /// Derive the key at `account/change/index`.
    pub fn derive_address(&self, change: u32, index: u32) -> Result<ExtendedKey> {
        self.key.child(change)?.child(index)
    }

    /// Derive a receiving (external-chain) address key.
    pub fn derive_external_address(&self, index: u32) -> Result<ExtendedKey> {
        self.derive_address(super::path::EXTERNAL_CHAIN, index)
    }

    /// Derive a change (internal-chain) address key.
    pub fn derive_internal_address(&self, index: u32) -> Result<ExtendedKey> {
        self.derive_address(super::path::INTERNAL_CHAIN, index)
    }

    /// Derive `count` consecutive address keys starting at `start`.
    ///
    /// The change-level key is derived once and reused for the fan-out.
    pub fn derive_addresses(
        &self,
        change: u32,
        start: u32,
        count: u32,
    ) -> Result<Vec<ExtendedKey>> {
        let change_key = self.key.child(change)?;

        let mut keys = Vec::with_capacity(count as usize);
        for offset in 0..count {
            keys.push(change_key.child(start + offset)?);
        }
        Ok(keys)
    }

    /// The full BIP-44 path of an address in this account.
    pub fn path(&self, change: u32, index: u32) -> Bip44Path {
        Bip44Path::new(self.coin_type, self.index, change, index)
    }

    /// Derive one address and return its key material.
    pub fn address_info(&self, change: u32, index: u32) -> Result<DerivedAddressInfo> {
        let key = self.derive_address(change, index)?;
        Ok(DerivedAddressInfo {
            path: self.path(change, index),
            public_key: key.public_key_bytes(),
            chain_code: *key.chain_code(),
            private_key: key.private_key_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bip32::MAINNET;

    fn test_account() -> Account {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = ExtendedKey::master_from_seed(&seed, &MAINNET).unwrap();
        let key = master.derive_path_str("m/44'/0'/0'").unwrap();
        Account::new(CoinType::BITCOIN, 0, key)
    }

    #[test]
    fn test_bulk_derivation_matches_single() {
        let account = test_account();
        let bulk = account.derive_addresses(0, 10, 5).unwrap();
        assert_eq!(bulk.len(), 5);

        for (offset, key) in bulk.iter().enumerate() {
            let single = account.derive_address(0, 10 + offset as u32).unwrap();
            assert_eq!(key.public_key_bytes(), single.public_key_bytes());
            assert_eq!(key.child_index(), 10 + offset as u32);
        }
    }

    #[test]
    fn test_external_internal_differ() {
        let account = test_account();
        let external = account.derive_external_address(0).unwrap();
        let internal = account.derive_internal_address(0).unwrap();
        assert_ne!(external.public_key_bytes(), internal.public_key_bytes());
    }

    #[test]
    fn test_address_info_paths() {
        let account = test_account();
        let info = account.address_info(1, 7).unwrap();
        assert_eq!(info.path.to_string(), "m/44'/0'/0'/1/7");
        assert!(info.private_key.is_some());
    }

    #[test]
    fn test_neutered_account_yields_public_only() {
        let account = test_account();
        let watch_only = Account::new(CoinType::BITCOIN, 0, account.public_key());
        let info = watch_only.address_info(0, 0).unwrap();
        assert!(info.private_key.is_none());
        assert_eq!(
            info.public_key,
            account.address_info(0, 0).unwrap().public_key
        );
    }
}
