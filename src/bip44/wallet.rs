//! HD wallet built on the BIP-44 hierarchy

use zeroize::Zeroizing;

use super::account::{Account, DerivedAddressInfo};
use super::coin::CoinType;
use super::path::Bip44Path;
use crate::bip32::{ExtendedKey, Network, MAINNET};
use crate::bip39;
use crate::error::{Error, Result};

/// A BIP-44 HD wallet: a master extended key, optionally with the mnemonic
/// it was restored from. Immutable after construction.
#[derive(Clone)]
pub struct Wallet {
    master: ExtendedKey,
    mnemonic: Option<Zeroizing<String>>,
}

// Never print the mnemonic
impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("master", &self.master)
            .field("mnemonic", &self.mnemonic.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Wallet {
    /// Build a wallet from a raw BIP-39 seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Self::from_seed_with_network(seed, &MAINNET)
    }

    /// Build a wallet from a seed for a specific network.
    pub fn from_seed_with_network(seed: &[u8], network: &'static Network) -> Result<Self> {
        let master = ExtendedKey::master_from_seed(seed, network)?;
        tracing::debug!(network = network.name(), "wallet created from seed");
        Ok(Self {
            master,
            mnemonic: None,
        })
    }

    /// Restore a wallet from a mnemonic phrase and passphrase.
    pub fn from_mnemonic(mnemonic: &str, passphrase: &str) -> Result<Self> {
        if !bip39::validate_mnemonic(mnemonic) {
            return Err(Error::InvalidEncoding("invalid mnemonic phrase".into()));
        }

        let seed = bip39::mnemonic_to_seed(mnemonic, passphrase);
        let mut wallet = Self::from_seed(&*seed)?;
        wallet.mnemonic = Some(Zeroizing::new(mnemonic.to_string()));
        Ok(wallet)
    }

    /// Generate a wallet with fresh entropy of the given bit size.
    pub fn generate(entropy_bits: usize, passphrase: &str) -> Result<Self> {
        let (mnemonic, seed) = bip39::mnemonic_and_seed(entropy_bits, passphrase)?;
        let mut wallet = Self::from_seed(&*seed)?;
        wallet.mnemonic = Some(Zeroizing::new(mnemonic));
        tracing::debug!(entropy_bits, "wallet generated");
        Ok(wallet)
    }

    /// The master extended key.
    pub fn master_key(&self) -> &ExtendedKey {
        &self.master
    }

    /// The mnemonic this wallet was built from, if any.
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_ref().map(|m| m.as_str())
    }

    /// Derive the account at `m/44'/coin'/account'`.
    pub fn derive_account(&self, coin_type: CoinType, account_index: u32) -> Result<Account> {
        let path = Bip44Path::new(coin_type, account_index, 0, 0).account_path();
        let key = self.master.derive_path_str(&path)?;
        Ok(Account::new(coin_type, account_index, key))
    }

    /// Derive the key at a full BIP-44 path.
    pub fn derive_key(&self, path: &Bip44Path) -> Result<ExtendedKey> {
        self.master.derive_path(&path.to_bip32_path())
    }

    /// Derive the key at an arbitrary BIP-32 path string.
    pub fn derive_key_str(&self, path: &str) -> Result<ExtendedKey> {
        self.master.derive_path_str(path)
    }

    /// Derive a single address-level key.
    pub fn derive_address(
        &self,
        coin_type: CoinType,
        account: u32,
        change: u32,
        address_index: u32,
    ) -> Result<ExtendedKey> {
        self.derive_key(&Bip44Path::new(coin_type, account, change, address_index))
    }

    /// Key material for the address at a full BIP-44 path.
    pub fn address_info(&self, path: &Bip44Path) -> Result<DerivedAddressInfo> {
        let key = self.derive_key(path)?;
        Ok(DerivedAddressInfo {
            path: *path,
            public_key: key.public_key_bytes(),
            chain_code: *key.chain_code(),
            private_key: key.private_key_bytes(),
        })
    }

    /// Derive `count` consecutive addresses for a coin, reusing the
    /// account- and change-level keys.
    pub fn derive_addresses(
        &self,
        coin_type: CoinType,
        account: u32,
        change: u32,
        start: u32,
        count: u32,
    ) -> Result<Vec<DerivedAddressInfo>> {
        let account = self.derive_account(coin_type, account)?;

        let mut addresses = Vec::with_capacity(count as usize);
        for offset in 0..count {
            addresses.push(account.address_info(change, start + offset)?);
        }
        Ok(addresses)
    }
}
