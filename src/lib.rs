//! hdwallet-core - Multi-chain HD key derivation and address encoding
//!
//! This library provides the deterministic pipeline behind HD wallets:
//! BIP-39 mnemonics, BIP-32 extended keys over secp256k1, BIP-44 account
//! schemas with a SLIP-10 walker for Ed25519 chains, and address codecs
//! for a broad catalog of blockchains behind one factory interface.
//!
//! The pipeline is `entropy → mnemonic → seed → master key → child key →
//! public key → address`; every stage is bit-exact against the published
//! standards and their test vectors.

pub mod address;
pub mod bip32;
pub mod bip39;
pub mod bip44;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod slip10;

// Re-export commonly used types for convenience
pub use address::{AddressCodec, AddressInfo, ChainId, Factory};
pub use bip32::{DerivationPath, ExtendedKey, Network};
pub use bip44::{Account, Bip44Path, CoinType, Wallet};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        // entropy → mnemonic → seed → master → child → public key → address
        let entropy = [0u8; 16];
        let mnemonic = bip39::entropy_to_mnemonic(&entropy).unwrap();
        let wallet = Wallet::from_mnemonic(&mnemonic, "").unwrap();
        let key = wallet.derive_key(&Bip44Path::bitcoin(0, 0, 0)).unwrap();

        let factory = Factory::new();
        let address = factory
            .generate(ChainId::Bitcoin, &key.public_key_bytes())
            .unwrap();
        assert!(factory.validate(ChainId::Bitcoin, &address));
    }
}
