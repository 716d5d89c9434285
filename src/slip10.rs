//! SLIP-10 key derivation for Ed25519 chains
//!
//! BIP-32 does not apply over Ed25519; SLIP-10 defines a hardened-only
//! HMAC-SHA-512 walk with the master key seeded from `"ed25519 seed"`.
//! Non-hardened indices are promoted to hardened.

use zeroize::Zeroize;

use crate::bip32::{DerivationPath, HARDENED_OFFSET};
use crate::crypto::ed25519;
use crate::crypto::hash::hmac_sha512;
use crate::error::Result;

const MASTER_HMAC_KEY: &[u8] = b"ed25519 seed";

/// A SLIP-10 node: 32 bytes of key material and a chain code.
///
/// The key doubles as the Ed25519 seed at the leaf. Wiped on drop.
#[derive(Clone)]
pub struct Slip10Key {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl Slip10Key {
    /// The 32-byte key material (the Ed25519 seed at a leaf).
    pub fn key_bytes(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 32-byte chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// The Ed25519 public key of this node's key material.
    pub fn public_key(&self) -> [u8; 32] {
        ed25519::public_from_seed(&self.key).expect("key material is 32 bytes")
    }
}

impl Drop for Slip10Key {
    fn drop(&mut self) {
        self.key.zeroize();
        self.chain_code.zeroize();
    }
}

impl std::fmt::Debug for Slip10Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slip10Key").field("key", &"[REDACTED]").finish()
    }
}

/// Walk a SLIP-10 path from a seed. Every index is treated as hardened.
pub fn derive_key_from_path(seed: &[u8], path: &[u32]) -> Result<Slip10Key> {
    let digest = hmac_sha512(MASTER_HMAC_KEY, seed);
    let (key, chain_code) = split(&digest);
    let mut node = Slip10Key { key, chain_code };

    for &index in path {
        let hardened_index = index | HARDENED_OFFSET;

        let mut data = [0u8; 37];
        data[1..33].copy_from_slice(&node.key);
        data[33..].copy_from_slice(&hardened_index.to_be_bytes());

        let digest = hmac_sha512(&node.chain_code, &data);
        let (key, chain_code) = split(&digest);
        node = Slip10Key { key, chain_code };
    }

    Ok(node)
}

/// Walk a SLIP-10 path given as a string (`m/44'/501'/0'/0'`).
pub fn derive_key_from_path_str(seed: &[u8], path: &str) -> Result<Slip10Key> {
    let path = DerivationPath::parse(path)?;
    derive_key_from_path(seed, path.indices())
}

fn split(digest: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let (key, chain_code) = digest.split_at(32);
    (
        key.try_into().expect("hmac output is 64 bytes"),
        chain_code.try_into().expect("hmac output is 64 bytes"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slip10_vector1_master() {
        // SLIP-0010 Ed25519 test vector 1
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let master = derive_key_from_path(&seed, &[]).unwrap();
        assert_eq!(
            hex::encode(master.chain_code()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
        assert_eq!(
            hex::encode(master.key_bytes()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(master.public_key()),
            "a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed"
        );
    }

    #[test]
    fn test_slip10_vector1_child() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let child = derive_key_from_path(&seed, &[HARDENED_OFFSET]).unwrap();
        assert_eq!(
            hex::encode(child.chain_code()),
            "8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69"
        );
        assert_eq!(
            hex::encode(child.key_bytes()),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
    }

    #[test]
    fn test_non_hardened_indices_promoted() {
        let seed = [9u8; 32];
        let plain = derive_key_from_path(&seed, &[44, 501, 0, 0]).unwrap();
        let hardened = derive_key_from_path(
            &seed,
            &[
                44 | HARDENED_OFFSET,
                501 | HARDENED_OFFSET,
                HARDENED_OFFSET,
                HARDENED_OFFSET,
            ],
        )
        .unwrap();
        assert_eq!(plain.key_bytes(), hardened.key_bytes());
        assert_eq!(plain.public_key(), hardened.public_key());
    }

    #[test]
    fn test_path_str_matches_indices() {
        let seed = [3u8; 64];
        let from_str = derive_key_from_path_str(&seed, "m/44'/501'/0'/0'").unwrap();
        let from_indices = derive_key_from_path(
            &seed,
            &[
                44 | HARDENED_OFFSET,
                501 | HARDENED_OFFSET,
                HARDENED_OFFSET,
                HARDENED_OFFSET,
            ],
        )
        .unwrap();
        assert_eq!(from_str.key_bytes(), from_indices.key_bytes());
    }
}
