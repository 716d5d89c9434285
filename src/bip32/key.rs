//! Extended keys: master derivation, child derivation, serialization

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use super::network::{self, Network};
use super::path::{is_hardened, DerivationPath};
use crate::crypto::hash::{checksum4, hash160, hmac_sha512};
use crate::crypto::secp256k1;
use crate::encoding::base58;
use crate::error::{Error, Result};

/// Length of a serialized extended key.
pub const SERIALIZED_LEN: usize = 78;

const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// A BIP-32 extended key, private or public.
///
/// Key material is 33 bytes: `0x00 ‖ scalar` for private keys, the
/// compressed SEC1 point for public keys. Immutable after construction;
/// the key bytes and chain code are wiped on drop.
#[derive(Clone)]
pub struct ExtendedKey {
    key: [u8; 33],
    chain_code: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_index: u32,
    network: &'static Network,
    private: bool,
}

impl ExtendedKey {
    /// Derive the master key from a 16–64 byte seed.
    pub fn master_from_seed(seed: &[u8], network: &'static Network) -> Result<Self> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::InvalidLength(format!(
                "seed must be 16..=64 bytes, got {}",
                seed.len()
            )));
        }

        let digest = hmac_sha512(MASTER_HMAC_KEY, seed);
        let (il, ir) = digest.split_at(32);

        if !secp256k1::is_valid_private(il) {
            return Err(Error::DerivationFailed(
                "master key scalar out of range".into(),
            ));
        }

        let mut key = [0u8; 33];
        key[1..].copy_from_slice(il);

        Ok(Self {
            key,
            chain_code: ir.try_into().expect("hmac output is 64 bytes"),
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_index: 0,
            network,
            private: true,
        })
    }

    /// True if this key carries a private scalar.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// The 33-byte compressed public key.
    pub fn public_key_bytes(&self) -> [u8; 33] {
        if self.private {
            secp256k1::public_from_private(&self.key[1..])
                .expect("private scalar was validated at construction")
        } else {
            self.key
        }
    }

    /// The 32-byte private scalar, or `None` for a public-only key.
    pub fn private_key_bytes(&self) -> Option<[u8; 32]> {
        if self.private {
            Some(self.key[1..].try_into().expect("key material is 33 bytes"))
        } else {
            None
        }
    }

    /// The 32-byte chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Derivation depth; 0 for a master key.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// First 4 bytes of the parent's fingerprint; zero for a master key.
    pub fn parent_fingerprint(&self) -> &[u8; 4] {
        &self.parent_fingerprint
    }

    /// Child index this key was derived at; 0 for a master key.
    pub fn child_index(&self) -> u32 {
        self.child_index
    }

    /// The network this key serializes under.
    pub fn network(&self) -> &'static Network {
        self.network
    }

    /// First 4 bytes of `hash160(compressed_public_key)`.
    pub fn fingerprint(&self) -> [u8; 4] {
        hash160(&self.public_key_bytes())[..4]
            .try_into()
            .expect("hash160 yields 20 bytes")
    }

    /// Derive the child key at `index`.
    ///
    /// Hardened indices require a private parent. Fails with
    /// `DerivationFailed` on the ≈2⁻¹²⁸ out-of-range cases instead of
    /// skipping to the next index.
    pub fn child(&self, index: u32) -> Result<Self> {
        let hardened = is_hardened(index);
        if !self.private && hardened {
            return Err(Error::HardenedFromPublic);
        }

        let mut data = [0u8; 37];
        if hardened {
            data[..33].copy_from_slice(&self.key);
        } else {
            data[..33].copy_from_slice(&self.public_key_bytes());
        }
        data[33..].copy_from_slice(&index.to_be_bytes());

        let digest = hmac_sha512(&self.chain_code, &data);
        let (il, ir) = digest.split_at(32);

        if !secp256k1::is_valid_private(il) {
            return Err(Error::DerivationFailed(format!(
                "intermediate scalar out of range at index {}",
                index
            )));
        }

        let key = if self.private {
            let child_scalar = secp256k1::add_private(il, &self.key[1..])?;
            let mut key = [0u8; 33];
            key[1..].copy_from_slice(&child_scalar);
            key
        } else {
            let il_point = secp256k1::public_from_private(il)?;
            secp256k1::add_points(&il_point, &self.key)?
        };

        Ok(Self {
            key,
            chain_code: ir.try_into().expect("hmac output is 64 bytes"),
            depth: self.depth + 1,
            parent_fingerprint: self.fingerprint(),
            child_index: index,
            network: self.network,
            private: self.private,
        })
    }

    /// Walk a full derivation path from this key.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        let mut current = self.clone();
        for index in path {
            current = current.child(index)?;
        }
        Ok(current)
    }

    /// Walk a derivation path given as a string.
    pub fn derive_path_str(&self, path: &str) -> Result<Self> {
        self.derive_path(&DerivationPath::parse(path)?)
    }

    /// The public extended key: key material replaced by the compressed
    /// point, all other fields unchanged.
    pub fn neuter(&self) -> Self {
        if !self.private {
            return self.clone();
        }
        Self {
            key: self.public_key_bytes(),
            chain_code: self.chain_code,
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_index: self.child_index,
            network: self.network,
            private: false,
        }
    }

    /// The 78-byte serialized form:
    /// `version ‖ depth ‖ parent_fp ‖ child_index ‖ chain_code ‖ key`.
    pub fn serialize(&self) -> [u8; SERIALIZED_LEN] {
        let version = if self.private {
            self.network.private_version()
        } else {
            self.network.public_version()
        };

        let mut out = [0u8; SERIALIZED_LEN];
        out[..4].copy_from_slice(&version.to_be_bytes());
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.parent_fingerprint);
        out[9..13].copy_from_slice(&self.child_index.to_be_bytes());
        out[13..45].copy_from_slice(&self.chain_code);
        out[45..].copy_from_slice(&self.key);
        out
    }

    /// Reconstruct a key from its 78-byte serialized form.
    ///
    /// The network and private/public flag are inferred from the version;
    /// unknown versions fall back to mainnet with the key treated as public.
    pub fn deserialize(data: &[u8]) -> Result<Self> {
        if data.len() != SERIALIZED_LEN {
            return Err(Error::InvalidLength(format!(
                "serialized key must be {} bytes, got {}",
                SERIALIZED_LEN,
                data.len()
            )));
        }

        let version = u32::from_be_bytes(data[..4].try_into().expect("length checked"));
        let network = Network::from_version(version).unwrap_or(&network::MAINNET);
        let private = Network::is_private_version(version);

        if private {
            if data[45] != 0x00 {
                return Err(Error::InvalidEncoding(
                    "private key material must start with 0x00".into(),
                ));
            }
            if !secp256k1::is_valid_private(&data[46..]) {
                return Err(Error::DerivationFailed(
                    "serialized private scalar out of range".into(),
                ));
            }
        }

        Ok(Self {
            key: data[45..].try_into().expect("length checked"),
            chain_code: data[13..45].try_into().expect("length checked"),
            depth: data[4],
            parent_fingerprint: data[5..9].try_into().expect("length checked"),
            child_index: u32::from_be_bytes(data[9..13].try_into().expect("length checked")),
            network,
            private,
        })
    }

    /// Parse the Base58Check string form.
    pub fn parse(encoded: &str) -> Result<Self> {
        let decoded = base58::decode(encoded)?;
        if decoded.len() != SERIALIZED_LEN + 4 {
            return Err(Error::InvalidLength(format!(
                "encoded key must decode to {} bytes, got {}",
                SERIALIZED_LEN + 4,
                decoded.len()
            )));
        }

        let (payload, checksum) = decoded.split_at(SERIALIZED_LEN);
        if checksum != checksum4(payload) {
            return Err(Error::ChecksumMismatch);
        }

        Self::deserialize(payload)
    }
}

impl fmt::Display for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let payload = self.serialize();
        let mut data = Vec::with_capacity(SERIALIZED_LEN + 4);
        data.extend_from_slice(&payload);
        data.extend_from_slice(&checksum4(&payload));
        f.write_str(&base58::encode(&data))
    }
}

impl FromStr for ExtendedKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Never print private key material
impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("private", &self.private)
            .field("depth", &self.depth)
            .field("child_index", &self.child_index)
            .field("network", &self.network.name())
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.chain_code.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bip32::network::{MAINNET, TESTNET};

    const VECTOR1_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    fn vector1_master() -> ExtendedKey {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        ExtendedKey::master_from_seed(&seed, &MAINNET).unwrap()
    }

    #[test]
    fn test_bip32_vector1_master() {
        let master = vector1_master();
        assert_eq!(
            master.to_string(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );
        assert_eq!(
            master.neuter().to_string(),
            "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8"
        );
    }

    #[test]
    fn test_bip32_vector1_children() {
        let master = vector1_master();

        let child = master.child(super::super::path::harden(0)).unwrap();
        assert_eq!(
            child.to_string(),
            "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
        );

        let grandchild = master.derive_path_str("m/0'/1").unwrap();
        assert_eq!(
            grandchild.to_string(),
            "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
        );
        assert_eq!(grandchild.depth(), 2);
        assert_eq!(grandchild.child_index(), 1);
    }

    #[test]
    fn test_parse_round_trip() {
        let master = vector1_master();
        let key = master.derive_path_str("m/0'/1").unwrap();

        let reparsed = ExtendedKey::parse(&key.to_string()).unwrap();
        assert_eq!(reparsed.serialize(), key.serialize());
        assert!(reparsed.is_private());
        assert_eq!(reparsed.network(), &MAINNET);

        let public = key.neuter();
        let reparsed_pub: ExtendedKey = public.to_string().parse().unwrap();
        assert_eq!(reparsed_pub.serialize(), public.serialize());
        assert!(!reparsed_pub.is_private());
    }

    #[test]
    fn test_neuter_child_commutes() {
        let master = vector1_master();
        for index in [0u32, 1, 42] {
            let a = master.child(index).unwrap().neuter();
            let b = master.neuter().child(index).unwrap();
            assert_eq!(a.public_key_bytes(), b.public_key_bytes());
            assert_eq!(a.chain_code(), b.chain_code());
            assert_eq!(a.depth(), b.depth());
            assert_eq!(a.parent_fingerprint(), b.parent_fingerprint());
            assert_eq!(a.child_index(), b.child_index());
        }
    }

    #[test]
    fn test_hardened_from_public_fails() {
        let public = vector1_master().neuter();
        assert!(matches!(
            public.child(super::super::path::harden(0)),
            Err(Error::HardenedFromPublic)
        ));
    }

    #[test]
    fn test_seed_length_bounds() {
        for len in [15usize, 65] {
            let seed = vec![0u8; len];
            assert!(matches!(
                ExtendedKey::master_from_seed(&seed, &MAINNET),
                Err(Error::InvalidLength(_))
            ));
        }
    }

    #[test]
    fn test_testnet_prefixes() {
        let seed = hex::decode(VECTOR1_SEED).unwrap();
        let master = ExtendedKey::master_from_seed(&seed, &TESTNET).unwrap();
        assert!(master.to_string().starts_with("tprv"));
        assert!(master.neuter().to_string().starts_with("tpub"));
    }

    #[test]
    fn test_corrupted_string_rejected() {
        let mut encoded = vector1_master().to_string().into_bytes();
        let last = encoded.len() - 1;
        encoded[last] = if encoded[last] == b'i' { b'j' } else { b'i' };
        let corrupted = String::from_utf8(encoded).unwrap();
        assert!(ExtendedKey::parse(&corrupted).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let master = vector1_master();
        let debug = format!("{:?}", master);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(&hex::encode(master.private_key_bytes().unwrap())));
    }
}
