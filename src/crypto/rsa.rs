//! RSA key generation, RSA-PSS signing and the Arweave JWK wallet format

use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine as _;
use num_bigint_dig::{BigInt, BigUint, ModInverse};
use rand::rngs::OsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{Pss, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Supported RSA key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsaKeySize {
    /// 2048-bit keys, the minimum Arweave accepts
    Rsa2048,
    /// 4096-bit keys, the size Arweave wallets ship with
    Rsa4096,
}

impl RsaKeySize {
    /// Modulus size in bits
    pub const fn bits(self) -> usize {
        match self {
            Self::Rsa2048 => 2048,
            Self::Rsa4096 => 4096,
        }
    }
}

/// Generate a new RSA key pair of the given size.
pub fn generate_key(size: RsaKeySize) -> Result<RsaPrivateKey> {
    RsaPrivateKey::new(&mut OsRng, size.bits())
        .map_err(|e| Error::Io(format!("rsa key generation failed: {}", e)))
}

/// Generate a 4096-bit RSA key for an Arweave wallet.
pub fn generate_arweave_key() -> Result<RsaPrivateKey> {
    generate_key(RsaKeySize::Rsa4096)
}

/// Raw big-endian modulus bytes, the input to Arweave address derivation.
pub fn modulus_bytes(key: &RsaPublicKey) -> Vec<u8> {
    key.n().to_bytes_be()
}

/// The `owner` field of an Arweave transaction: Base64URL of the modulus.
pub fn get_arweave_owner(key: &RsaPublicKey) -> String {
    URL_SAFE_NO_PAD.encode(modulus_bytes(key))
}

/// Sign a message with RSA-PSS over SHA-256 (salt length 32).
pub fn sign_pss(key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let digest = Sha256::digest(message);
    key.sign_with_rng(&mut OsRng, Pss::new_with_salt::<Sha256>(32), &digest)
        .map_err(|e| Error::DerivationFailed(format!("rsa-pss signing failed: {}", e)))
}

/// Verify an RSA-PSS signature over SHA-256.
pub fn verify_pss(key: &RsaPublicKey, message: &[u8], signature: &[u8]) -> bool {
    let digest = Sha256::digest(message);
    key.verify(Pss::new_with_salt::<Sha256>(32), &digest, signature)
        .is_ok()
}

/// JSON Web Key for RSA, the Arweave wallet-file format.
///
/// All integer fields are Base64URL without padding. The private fields
/// are absent for public keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Jwk {
    pub kty: String,
    pub n: String,
    pub e: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qi: Option<String>,
}

/// Convert an RSA private key to its JWK representation.
pub fn private_key_to_jwk(key: &RsaPrivateKey) -> Result<Jwk> {
    let primes = key.primes();
    if primes.len() != 2 {
        return Err(Error::Unsupported(format!(
            "jwk requires a two-prime key, got {} primes",
            primes.len()
        )));
    }
    let p = &primes[0];
    let q = &primes[1];

    let one = BigUint::from(1u8);
    let dp = key.d() % (p - &one);
    let dq = key.d() % (q - &one);
    let qi = mod_inverse(q, p)
        .ok_or_else(|| Error::DerivationFailed("q has no inverse mod p".into()))?;

    Ok(Jwk {
        kty: "RSA".into(),
        n: encode_uint(key.n()),
        e: encode_uint(key.e()),
        d: Some(encode_uint(key.d())),
        p: Some(encode_uint(p)),
        q: Some(encode_uint(q)),
        dp: Some(encode_uint(&dp)),
        dq: Some(encode_uint(&dq)),
        qi: Some(encode_uint(&qi)),
    })
}

/// Convert an RSA public key to its JWK representation.
pub fn public_key_to_jwk(key: &RsaPublicKey) -> Jwk {
    Jwk {
        kty: "RSA".into(),
        n: encode_uint(key.n()),
        e: encode_uint(key.e()),
        d: None,
        p: None,
        q: None,
        dp: None,
        dq: None,
        qi: None,
    }
}

/// Reconstruct and validate an RSA private key from a JWK.
pub fn jwk_to_private_key(jwk: &Jwk) -> Result<RsaPrivateKey> {
    if jwk.kty != "RSA" {
        return Err(Error::InvalidEncoding(format!(
            "jwk key type must be RSA, got {}",
            jwk.kty
        )));
    }

    let n = decode_uint(&jwk.n, "n")?;
    let e = decode_uint(&jwk.e, "e")?;
    let d = decode_uint(jwk.d.as_deref().ok_or_else(missing("d"))?, "d")?;
    let p = decode_uint(jwk.p.as_deref().ok_or_else(missing("p"))?, "p")?;
    let q = decode_uint(jwk.q.as_deref().ok_or_else(missing("q"))?, "q")?;

    if &p * &q != n {
        return Err(Error::InvalidEncoding(
            "jwk primes do not multiply to the modulus".into(),
        ));
    }

    // CRT parameters, when present, must agree with d and the primes
    let one = BigUint::from(1u8);
    if let Some(dp) = jwk.dp.as_deref() {
        if decode_uint(dp, "dp")? != &d % (&p - &one) {
            return Err(Error::InvalidEncoding("jwk dp is inconsistent".into()));
        }
    }
    if let Some(dq) = jwk.dq.as_deref() {
        if decode_uint(dq, "dq")? != &d % (&q - &one) {
            return Err(Error::InvalidEncoding("jwk dq is inconsistent".into()));
        }
    }
    if let Some(qi) = jwk.qi.as_deref() {
        let expected = mod_inverse(&q, &p)
            .ok_or_else(|| Error::InvalidEncoding("jwk q has no inverse mod p".into()))?;
        if decode_uint(qi, "qi")? != expected {
            return Err(Error::InvalidEncoding("jwk qi is inconsistent".into()));
        }
    }

    let key = RsaPrivateKey::from_components(n, e, d, vec![p, q])
        .map_err(|e| Error::InvalidEncoding(format!("invalid rsa key: {}", e)))?;
    key.validate()
        .map_err(|e| Error::InvalidEncoding(format!("invalid rsa key: {}", e)))?;
    Ok(key)
}

/// Serialize a private key as pretty-printed JWK JSON.
pub fn private_key_to_jwk_json(key: &RsaPrivateKey) -> Result<String> {
    let jwk = private_key_to_jwk(key)?;
    serde_json::to_string_pretty(&jwk)
        .map_err(|e| Error::InvalidEncoding(format!("jwk serialization failed: {}", e)))
}

/// Parse a private key from JWK JSON.
pub fn private_key_from_jwk_json(json: &str) -> Result<RsaPrivateKey> {
    let jwk: Jwk = serde_json::from_str(json)
        .map_err(|e| Error::InvalidEncoding(format!("invalid jwk json: {}", e)))?;
    jwk_to_private_key(&jwk)
}

fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    let inverse = value.mod_inverse(modulus)?;
    let modulus = BigInt::from(modulus.clone());
    let normalized = ((inverse % &modulus) + &modulus) % &modulus;
    normalized.to_biguint()
}

fn encode_uint(value: &BigUint) -> String {
    URL_SAFE_NO_PAD.encode(value.to_bytes_be())
}

fn decode_uint(value: &str, field: &str) -> Result<BigUint> {
    let bytes = URL_SAFE_NO_PAD
        .decode(value)
        .or_else(|_| URL_SAFE.decode(value))
        .map_err(|e| Error::InvalidEncoding(format!("jwk field {}: {}", field, e)))?;
    Ok(BigUint::from_bytes_be(&bytes))
}

fn missing(field: &'static str) -> impl Fn() -> Error {
    move || Error::InvalidEncoding(format!("jwk is missing private field {}", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keygen_sign_and_jwk_round_trip() {
        let key = generate_key(RsaKeySize::Rsa2048).unwrap();
        let public = key.to_public_key();

        // PSS signatures verify and are salted (two signatures differ)
        let sig1 = sign_pss(&key, b"arweave tx").unwrap();
        let sig2 = sign_pss(&key, b"arweave tx").unwrap();
        assert!(verify_pss(&public, b"arweave tx", &sig1));
        assert!(verify_pss(&public, b"arweave tx", &sig2));
        assert_ne!(sig1, sig2);
        assert!(!verify_pss(&public, b"other tx", &sig1));

        // JWK JSON round-trips to the same key
        let json = private_key_to_jwk_json(&key).unwrap();
        let restored = private_key_from_jwk_json(&json).unwrap();
        assert_eq!(restored.n(), key.n());
        assert_eq!(restored.d(), key.d());
        assert_eq!(restored.primes(), key.primes());

        // Owner field decodes back to the modulus
        let owner = get_arweave_owner(&public);
        let decoded = URL_SAFE_NO_PAD.decode(owner).unwrap();
        assert_eq!(decoded, modulus_bytes(&public));
    }

    #[test]
    fn test_jwk_rejects_inconsistent_primes() {
        let key = generate_key(RsaKeySize::Rsa2048).unwrap();
        let mut jwk = private_key_to_jwk(&key).unwrap();
        jwk.p = jwk.q.clone();
        assert!(matches!(
            jwk_to_private_key(&jwk),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_jwk_requires_rsa_kty() {
        let jwk = Jwk {
            kty: "EC".into(),
            n: String::new(),
            e: String::new(),
            d: None,
            p: None,
            q: None,
            dp: None,
            dq: None,
            qi: None,
        };
        assert!(jwk_to_private_key(&jwk).is_err());
    }
}
