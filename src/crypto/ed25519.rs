//! Ed25519 signing and key expansion (RFC 8032)

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

use crate::error::{Error, Result};

/// Expand a 32-byte seed into its Ed25519 public key.
pub fn public_from_seed(seed: &[u8]) -> Result<[u8; 32]> {
    let signing = signing_key(seed)?;
    Ok(signing.verifying_key().to_bytes())
}

/// Sign a message with the key expanded from a 32-byte seed.
pub fn sign(seed: &[u8], message: &[u8]) -> Result<[u8; 64]> {
    let signing = signing_key(seed)?;
    Ok(signing.sign(message).to_bytes())
}

/// Verify a 64-byte signature against a 32-byte public key.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let Ok(key_bytes) = <[u8; 32]>::try_from(public_key) else {
        return false;
    };
    let Ok(verifying) = VerifyingKey::from_bytes(&key_bytes) else {
        return false;
    };
    let Ok(sig_bytes) = <[u8; 64]>::try_from(signature) else {
        return false;
    };
    verifying
        .verify(message, &Signature::from_bytes(&sig_bytes))
        .is_ok()
}

fn signing_key(seed: &[u8]) -> Result<SigningKey> {
    let bytes: [u8; 32] = seed.try_into().map_err(|_| {
        Error::InvalidLength(format!("ed25519 seed must be 32 bytes, got {}", seed.len()))
    })?;
    Ok(SigningKey::from_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc8032_test_1() {
        // RFC 8032 §7.1, TEST 1: empty message
        let seed =
            hex::decode("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60")
                .unwrap();
        let public = public_from_seed(&seed).unwrap();
        assert_eq!(
            hex::encode(public),
            "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
        );

        let signature = sign(&seed, b"").unwrap();
        assert_eq!(
            hex::encode(signature),
            "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
             5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
        );
        assert!(verify(&public, b"", &signature));
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let seed = [7u8; 32];
        let public = public_from_seed(&seed).unwrap();
        let mut signature = sign(&seed, b"payload").unwrap();
        assert!(verify(&public, b"payload", &signature));

        signature[0] ^= 1;
        assert!(!verify(&public, b"payload", &signature));
        assert!(!verify(&public, b"other payload", &sign(&seed, b"payload").unwrap()));
    }

    #[test]
    fn test_seed_length_checked() {
        assert!(public_from_seed(&[0u8; 31]).is_err());
        assert!(sign(&[0u8; 33], b"x").is_err());
    }
}
