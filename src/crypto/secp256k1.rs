//! secp256k1 curve operations
//!
//! Thin byte-slice layer over the `secp256k1` crate covering the group
//! operations the extended-key engine needs: scalar validation and
//! addition mod n, public-key derivation, SEC1 compression and
//! decompression, and affine point addition.

use secp256k1::{PublicKey, Scalar, Secp256k1, SecretKey};

use crate::error::{Error, Result};

/// Returns true if `key` is a valid private scalar: 32 bytes, 0 < k < n.
pub fn is_valid_private(key: &[u8]) -> bool {
    key.len() == 32 && SecretKey::from_slice(key).is_ok()
}

/// (k1 + k2) mod n, left-padded to 32 bytes.
///
/// Fails with `DerivationFailed` if either operand is out of range or the
/// sum is zero.
pub fn add_private(k1: &[u8], k2: &[u8]) -> Result<[u8; 32]> {
    let key = SecretKey::from_slice(k1)
        .map_err(|e| Error::DerivationFailed(format!("invalid scalar: {}", e)))?;
    let tweak = SecretKey::from_slice(k2)
        .map_err(|e| Error::DerivationFailed(format!("invalid scalar: {}", e)))?;

    let sum = key
        .add_tweak(&Scalar::from(tweak))
        .map_err(|e| Error::DerivationFailed(format!("scalar addition: {}", e)))?;

    Ok(sum.secret_bytes())
}

/// 33-byte compressed public key for a private scalar.
pub fn public_from_private(key: &[u8]) -> Result<[u8; 33]> {
    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(key)
        .map_err(|e| Error::DerivationFailed(format!("invalid private key: {}", e)))?;
    Ok(PublicKey::from_secret_key(&secp, &secret).serialize())
}

/// 65-byte uncompressed public key for a private scalar.
pub fn public_uncompressed_from_private(key: &[u8]) -> Result<[u8; 65]> {
    let secp = Secp256k1::new();
    let secret = SecretKey::from_slice(key)
        .map_err(|e| Error::DerivationFailed(format!("invalid private key: {}", e)))?;
    Ok(PublicKey::from_secret_key(&secp, &secret).serialize_uncompressed())
}

/// Compress a SEC1 public key (33 or 65 bytes) to its 33-byte form.
pub fn compress(public_key: &[u8]) -> Result<[u8; 33]> {
    let point = parse_point(public_key)?;
    Ok(point.serialize())
}

/// Decompress a 33-byte SEC1 public key to its 65-byte form.
///
/// Fails if the x coordinate has no square root on the curve or the
/// prefix byte is not 0x02/0x03.
pub fn decompress(public_key: &[u8]) -> Result<[u8; 65]> {
    if public_key.len() != 33 {
        return Err(Error::InvalidLength(format!(
            "compressed public key must be 33 bytes, got {}",
            public_key.len()
        )));
    }
    let point = parse_point(public_key)?;
    Ok(point.serialize_uncompressed())
}

/// Affine point addition; both inputs in SEC1 form (33 or 65 bytes).
///
/// Fails with `DerivationFailed` when the sum is the point at infinity.
pub fn add_points(p: &[u8], q: &[u8]) -> Result<[u8; 33]> {
    let p = parse_point(p)?;
    let q = parse_point(q)?;
    let sum = p
        .combine(&q)
        .map_err(|_| Error::DerivationFailed("point addition yielded infinity".into()))?;
    Ok(sum.serialize())
}

fn parse_point(data: &[u8]) -> Result<PublicKey> {
    PublicKey::from_slice(data)
        .map_err(|e| Error::DerivationFailed(format!("invalid public key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GX_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    #[test]
    fn test_is_valid_private() {
        assert!(!is_valid_private(&[0u8; 32]));
        assert!(is_valid_private(&{
            let mut one = [0u8; 32];
            one[31] = 1;
            one
        }));
        // Group order n is out of range
        let n = hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")
            .unwrap();
        assert!(!is_valid_private(&n));
        assert!(!is_valid_private(&[1u8; 31]));
    }

    #[test]
    fn test_public_from_private_one_is_generator() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let public = public_from_private(&one).unwrap();
        assert_eq!(hex::encode(public), GX_COMPRESSED);
    }

    #[test]
    fn test_compress_decompress_round_trip() {
        let compressed = hex::decode(GX_COMPRESSED).unwrap();
        let uncompressed = decompress(&compressed).unwrap();
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(compress(&uncompressed).unwrap().to_vec(), compressed);
    }

    #[test]
    fn test_add_private_matches_point_addition() {
        // (1 + 2)·G must equal G + 2·G
        let mut one = [0u8; 32];
        one[31] = 1;
        let mut two = [0u8; 32];
        two[31] = 2;

        let three = add_private(&one, &two).unwrap();
        let left = public_from_private(&three).unwrap();

        let g = public_from_private(&one).unwrap();
        let g2 = public_from_private(&two).unwrap();
        let right = add_points(&g, &g2).unwrap();

        assert_eq!(left, right);
    }

    #[test]
    fn test_add_points_inverse_is_infinity() {
        // G + (-G) has no affine representation
        let mut one = [0u8; 32];
        one[31] = 1;
        let g = public_from_private(&one).unwrap();

        // n - 1 is the negation of 1
        let n_minus_1 =
            hex::decode("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140")
                .unwrap();
        let neg_g = public_from_private(&n_minus_1).unwrap();

        assert!(matches!(
            add_points(&g, &neg_g),
            Err(Error::DerivationFailed(_))
        ));
    }

    #[test]
    fn test_decompress_rejects_bad_prefix() {
        let mut bad = hex::decode(GX_COMPRESSED).unwrap();
        bad[0] = 0x05;
        assert!(decompress(&bad).is_err());
    }
}
