//! c32check encoding (Stacks)
//!
//! Crockford Base32 with a leading `S`, a one-character version and a
//! 4-byte double-SHA-256 checksum over `version ‖ payload`.

use crate::crypto::hash::double_sha256;
use crate::encoding::base32::{self, Alphabet};
use crate::error::{Error, Result};

const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Encode `payload` under a version byte (< 32).
pub fn check_encode(version: u8, payload: &[u8]) -> Result<String> {
    if version >= 32 {
        return Err(Error::InvalidEncoding(format!(
            "c32 version out of range: {}",
            version
        )));
    }

    let mut versioned = Vec::with_capacity(1 + payload.len());
    versioned.push(version);
    versioned.extend_from_slice(payload);
    let checksum = &double_sha256(&versioned)[..4];

    let mut body = Vec::with_capacity(payload.len() + 4);
    body.extend_from_slice(payload);
    body.extend_from_slice(checksum);

    Ok(format!(
        "S{}{}",
        C32_ALPHABET[version as usize] as char,
        base32::encode(&body, Alphabet::Crockford)
    ))
}

/// Decode a c32check string to `(version, payload)`; case-insensitive.
pub fn check_decode(address: &str) -> Result<(u8, Vec<u8>)> {
    let bytes = address.as_bytes();
    if bytes.len() < 3 {
        return Err(Error::InvalidLength("c32: address too short".into()));
    }
    if bytes[0] != b'S' && bytes[0] != b's' {
        return Err(Error::InvalidEncoding("c32: missing S prefix".into()));
    }

    let version_char = bytes[1].to_ascii_uppercase();
    let version = C32_ALPHABET
        .iter()
        .position(|&c| c == version_char)
        .ok_or_else(|| Error::InvalidEncoding("c32: invalid version character".into()))?
        as u8;

    let decoded = base32::decode(&address[2..], Alphabet::Crockford)?;
    if decoded.len() < 4 {
        return Err(Error::InvalidLength("c32: payload too short".into()));
    }

    let (payload, checksum) = decoded.split_at(decoded.len() - 4);

    let mut versioned = Vec::with_capacity(1 + payload.len());
    versioned.push(version);
    versioned.extend_from_slice(payload);
    if checksum != &double_sha256(&versioned)[..4] {
        return Err(Error::ChecksumMismatch);
    }

    Ok((version, payload.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let hash = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let addr = check_encode(22, &hash).unwrap();
        assert!(addr.starts_with("SP"));

        let (version, payload) = check_decode(&addr).unwrap();
        assert_eq!(version, 22);
        assert_eq!(payload, hash);
    }

    #[test]
    fn test_decode_is_case_insensitive() {
        let addr = check_encode(26, &[3u8; 20]).unwrap();
        let (version, payload) = check_decode(&addr.to_ascii_lowercase()).unwrap();
        assert_eq!(version, 26);
        assert_eq!(payload, [3u8; 20]);
    }

    #[test]
    fn test_corruption_detected() {
        let addr = check_encode(22, &[7u8; 20]).unwrap();
        let mut corrupted = addr.into_bytes();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert_eq!(check_decode(&corrupted), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn test_version_out_of_range() {
        assert!(check_encode(32, &[0u8; 20]).is_err());
    }
}
