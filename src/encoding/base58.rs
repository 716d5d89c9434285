//! Base58 and Base58Check over the alphabets the supported chains use

use bs58::Alphabet;

use crate::crypto::hash::checksum4;
use crate::error::{Error, Result};

/// Encode with the Bitcoin alphabet.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode with the Bitcoin alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    decode_with(s, Alphabet::BITCOIN)
}

/// Encode with an explicit alphabet (Bitcoin, Ripple or Flickr).
pub fn encode_with(data: &[u8], alphabet: &'static Alphabet) -> String {
    bs58::encode(data).with_alphabet(alphabet).into_string()
}

/// Decode with an explicit alphabet.
pub fn decode_with(s: &str, alphabet: &'static Alphabet) -> Result<Vec<u8>> {
    bs58::decode(s)
        .with_alphabet(alphabet)
        .into_vec()
        .map_err(|e| Error::InvalidEncoding(format!("base58: {}", e)))
}

/// Base58Check with a single version byte: `base58(version ‖ payload ‖ checksum4)`.
pub fn check_encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = checksum4(&data);
    data.extend_from_slice(&checksum);
    encode(&data)
}

/// Decode Base58Check, returning the version byte and payload.
pub fn check_decode(s: &str) -> Result<(u8, Vec<u8>)> {
    let decoded = decode(s)?;
    if decoded.len() < 5 {
        return Err(Error::InvalidLength(format!(
            "base58check payload too short: {} bytes",
            decoded.len()
        )));
    }

    let (data, checksum) = decoded.split_at(decoded.len() - 4);
    if checksum != checksum4(data) {
        return Err(Error::ChecksumMismatch);
    }

    Ok((data[0], data[1..].to_vec()))
}

/// Base58Check with a multi-byte version prefix (Tezos-style).
pub fn check_encode_prefixed(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + 4);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = checksum4(&data);
    data.extend_from_slice(&checksum);
    encode(&data)
}

/// Decode Base58Check with a known multi-byte prefix length.
pub fn check_decode_prefixed(s: &str, prefix_len: usize) -> Result<(Vec<u8>, Vec<u8>)> {
    let decoded = decode(s)?;
    if decoded.len() < prefix_len + 4 {
        return Err(Error::InvalidLength(format!(
            "base58check payload too short: {} bytes",
            decoded.len()
        )));
    }

    let (data, checksum) = decoded.split_at(decoded.len() - 4);
    if checksum != checksum4(data) {
        return Err(Error::ChecksumMismatch);
    }

    Ok((data[..prefix_len].to_vec(), data[prefix_len..].to_vec()))
}
