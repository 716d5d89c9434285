//! SS58 encoding (Polkadot / Substrate)
//!
//! `base58(prefix ‖ public_key ‖ checksum)` where the checksum is the first
//! two bytes of `blake2b-512("SS58PRE" ‖ prefix ‖ public_key)`. Network
//! prefixes below 64 use one byte, larger ones the two-byte packed form.

use crate::crypto::hash::blake2b_512;
use crate::encoding::base58;
use crate::error::{Error, Result};

const CHECKSUM_PREAMBLE: &[u8] = b"SS58PRE";
const MAX_PREFIX: u16 = 16383;

/// Encode a 32-byte public key under an SS58 network prefix.
pub fn encode(prefix: u16, public_key: &[u8]) -> Result<String> {
    if public_key.len() != 32 {
        return Err(Error::InvalidLength(format!(
            "ss58 public key must be 32 bytes, got {}",
            public_key.len()
        )));
    }
    if prefix > MAX_PREFIX {
        return Err(Error::InvalidEncoding(format!(
            "ss58 prefix out of range: {}",
            prefix
        )));
    }

    let prefix_bytes = encode_prefix(prefix);

    let mut preimage =
        Vec::with_capacity(CHECKSUM_PREAMBLE.len() + prefix_bytes.len() + public_key.len());
    preimage.extend_from_slice(CHECKSUM_PREAMBLE);
    preimage.extend_from_slice(&prefix_bytes);
    preimage.extend_from_slice(public_key);
    let checksum = &blake2b_512(&preimage)[..2];

    let mut data = Vec::with_capacity(prefix_bytes.len() + public_key.len() + 2);
    data.extend_from_slice(&prefix_bytes);
    data.extend_from_slice(public_key);
    data.extend_from_slice(checksum);

    Ok(base58::encode(&data))
}

/// Decode an SS58 address to `(prefix, public_key)`.
pub fn decode(address: &str) -> Result<(u16, [u8; 32])> {
    let decoded = base58::decode(address)?;
    if decoded.len() < 35 {
        return Err(Error::InvalidLength("ss58: address too short".into()));
    }

    let (prefix, prefix_len) = decode_prefix(&decoded)?;
    if decoded.len() != prefix_len + 32 + 2 {
        return Err(Error::InvalidLength(format!(
            "ss58: unexpected payload length {}",
            decoded.len()
        )));
    }

    let public_key: [u8; 32] = decoded[prefix_len..prefix_len + 32]
        .try_into()
        .expect("length checked above");

    let mut preimage = Vec::with_capacity(CHECKSUM_PREAMBLE.len() + prefix_len + 32);
    preimage.extend_from_slice(CHECKSUM_PREAMBLE);
    preimage.extend_from_slice(&decoded[..prefix_len + 32]);
    let expected = &blake2b_512(&preimage)[..2];

    if &decoded[prefix_len + 32..] != expected {
        return Err(Error::ChecksumMismatch);
    }

    Ok((prefix, public_key))
}

fn encode_prefix(prefix: u16) -> Vec<u8> {
    if prefix < 64 {
        vec![prefix as u8]
    } else {
        // Two-byte form: 0b01LLLLLL LLHHHHHH over the 14-bit prefix
        vec![
            (((prefix & 0x00FC) >> 2) | 0x40) as u8,
            ((prefix >> 8) | ((prefix & 0x0003) << 6)) as u8,
        ]
    }
}

fn decode_prefix(data: &[u8]) -> Result<(u16, usize)> {
    match data[0] {
        b if b < 64 => Ok((b as u16, 1)),
        b if b < 128 => {
            let lower = ((data[0] as u16 & 0x3F) << 2) | (data[1] as u16 >> 6);
            let upper = (data[1] as u16 & 0x3F) << 8;
            Ok((lower | upper, 2))
        }
        _ => Err(Error::InvalidEncoding("ss58: reserved prefix byte".into())),
    }
}
