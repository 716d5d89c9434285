//! CashAddr encoding (Bitcoin Cash)
//!
//! Base32 over the Bech32 charset with a 40-bit BCH checksum of 8 symbols.
//! The version byte carries the address type in its upper nibble and the
//! hash size class in its lower nibble.

use crate::error::{Error, Result};

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

/// Encode `version_byte ‖ hash` under the given prefix (`bitcoincash`,
/// `bchtest`).
pub fn encode(prefix: &str, version_byte: u8, hash: &[u8]) -> Result<String> {
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(version_byte);
    payload.extend_from_slice(hash);

    let data = bech32::convert_bits(&payload, 8, 5, true)
        .map_err(|e| Error::InvalidEncoding(format!("cashaddr: {}", e)))?;

    let checksum = create_checksum(prefix, &data);

    let mut out = String::with_capacity(prefix.len() + 1 + data.len() + 8);
    out.push_str(prefix);
    out.push(':');
    for symbol in data.iter().chain(checksum.iter()) {
        out.push(CHARSET[*symbol as usize] as char);
    }
    Ok(out)
}

/// Decode a CashAddr to `(prefix, version_byte, hash)`.
///
/// A missing prefix is treated as `bitcoincash`.
pub fn decode(address: &str) -> Result<(String, u8, Vec<u8>)> {
    let lower = address.to_lowercase();
    if lower != address && address.to_uppercase() != address {
        return Err(Error::InvalidEncoding("cashaddr: mixed case".into()));
    }

    let (prefix, data_part) = match lower.split_once(':') {
        Some((prefix, rest)) => (prefix.to_string(), rest),
        None => ("bitcoincash".to_string(), lower.as_str()),
    };

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.bytes() {
        let index = CHARSET
            .iter()
            .position(|&a| a == c)
            .ok_or_else(|| Error::InvalidEncoding(format!("cashaddr: invalid character '{}'", c as char)))?;
        data.push(index as u8);
    }

    if data.len() < 9 {
        return Err(Error::InvalidLength("cashaddr: data too short".into()));
    }

    let mut values = expand_prefix(&prefix);
    values.extend(data.iter().map(|&v| v as u64));
    if polymod(&values) != 0 {
        return Err(Error::ChecksumMismatch);
    }

    let payload = bech32::convert_bits(&data[..data.len() - 8], 5, 8, false)
        .map_err(|e| Error::InvalidEncoding(format!("cashaddr padding: {}", e)))?;
    if payload.is_empty() {
        return Err(Error::InvalidLength("cashaddr: empty payload".into()));
    }

    Ok((prefix, payload[0], payload[1..].to_vec()))
}

fn create_checksum(prefix: &str, data: &[u8]) -> [u8; 8] {
    let mut values = expand_prefix(prefix);
    values.extend(data.iter().map(|&v| v as u64));
    values.extend([0u64; 8]);

    let polymod = polymod(&values) ^ 1;
    let mut checksum = [0u8; 8];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((polymod >> (5 * (7 - i))) & 0x1F) as u8;
    }
    checksum
}

fn expand_prefix(prefix: &str) -> Vec<u64> {
    let mut values: Vec<u64> = prefix.bytes().map(|c| (c & 0x1F) as u64).collect();
    values.push(0);
    values
}

fn polymod(values: &[u64]) -> u64 {
    let mut chk: u64 = 1;
    for &value in values {
        let top = chk >> 35;
        chk = ((chk & 0x07_FFFF_FFFF) << 5) ^ value;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}
