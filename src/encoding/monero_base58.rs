//! Monero's block-oriented Base58 variant
//!
//! Input is processed in 8-byte blocks, each encoded independently into a
//! fixed 11-symbol width; the final partial block uses a shorter width from
//! a fixed table. Blocks are left-padded with '1' (the zero symbol).

use crate::error::{Error, Result};

const ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const FULL_BLOCK_SIZE: usize = 8;
const FULL_ENCODED_SIZE: usize = 11;

/// Encoded width for each partial block size (index = byte count).
const ENCODED_SIZES: [usize; 9] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

/// Encode bytes with Monero's 8-byte-block Base58.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() / FULL_BLOCK_SIZE + 1) * FULL_ENCODED_SIZE);

    for chunk in data.chunks(FULL_BLOCK_SIZE) {
        let width = ENCODED_SIZES[chunk.len()];
        out.push_str(&encode_block(chunk, width));
    }

    out
}

/// Decode a Monero Base58 string.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len() * FULL_BLOCK_SIZE / FULL_ENCODED_SIZE + 1);

    for chunk in s.as_bytes().chunks(FULL_ENCODED_SIZE) {
        let size = decoded_size(chunk.len())?;
        let value = decode_block(chunk)?;
        if size < FULL_BLOCK_SIZE && value >> (8 * size) != 0 {
            return Err(Error::InvalidEncoding("monero base58: block overflow".into()));
        }
        out.extend_from_slice(&value.to_be_bytes()[FULL_BLOCK_SIZE - size..]);
    }

    Ok(out)
}

fn encode_block(block: &[u8], width: usize) -> String {
    let mut num: u64 = 0;
    for &b in block {
        num = num << 8 | b as u64;
    }

    let mut symbols = [b'1'; FULL_ENCODED_SIZE];
    let mut i = width;
    while num > 0 {
        i -= 1;
        symbols[i] = ALPHABET[(num % 58) as usize];
        num /= 58;
    }

    String::from_utf8(symbols[..width].to_vec()).expect("alphabet is ascii")
}

fn decode_block(block: &[u8]) -> Result<u64> {
    let mut num: u64 = 0;
    for &c in block {
        let value = ALPHABET
            .iter()
            .position(|&a| a == c)
            .ok_or_else(|| Error::InvalidEncoding(format!("monero base58: invalid character '{}'", c as char)))?;
        num = num
            .checked_mul(58)
            .and_then(|n| n.checked_add(value as u64))
            .ok_or_else(|| Error::InvalidEncoding("monero base58: block overflow".into()))?;
    }
    Ok(num)
}

fn decoded_size(encoded_len: usize) -> Result<usize> {
    ENCODED_SIZES
        .iter()
        .position(|&width| width == encoded_len)
        .filter(|&size| size > 0)
        .ok_or_else(|| {
            Error::InvalidLength(format!("monero base58: invalid block width {}", encoded_len))
        })
}
