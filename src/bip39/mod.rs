//! BIP-39 mnemonic codec
//!
//! Reversible encoding between raw entropy and a checksum-bearing word
//! sequence, plus PBKDF2-HMAC-SHA-512 seed derivation. The seed step uses
//! the mnemonic string verbatim; no unicode normalization is applied.

pub mod wordlist;

use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha512;
use zeroize::Zeroizing;

use crate::crypto::hash::sha256;
use crate::error::{Error, Result};

/// Valid entropy sizes in bits.
pub const VALID_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Valid mnemonic lengths in words.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// PBKDF2 iteration count for seed derivation.
pub const SEED_ITERATIONS: u32 = 2048;

/// Size of the derived seed in bytes.
pub const SEED_SIZE: usize = 64;

/// Generate random entropy of the given bit length from the platform CSPRNG.
pub fn generate_entropy(bits: usize) -> Result<Vec<u8>> {
    if !VALID_ENTROPY_BITS.contains(&bits) {
        return Err(Error::InvalidLength(format!(
            "entropy must be 128/160/192/224/256 bits, got {}",
            bits
        )));
    }

    let mut entropy = vec![0u8; bits / 8];
    OsRng
        .try_fill_bytes(&mut entropy)
        .map_err(|e| Error::Io(format!("csprng failure: {}", e)))?;
    Ok(entropy)
}

/// Encode entropy as a mnemonic phrase.
///
/// The checksum is the leading `bits/32` bits of `SHA-256(entropy)`; the
/// combined bit stream maps to 11-bit word indices.
pub fn entropy_to_mnemonic(entropy: &[u8]) -> Result<String> {
    let entropy_bits = entropy.len() * 8;
    if !VALID_ENTROPY_BITS.contains(&entropy_bits) {
        return Err(Error::InvalidLength(format!(
            "entropy must be 128/160/192/224/256 bits, got {}",
            entropy_bits
        )));
    }

    let checksum_bits = entropy_bits / 32;
    let hash = sha256(entropy);

    let mut bits = Vec::with_capacity(entropy_bits + checksum_bits);
    for i in 0..entropy_bits {
        bits.push(entropy[i / 8] >> (7 - i % 8) & 1 == 1);
    }
    for i in 0..checksum_bits {
        bits.push(hash[0] >> (7 - i) & 1 == 1);
    }

    let words: Vec<&str> = bits
        .chunks(11)
        .map(|chunk| {
            let index = chunk
                .iter()
                .fold(0usize, |acc, &bit| acc << 1 | bit as usize);
            wordlist::word_at(index)
        })
        .collect();

    Ok(words.join(" "))
}

/// Decode a mnemonic phrase back to its entropy.
pub fn mnemonic_to_entropy(mnemonic: &str) -> Result<Vec<u8>> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    if !VALID_WORD_COUNTS.contains(&words.len()) {
        return Err(Error::InvalidLength(format!(
            "mnemonic must be 12/15/18/21/24 words, got {}",
            words.len()
        )));
    }

    let mut bits = Vec::with_capacity(words.len() * 11);
    for word in words {
        let index =
            wordlist::index_of(word).ok_or_else(|| Error::UnknownWord(word.to_string()))?;
        for shift in (0..11).rev() {
            bits.push(index >> shift & 1 == 1);
        }
    }

    let checksum_bits = bits.len() / 33;
    let entropy_bits = bits.len() - checksum_bits;

    let mut entropy = vec![0u8; entropy_bits / 8];
    for (i, &bit) in bits[..entropy_bits].iter().enumerate() {
        if bit {
            entropy[i / 8] |= 1 << (7 - i % 8);
        }
    }

    let hash = sha256(&entropy);
    for (i, &bit) in bits[entropy_bits..].iter().enumerate() {
        if bit != (hash[0] >> (7 - i) & 1 == 1) {
            return Err(Error::InvalidChecksumBits);
        }
    }

    Ok(entropy)
}

/// Check whether a mnemonic phrase is well-formed with a valid checksum.
pub fn validate_mnemonic(mnemonic: &str) -> bool {
    mnemonic_to_entropy(mnemonic).is_ok()
}

/// Derive the 64-byte seed: PBKDF2-HMAC-SHA-512 over the mnemonic with
/// salt `"mnemonic" ‖ passphrase` and 2048 iterations.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Zeroizing<[u8; SEED_SIZE]> {
    let salt = format!("mnemonic{}", passphrase);
    let mut seed = Zeroizing::new([0u8; SEED_SIZE]);
    pbkdf2::pbkdf2::<Hmac<Sha512>>(
        mnemonic.as_bytes(),
        salt.as_bytes(),
        SEED_ITERATIONS,
        &mut *seed,
    )
    .expect("hmac accepts any key length");
    seed
}

/// Generate a fresh random mnemonic of the given entropy size.
pub fn generate_mnemonic(bits: usize) -> Result<String> {
    let entropy = generate_entropy(bits)?;
    entropy_to_mnemonic(&entropy)
}

/// Generate a fresh mnemonic and its derived seed in one step.
pub fn mnemonic_and_seed(
    bits: usize,
    passphrase: &str,
) -> Result<(String, Zeroizing<[u8; SEED_SIZE]>)> {
    let mnemonic = generate_mnemonic(bits)?;
    let seed = mnemonic_to_seed(&mnemonic, passphrase);
    Ok((mnemonic, seed))
}
