//! Hash functions used by the derivation and address layers

use blake2::digest::{Update, VariableOutput};
use blake2::{Blake2b512, Blake2bVar};
use hmac::{Hmac, Mac};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Keccak256, Sha3_256};

/// SHA-256
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice (Bitcoin-style)
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// SHA-512
pub fn sha512(data: &[u8]) -> [u8; 64] {
    Sha512::digest(data).into()
}

/// RIPEMD-160
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(data).into()
}

/// RIPEMD-160 of SHA-256 (Bitcoin-style)
pub fn hash160(data: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(data))
}

/// Keccak-256 (Ethereum-style, pre-NIST padding)
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// SHA3-256 (NIST)
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    Sha3_256::digest(data).into()
}

/// Blake2b with a 20-byte digest (Tezos, Filecoin)
pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    blake2b_var::<20>(data)
}

/// Blake2b with a 28-byte digest (Cardano key hashes)
pub fn blake2b_224(data: &[u8]) -> [u8; 28] {
    blake2b_var::<28>(data)
}

/// Blake2b with a 32-byte digest (Sui)
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    blake2b_var::<32>(data)
}

/// Blake2b with a 4-byte digest (Filecoin address checksums)
pub fn blake2b_checksum(data: &[u8]) -> [u8; 4] {
    blake2b_var::<4>(data)
}

/// Blake2b-512 (SS58 checksums)
pub fn blake2b_512(data: &[u8]) -> [u8; 64] {
    use blake2::Digest;
    Blake2b512::digest(data).into()
}

fn blake2b_var<const N: usize>(data: &[u8]) -> [u8; N] {
    // Lengths are compile-time constants within Blake2b's 1..=64 range
    let mut hasher = Blake2bVar::new(N).expect("valid blake2b output size");
    hasher.update(data);
    let mut out = [0u8; N];
    hasher
        .finalize_variable(&mut out)
        .expect("output buffer matches digest size");
    out
}

/// HMAC-SHA-512 (RFC 2104)
pub fn hmac_sha512(key: &[u8], msg: &[u8]) -> [u8; 64] {
    let mut mac =
        <Hmac<Sha512> as Mac>::new_from_slice(key).expect("hmac accepts any key length");
    Mac::update(&mut mac, msg);
    mac.finalize().into_bytes().into()
}

/// First 4 bytes of double SHA-256, the Base58Check checksum
pub fn checksum4(data: &[u8]) -> [u8; 4] {
    let digest = double_sha256(data);
    [digest[0], digest[1], digest[2], digest[3]]
}

/// CRC-16/XModem (Stellar address checksums)
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &b in data {
        crc ^= (b as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// CRC-32/ISO-3309 (ICP principal checksums)
pub fn crc32_iso3309(data: &[u8]) -> u32 {
    let mut crc: u32 = 0xFFFF_FFFF;
    for &b in data {
        crc ^= b as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ 0xEDB8_8320;
            } else {
                crc >>= 1;
            }
        }
    }
    !crc
}
