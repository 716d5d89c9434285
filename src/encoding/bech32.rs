//! Bech32 / Bech32m and the SegWit witness layer (BIP-173 / BIP-350)

use bech32::{self, u5, FromBase32, ToBase32};
pub use bech32::Variant;

use crate::error::{Error, Result};

/// Encode 8-bit data under `hrp` with the given checksum variant.
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String> {
    bech32::encode(hrp, data.to_base32(), variant)
        .map_err(|e| Error::InvalidEncoding(format!("bech32: {}", e)))
}

/// Decode a Bech32/Bech32m string to `(hrp, bytes, variant)`.
///
/// Mixed-case input and dangling padding bits are rejected.
pub fn decode(s: &str) -> Result<(String, Vec<u8>, Variant)> {
    let (hrp, data, variant) = raw_decode(s)?;
    let bytes = Vec::<u8>::from_base32(&data)
        .map_err(|e| Error::InvalidEncoding(format!("bech32 padding: {}", e)))?;
    Ok((hrp, bytes, variant))
}

/// Encode a SegWit address: the witness version rides as one extra 5-bit
/// symbol ahead of the program. Version 0 uses Bech32, 1..=16 Bech32m.
pub fn segwit_encode(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String> {
    if witness_version > 16 {
        return Err(Error::InvalidEncoding(format!(
            "invalid witness version: {}",
            witness_version
        )));
    }

    let variant = if witness_version == 0 {
        Variant::Bech32
    } else {
        Variant::Bech32m
    };

    let mut data = vec![u5::try_from_u8(witness_version)
        .map_err(|e| Error::InvalidEncoding(format!("bech32: {}", e)))?];
    data.extend(program.to_base32());

    bech32::encode(hrp, data, variant).map_err(|e| Error::InvalidEncoding(format!("bech32: {}", e)))
}

/// Decode a SegWit address to `(hrp, witness_version, program)`.
///
/// The checksum variant must match the witness version.
pub fn segwit_decode(s: &str) -> Result<(String, u8, Vec<u8>)> {
    let (hrp, data, variant) = raw_decode(s)?;
    if data.is_empty() {
        return Err(Error::InvalidEncoding("segwit: empty data".into()));
    }

    let witness_version = data[0].to_u8();
    match (witness_version, variant) {
        (0, Variant::Bech32) | (1..=16, Variant::Bech32m) => {}
        _ => {
            return Err(Error::InvalidEncoding(format!(
                "segwit: checksum variant does not match witness version {}",
                witness_version
            )))
        }
    }

    let program = Vec::<u8>::from_base32(&data[1..])
        .map_err(|e| Error::InvalidEncoding(format!("bech32 padding: {}", e)))?;
    Ok((hrp, witness_version, program))
}

fn raw_decode(s: &str) -> Result<(String, Vec<u5>, Variant)> {
    bech32::decode(s).map_err(|e| match e {
        bech32::Error::InvalidChecksum => Error::ChecksumMismatch,
        other => Error::InvalidEncoding(format!("bech32: {}", other)),
    })
}
