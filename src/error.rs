//! Error types

use thiserror::Error;

/// Custom error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A byte slice has the wrong size (seed, entropy, public key, modulus)
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Text input contains bytes outside the codec alphabet, or the
    /// structure is malformed (mixed case, missing separator, bad version)
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A trailing checksum does not match the payload
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// A mnemonic word is not in the word list
    #[error("unknown word: {0}")]
    UnknownWord(String),

    /// Mnemonic checksum bits do not match the entropy
    #[error("mnemonic checksum bits do not match entropy")]
    InvalidChecksumBits,

    /// Scalar out of range or point addition yielded infinity
    #[error("key derivation failed: {0}")]
    DerivationFailed(String),

    /// Hardened derivation was attempted on a public-only key
    #[error("cannot derive a hardened child from a public key")]
    HardenedFromPublic,

    /// Bad derivation-path syntax
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),

    /// Codec-level address validation failure
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Factory lookup miss, or a key type a codec does not support
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Platform CSPRNG failure
    #[error("io error: {0}")]
    Io(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
