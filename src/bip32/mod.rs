//! BIP-32 hierarchical deterministic key derivation
//!
//! Extended keys over secp256k1: master-from-seed, hardened and
//! non-hardened child derivation, neutering, and the 78-byte serialized
//! form with its Base58Check string rendering.

mod key;
mod network;
mod path;

pub use key::ExtendedKey;
pub use network::{Network, MAINNET, TESTNET};
pub use path::{harden, is_hardened, DerivationPath, HARDENED_OFFSET};
