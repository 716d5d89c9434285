//! Text encodings for addresses and serialized keys
//!
//! Each codec here is pure and stateless; the address layer composes them
//! with the hash primitives to build chain-specific formats.

pub mod base32;
pub mod base58;
pub mod bech32;
pub mod c32;
pub mod cashaddr;
pub mod monero_base58;
pub mod ss58;
