//! BIP-44 multi-account hierarchy
//!
//! Structured `m/44'/coin'/account'/change/index` paths, the SLIP-44 coin
//! registry, and the wallet/account objects that drive bulk derivation.

mod account;
mod coin;
mod path;
mod wallet;

pub use account::{Account, DerivedAddressInfo};
pub use coin::{coin_info, coin_type_for_chain, list_coins, register_coin, CoinInfo, CoinType};
pub use path::{Bip44Path, EXTERNAL_CHAIN, INTERNAL_CHAIN, PURPOSE};
pub use wallet::Wallet;
