//! Chain-specific address codecs
//!
//! One module per chain or chain family, each exposing generation,
//! validation and (for most chains) decoding over a shared trait. The
//! [`Factory`] maps chain identifiers to codec instances.

pub mod algorand;
pub mod aptos;
pub mod arweave;
pub mod avalanche;
pub mod bitcoin;
pub mod bitcoin_cash;
pub mod cardano;
pub mod cosmos;
pub mod dogecoin;
pub mod eos;
pub mod ethereum;
mod factory;
pub mod filecoin;
pub mod flow;
pub mod hedera;
pub mod icp;
pub mod kaspa;
pub mod litecoin;
pub mod monero;
pub mod near;
pub mod polkadot;
pub mod ripple;
pub mod solana;
pub mod stacks;
pub mod stellar;
pub mod sui;
pub mod tezos;
pub mod tron;
pub mod zcash;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use factory::{chain_info, list_all_chain_info, ChainInfo, Factory};

/// Identifier of a supported blockchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    #[serde(rename = "btc")]
    Bitcoin,
    #[serde(rename = "eth")]
    Ethereum,
    #[serde(rename = "ltc")]
    Litecoin,
    #[serde(rename = "doge")]
    Dogecoin,
    #[serde(rename = "xrp")]
    Ripple,
    #[serde(rename = "xlm")]
    Stellar,
    #[serde(rename = "ada")]
    Cardano,
    #[serde(rename = "dot")]
    Polkadot,
    #[serde(rename = "sol")]
    Solana,
    #[serde(rename = "avax")]
    Avalanche,
    #[serde(rename = "atom")]
    Cosmos,
    #[serde(rename = "trx")]
    Tron,
    #[serde(rename = "xtz")]
    Tezos,
    #[serde(rename = "xmr")]
    Monero,
    #[serde(rename = "bch")]
    BitcoinCash,
    #[serde(rename = "zec")]
    Zcash,
    #[serde(rename = "bsc")]
    Bsc,
    #[serde(rename = "matic")]
    Polygon,
    #[serde(rename = "ftm")]
    Fantom,
    #[serde(rename = "op")]
    Optimism,
    #[serde(rename = "arb")]
    Arbitrum,
    #[serde(rename = "vet")]
    VeChain,
    #[serde(rename = "theta")]
    Theta,
    #[serde(rename = "etc")]
    EthereumClassic,
    #[serde(rename = "bnb")]
    BinanceBep2,
    #[serde(rename = "near")]
    Near,
    #[serde(rename = "algo")]
    Algorand,
    #[serde(rename = "eos")]
    Eos,
    #[serde(rename = "flow")]
    Flow,
    #[serde(rename = "apt")]
    Aptos,
    #[serde(rename = "sui")]
    Sui,
    #[serde(rename = "sei")]
    Sei,
    #[serde(rename = "stx")]
    Stacks,
    #[serde(rename = "fil")]
    Filecoin,
    #[serde(rename = "ar")]
    Arweave,
    #[serde(rename = "kas")]
    Kaspa,
    #[serde(rename = "hbar")]
    Hedera,
    #[serde(rename = "icp")]
    Icp,
    #[serde(rename = "dash")]
    Dash,
}

impl ChainId {
    /// The short ticker-style identifier.
    pub fn as_str(self) -> &'static str {
        use ChainId::*;
        match self {
            Bitcoin => "btc",
            Ethereum => "eth",
            Litecoin => "ltc",
            Dogecoin => "doge",
            Ripple => "xrp",
            Stellar => "xlm",
            Cardano => "ada",
            Polkadot => "dot",
            Solana => "sol",
            Avalanche => "avax",
            Cosmos => "atom",
            Tron => "trx",
            Tezos => "xtz",
            Monero => "xmr",
            BitcoinCash => "bch",
            Zcash => "zec",
            Bsc => "bsc",
            Polygon => "matic",
            Fantom => "ftm",
            Optimism => "op",
            Arbitrum => "arb",
            VeChain => "vet",
            Theta => "theta",
            EthereumClassic => "etc",
            BinanceBep2 => "bnb",
            Near => "near",
            Algorand => "algo",
            Eos => "eos",
            Flow => "flow",
            Aptos => "apt",
            Sui => "sui",
            Sei => "sei",
            Stacks => "stx",
            Filecoin => "fil",
            Arweave => "ar",
            Kaspa => "kas",
            Hedera => "hbar",
            Icp => "icp",
            Dash => "dash",
        }
    }

    /// Every chain identifier the crate knows about.
    pub fn all() -> &'static [ChainId] {
        use ChainId::*;
        &[
            Bitcoin,
            Ethereum,
            Litecoin,
            Dogecoin,
            Ripple,
            Stellar,
            Cardano,
            Polkadot,
            Solana,
            Avalanche,
            Cosmos,
            Tron,
            Tezos,
            Monero,
            BitcoinCash,
            Zcash,
            Bsc,
            Polygon,
            Fantom,
            Optimism,
            Arbitrum,
            VeChain,
            Theta,
            EthereumClassic,
            BinanceBep2,
            Near,
            Algorand,
            Eos,
            Flow,
            Aptos,
            Sui,
            Sei,
            Stacks,
            Filecoin,
            Arweave,
            Kaspa,
            Hedera,
            Icp,
            Dash,
        ]
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChainId::all()
            .iter()
            .find(|chain| chain.as_str() == s)
            .copied()
            .ok_or_else(|| Error::Unsupported(format!("unknown chain: {}", s)))
    }
}

/// The wire format family an address uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    P2pkh,
    P2sh,
    Segwit,
    Ethereum,
    Bech32,
    Base58Check,
    Base58,
    Base32,
    Ss58,
    CashAddr,
    Hex,
    AccountId,
}

/// The result of decoding an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    /// The address as given.
    pub address: String,
    /// The codec-level payload. A public key for formats that carry one
    /// (Solana, Stellar, NEAR), a hash for hash-based formats (Bitcoin,
    /// Cosmos, Tezos), principal bytes for ICP. Not always a curve point.
    pub public_key: Vec<u8>,
    /// Which chain the address belongs to.
    pub chain_id: ChainId,
    /// Format family.
    pub address_type: AddressType,
    /// Leading version byte where the format has one, otherwise 0.
    pub version: u8,
}

/// The capability set every chain codec implements.
pub trait AddressCodec: Send + Sync {
    /// Render a public key (or key pair, or modulus) as an address.
    fn generate(&self, public_key: &[u8]) -> Result<String>;

    /// Whether an address is well-formed for this chain.
    fn validate(&self, address: &str) -> bool;

    /// The chain this codec serves.
    fn chain_id(&self) -> ChainId;

    /// Decode an address into its payload.
    fn decode(&self, address: &str) -> Result<AddressInfo> {
        Err(Error::Unsupported(format!(
            "decode not supported for {}",
            self.chain_id()
        )))
    }

    /// A human-readable label for the address's format variant.
    fn address_type(&self, address: &str) -> Result<String> {
        let _ = address;
        Err(Error::Unsupported(format!(
            "address_type not supported for {}",
            self.chain_id()
        )))
    }
}
