//! The codec factory and the chain-info registry

use std::collections::HashMap;

use serde::Serialize;

use super::algorand::AlgorandCodec;
use super::aptos::AptosCodec;
use super::arweave::ArweaveCodec;
use super::avalanche::AvalancheCodec;
use super::bitcoin::BitcoinCodec;
use super::bitcoin_cash::BitcoinCashCodec;
use super::cardano::CardanoCodec;
use super::cosmos::CosmosCodec;
use super::dogecoin::DogecoinCodec;
use super::eos::EosCodec;
use super::ethereum::EvmCodec;
use super::filecoin::FilecoinCodec;
use super::flow::FlowCodec;
use super::hedera::HederaCodec;
use super::icp::IcpCodec;
use super::kaspa::KaspaCodec;
use super::litecoin::LitecoinCodec;
use super::monero::MoneroCodec;
use super::near::NearCodec;
use super::polkadot::PolkadotCodec;
use super::ripple::RippleCodec;
use super::solana::SolanaCodec;
use super::stacks::StacksCodec;
use super::stellar::StellarCodec;
use super::sui::SuiCodec;
use super::tezos::TezosCodec;
use super::tron::TronCodec;
use super::zcash::ZcashCodec;
use super::{AddressCodec, AddressInfo, ChainId};
use crate::error::{Error, Result};

/// Maps chain identifiers to codec instances.
///
/// Construction registers the full built-in catalog; additional codecs can
/// be registered afterwards.
pub struct Factory {
    codecs: HashMap<ChainId, Box<dyn AddressCodec>>,
}

impl Factory {
    /// A factory with every built-in codec registered.
    pub fn new() -> Self {
        let mut factory = Self {
            codecs: HashMap::new(),
        };
        factory.register_defaults();
        factory
    }

    fn register_defaults(&mut self) {
        use ChainId::*;

        // Bitcoin family
        self.register(Box::new(BitcoinCodec::new(false)));
        self.register(Box::new(LitecoinCodec::new(false)));
        self.register(Box::new(DogecoinCodec::new(false)));
        self.register(Box::new(BitcoinCashCodec::new(false)));
        self.register(Box::new(ZcashCodec::new(false)));

        // EVM family
        self.register(Box::new(EvmCodec::new()));
        for chain in [Bsc, Polygon, Fantom, Optimism, Arbitrum, VeChain, Theta, EthereumClassic]
        {
            self.register(Box::new(EvmCodec::for_chain(chain)));
        }
        self.register(Box::new(AvalancheCodec::new()));

        // Cosmos family
        self.register(Box::new(CosmosCodec::new()));
        self.register(Box::new(CosmosCodec::binance_bep2()));
        self.register(Box::new(CosmosCodec::sei()));

        // secp256k1 singletons
        self.register(Box::new(TronCodec::new(false)));
        self.register(Box::new(RippleCodec::new()));
        self.register(Box::new(KaspaCodec::new(false)));
        self.register(Box::new(StacksCodec::new(false)));
        self.register(Box::new(FilecoinCodec::new(false)));
        self.register(Box::new(EosCodec::new()));

        // Ed25519 chains
        self.register(Box::new(SolanaCodec::new()));
        self.register(Box::new(StellarCodec::new()));
        self.register(Box::new(AlgorandCodec::new()));
        self.register(Box::new(NearCodec::new()));
        self.register(Box::new(CardanoCodec::new(false)));
        self.register(Box::new(PolkadotCodec::new()));
        self.register(Box::new(AptosCodec::new()));
        self.register(Box::new(SuiCodec::new()));
        self.register(Box::new(TezosCodec::new()));
        self.register(Box::new(MoneroCodec::new(false)));
        self.register(Box::new(IcpCodec::new()));

        // Account-model chains
        self.register(Box::new(FlowCodec::new()));
        self.register(Box::new(HederaCodec::new()));

        // RSA
        self.register(Box::new(ArweaveCodec::new()));
    }

    /// Register a codec under its own chain id; replaces any existing one.
    pub fn register(&mut self, codec: Box<dyn AddressCodec>) {
        let chain = codec.chain_id();
        tracing::trace!(chain = %chain, "address codec registered");
        self.codecs.insert(chain, codec);
    }

    /// Look up the codec for a chain.
    pub fn get(&self, chain: ChainId) -> Result<&dyn AddressCodec> {
        self.codecs
            .get(&chain)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| Error::Unsupported(format!("no codec registered for {}", chain)))
    }

    /// Generate an address for a chain from a public key.
    pub fn generate(&self, chain: ChainId, public_key: &[u8]) -> Result<String> {
        self.get(chain)?.generate(public_key)
    }

    /// Validate an address for a chain; unknown chains are invalid.
    pub fn validate(&self, chain: ChainId, address: &str) -> bool {
        match self.get(chain) {
            Ok(codec) => codec.validate(address),
            Err(_) => false,
        }
    }

    /// Decode an address for a chain.
    pub fn decode(&self, chain: ChainId, address: &str) -> Result<AddressInfo> {
        self.get(chain)?.decode(address)
    }

    /// All chains with a registered codec.
    pub fn supported_chains(&self) -> Vec<ChainId> {
        self.codecs.keys().copied().collect()
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}

/// Display metadata for one supported chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainInfo {
    pub id: ChainId,
    pub name: &'static str,
    pub symbol: &'static str,
    pub address_format: &'static str,
    pub description: &'static str,
}

/// Metadata for a chain, if it is in the registry.
pub fn chain_info(chain: ChainId) -> Option<ChainInfo> {
    use ChainId::*;
    let (name, symbol, address_format, description) = match chain {
        Bitcoin => ("Bitcoin", "BTC", "Base58Check/Bech32", "P2PKH, P2SH, SegWit addresses"),
        Ethereum => ("Ethereum", "ETH", "Keccak256", "EIP-55 checksummed addresses"),
        Litecoin => ("Litecoin", "LTC", "Base58Check/Bech32", "Similar to Bitcoin with different prefixes"),
        Dogecoin => ("Dogecoin", "DOGE", "Base58Check", "Starts with 'D'"),
        Ripple => ("Ripple", "XRP", "Base58 (Ripple)", "Starts with 'r'"),
        Stellar => ("Stellar", "XLM", "Base32", "Starts with 'G'"),
        Cardano => ("Cardano", "ADA", "Bech32", "Starts with 'addr1'"),
        Polkadot => ("Polkadot", "DOT", "SS58", "Network-specific prefixes"),
        Solana => ("Solana", "SOL", "Base58", "32-byte public key"),
        Avalanche => ("Avalanche", "AVAX", "Bech32/Ethereum", "X/P-Chain: Bech32, C-Chain: Ethereum"),
        Cosmos => ("Cosmos", "ATOM", "Bech32", "Starts with 'cosmos'"),
        Tron => ("TRON", "TRX", "Base58Check", "Starts with 'T'"),
        Tezos => ("Tezos", "XTZ", "Base58Check", "Starts with 'tz'"),
        Monero => ("Monero", "XMR", "Base58", "95 characters, starts with '4'"),
        BitcoinCash => ("Bitcoin Cash", "BCH", "CashAddr", "Starts with 'bitcoincash:'"),
        Zcash => ("Zcash", "ZEC", "Base58Check", "Transparent: 't', Shielded: 'z'"),
        Bsc => ("BNB Smart Chain", "BNB", "Keccak256", "Same as Ethereum"),
        Polygon => ("Polygon", "MATIC", "Keccak256", "Same as Ethereum"),
        Fantom => ("Fantom", "FTM", "Keccak256", "Same as Ethereum"),
        Optimism => ("Optimism", "OP", "Keccak256", "Same as Ethereum"),
        Arbitrum => ("Arbitrum", "ARB", "Keccak256", "Same as Ethereum"),
        VeChain => ("VeChain", "VET", "Keccak256", "Same as Ethereum"),
        Theta => ("Theta", "THETA", "Keccak256", "Same as Ethereum"),
        EthereumClassic => ("Ethereum Classic", "ETC", "Keccak256", "Same as Ethereum"),
        BinanceBep2 => ("Binance Chain", "BNB", "Bech32", "Starts with 'bnb'"),
        Near => ("NEAR Protocol", "NEAR", "Hex/Named", "64 hex chars or named accounts"),
        Algorand => ("Algorand", "ALGO", "Base32", "58 characters"),
        Eos => ("EOS", "EOS", "Base58", "Public-key strings and account names"),
        Flow => ("Flow", "FLOW", "Hex", "8-byte network-assigned identifiers"),
        Aptos => ("Aptos", "APT", "Hex", "0x-prefixed, 64 hex chars"),
        Sui => ("Sui", "SUI", "Hex", "0x-prefixed, 64 hex chars"),
        Sei => ("Sei", "SEI", "Bech32/Ethereum", "Dual address system"),
        Stacks => ("Stacks", "STX", "c32check", "Starts with 'S'"),
        Filecoin => ("Filecoin", "FIL", "Base32", "f1 secp256k1 addresses"),
        Arweave => ("Arweave", "AR", "Base64URL", "SHA-256 of the RSA modulus"),
        Kaspa => ("Kaspa", "KAS", "Bech32", "Starts with 'kaspa:'"),
        Hedera => ("Hedera", "HBAR", "Account ID", "shard.realm.account or key alias"),
        Icp => ("Internet Computer", "ICP", "Base32", "Dashed principal text form"),
        Dash => return None,
    };

    Some(ChainInfo {
        id: chain,
        name,
        symbol,
        address_format,
        description,
    })
}

/// Metadata for every chain in the registry.
pub fn list_all_chain_info() -> Vec<ChainInfo> {
    ChainId::all()
        .iter()
        .filter_map(|&chain| chain_info(chain))
        .collect()
}
