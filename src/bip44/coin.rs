//! SLIP-44 coin types and the runtime coin registry

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};

use crate::address::ChainId;
use crate::error::{Error, Result};

/// A SLIP-44 coin type number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinType(pub u32);

impl CoinType {
    pub const BITCOIN: CoinType = CoinType(0);
    pub const TESTNET: CoinType = CoinType(1);
    pub const LITECOIN: CoinType = CoinType(2);
    pub const DOGECOIN: CoinType = CoinType(3);
    pub const DASH: CoinType = CoinType(5);
    pub const ETHEREUM: CoinType = CoinType(60);
    pub const ETHEREUM_CLASSIC: CoinType = CoinType(61);
    pub const COSMOS: CoinType = CoinType(118);
    pub const MONERO: CoinType = CoinType(128);
    pub const ZCASH: CoinType = CoinType(133);
    pub const RIPPLE: CoinType = CoinType(144);
    pub const BITCOIN_CASH: CoinType = CoinType(145);
    pub const STELLAR: CoinType = CoinType(148);
    pub const EOS: CoinType = CoinType(194);
    pub const TRON: CoinType = CoinType(195);
    pub const ICP: CoinType = CoinType(223);
    pub const ALGORAND: CoinType = CoinType(283);
    pub const POLKADOT: CoinType = CoinType(354);
    pub const NEAR: CoinType = CoinType(397);
    pub const FILECOIN: CoinType = CoinType(461);
    pub const ARWEAVE: CoinType = CoinType(472);
    pub const SOLANA: CoinType = CoinType(501);
    pub const FLOW: CoinType = CoinType(539);
    pub const APTOS: CoinType = CoinType(637);
    pub const BINANCE: CoinType = CoinType(714);
    pub const SUI: CoinType = CoinType(784);
    pub const POLYGON: CoinType = CoinType(966);
    pub const TEZOS: CoinType = CoinType(1729);
    pub const CARDANO: CoinType = CoinType(1815);
    pub const HEDERA: CoinType = CoinType(3030);
    pub const STACKS: CoinType = CoinType(5757);
    pub const AVALANCHE: CoinType = CoinType(9000);
    pub const KASPA: CoinType = CoinType(111111);

    /// The raw SLIP-44 number.
    pub fn value(self) -> u32 {
        self.0
    }
}

/// The SLIP-44 coin type for a chain identifier.
///
/// EVM chains without a widely used registration of their own share
/// Ethereum's coin type, matching common wallet behavior.
pub fn coin_type_for_chain(chain: ChainId) -> Result<CoinType> {
    use ChainId::*;
    let coin = match chain {
        Bitcoin => CoinType::BITCOIN,
        Litecoin => CoinType::LITECOIN,
        Dogecoin => CoinType::DOGECOIN,
        Dash => CoinType::DASH,
        Ethereum | Bsc | Fantom | Optimism | Arbitrum | VeChain | Theta => CoinType::ETHEREUM,
        EthereumClassic => CoinType::ETHEREUM_CLASSIC,
        Cosmos | Sei => CoinType::COSMOS,
        Monero => CoinType::MONERO,
        Zcash => CoinType::ZCASH,
        Ripple => CoinType::RIPPLE,
        BitcoinCash => CoinType::BITCOIN_CASH,
        Stellar => CoinType::STELLAR,
        Eos => CoinType::EOS,
        Tron => CoinType::TRON,
        Icp => CoinType::ICP,
        Algorand => CoinType::ALGORAND,
        Polkadot => CoinType::POLKADOT,
        Near => CoinType::NEAR,
        Filecoin => CoinType::FILECOIN,
        Arweave => CoinType::ARWEAVE,
        Solana => CoinType::SOLANA,
        Flow => CoinType::FLOW,
        Aptos => CoinType::APTOS,
        BinanceBep2 => CoinType::BINANCE,
        Sui => CoinType::SUI,
        Polygon => CoinType::POLYGON,
        Tezos => CoinType::TEZOS,
        Cardano => CoinType::CARDANO,
        Hedera => CoinType::HEDERA,
        Stacks => CoinType::STACKS,
        Avalanche => CoinType::AVALANCHE,
        Kaspa => CoinType::KASPA,
    };
    Ok(coin)
}

/// Metadata about a registered coin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinInfo {
    pub coin_type: CoinType,
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u8,
}

fn registry() -> &'static RwLock<HashMap<CoinType, CoinInfo>> {
    static REGISTRY: OnceLock<RwLock<HashMap<CoinType, CoinInfo>>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let defaults = [
            (CoinType::BITCOIN, "BTC", "Bitcoin", 8),
            (CoinType::TESTNET, "TEST", "Testnet (all coins)", 8),
            (CoinType::LITECOIN, "LTC", "Litecoin", 8),
            (CoinType::DOGECOIN, "DOGE", "Dogecoin", 8),
            (CoinType::DASH, "DASH", "Dash", 8),
            (CoinType::ETHEREUM, "ETH", "Ethereum", 18),
            (CoinType::ETHEREUM_CLASSIC, "ETC", "Ethereum Classic", 18),
            (CoinType::RIPPLE, "XRP", "Ripple", 6),
            (CoinType::BITCOIN_CASH, "BCH", "Bitcoin Cash", 8),
            (CoinType::STELLAR, "XLM", "Stellar", 7),
            (CoinType::TRON, "TRX", "Tron", 6),
            (CoinType::BINANCE, "BNB", "Binance", 8),
            (CoinType::SOLANA, "SOL", "Solana", 9),
            (CoinType::POLYGON, "MATIC", "Polygon", 18),
            (CoinType::AVALANCHE, "AVAX", "Avalanche", 18),
        ];

        RwLock::new(
            defaults
                .into_iter()
                .map(|(coin_type, symbol, name, decimals)| {
                    (
                        coin_type,
                        CoinInfo {
                            coin_type,
                            symbol,
                            name,
                            decimals,
                        },
                    )
                })
                .collect(),
        )
    })
}

/// Register a custom coin type; later registrations replace earlier ones.
pub fn register_coin(info: CoinInfo) {
    registry()
        .write()
        .expect("coin registry lock poisoned")
        .insert(info.coin_type, info);
}

/// Metadata for a coin type, if registered.
pub fn coin_info(coin_type: CoinType) -> Option<CoinInfo> {
    registry()
        .read()
        .expect("coin registry lock poisoned")
        .get(&coin_type)
        .cloned()
}

/// All registered coins, in unspecified order.
pub fn list_coins() -> Vec<CoinInfo> {
    registry()
        .read()
        .expect("coin registry lock poisoned")
        .values()
        .cloned()
        .collect()
}

/// Convenience for `Unsupported` on unknown chains at call sites that take
/// raw strings.
pub fn coin_type_for_chain_str(chain: &str) -> Result<CoinType> {
    let chain: ChainId = chain
        .parse()
        .map_err(|_| Error::Unsupported(format!("unknown chain: {}", chain)))?;
    coin_type_for_chain(chain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_mapping() {
        assert_eq!(
            coin_type_for_chain(ChainId::Bitcoin).unwrap(),
            CoinType::BITCOIN
        );
        assert_eq!(
            coin_type_for_chain(ChainId::Ethereum).unwrap(),
            CoinType(60)
        );
        assert_eq!(coin_type_for_chain(ChainId::Solana).unwrap(), CoinType(501));
        assert_eq!(coin_type_for_chain(ChainId::Bsc).unwrap(), CoinType(60));
    }

    #[test]
    fn test_unknown_chain_str_is_unsupported() {
        assert!(matches!(
            coin_type_for_chain_str("notachain"),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_registry_lookup_and_registration() {
        assert_eq!(coin_info(CoinType::BITCOIN).unwrap().symbol, "BTC");
        assert!(coin_info(CoinType(987654)).is_none());

        register_coin(CoinInfo {
            coin_type: CoinType(987654),
            symbol: "TST",
            name: "Test Coin",
            decimals: 4,
        });
        assert_eq!(coin_info(CoinType(987654)).unwrap().name, "Test Coin");
        assert!(list_coins().iter().any(|c| c.symbol == "TST"));
    }
}
