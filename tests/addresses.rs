//! Factory-level address generation across the whole chain catalog

use hdwallet_core::address::ethereum::EvmCodec;
use hdwallet_core::crypto::{ed25519, secp256k1};
use hdwallet_core::{ChainId, Factory};

fn secp_keys() -> ([u8; 33], [u8; 65]) {
    let mut scalar = [0u8; 32];
    scalar[31] = 1;
    (
        secp256k1::public_from_private(&scalar).unwrap(),
        secp256k1::public_uncompressed_from_private(&scalar).unwrap(),
    )
}

fn ed_key() -> [u8; 32] {
    ed25519::public_from_seed(&[7u8; 32]).unwrap()
}

#[test]
fn test_known_vectors_through_factory() {
    let factory = Factory::new();
    let (compressed, uncompressed) = secp_keys();

    assert_eq!(
        factory.generate(ChainId::Bitcoin, &compressed).unwrap(),
        "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
    );
    assert_eq!(
        factory.generate(ChainId::Ethereum, &uncompressed).unwrap(),
        "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
    );

    let mut system_program = [0u8; 32];
    system_program[31] = 1;
    assert_eq!(
        factory.generate(ChainId::Solana, &system_program).unwrap(),
        "11111111111111111111111111111112"
    );
}

#[test]
fn test_secp256k1_chains_generate_and_validate() {
    let factory = Factory::new();
    let (compressed, uncompressed) = secp_keys();

    let compressed_chains = [
        ChainId::Bitcoin,
        ChainId::Litecoin,
        ChainId::Dogecoin,
        ChainId::BitcoinCash,
        ChainId::Zcash,
        ChainId::Ripple,
        ChainId::Cosmos,
        ChainId::BinanceBep2,
        ChainId::Sei,
        ChainId::Kaspa,
        ChainId::Stacks,
        ChainId::Eos,
        ChainId::Avalanche,
        ChainId::Hedera,
    ];
    for chain in compressed_chains {
        let addr = factory.generate(chain, &compressed).unwrap();
        assert!(factory.validate(chain, &addr), "{}: {}", chain, addr);
    }

    let uncompressed_chains = [
        ChainId::Ethereum,
        ChainId::Bsc,
        ChainId::Polygon,
        ChainId::Fantom,
        ChainId::Optimism,
        ChainId::Arbitrum,
        ChainId::VeChain,
        ChainId::Theta,
        ChainId::EthereumClassic,
        ChainId::Tron,
        ChainId::Filecoin,
        ChainId::Flow,
    ];
    for chain in uncompressed_chains {
        let addr = factory.generate(chain, &uncompressed).unwrap();
        assert!(factory.validate(chain, &addr), "{}: {}", chain, addr);
    }
}

#[test]
fn test_ed25519_chains_generate_and_validate() {
    let factory = Factory::new();
    let key = ed_key();

    for chain in [
        ChainId::Solana,
        ChainId::Stellar,
        ChainId::Algorand,
        ChainId::Cardano,
        ChainId::Near,
        ChainId::Aptos,
        ChainId::Sui,
        ChainId::Polkadot,
        ChainId::Tezos,
        ChainId::Icp,
    ] {
        let addr = factory.generate(chain, &key).unwrap();
        assert!(factory.validate(chain, &addr), "{}: {}", chain, addr);
    }

    // Monero needs the spend‖view concatenation
    let mut dual = [0u8; 64];
    dual[..32].copy_from_slice(&key);
    dual[32..].copy_from_slice(&ed25519::public_from_seed(&[8u8; 32]).unwrap());
    let monero = factory.generate(ChainId::Monero, &dual).unwrap();
    assert!(factory.validate(ChainId::Monero, &monero));
}

#[test]
fn test_decode_returns_codec_payload() {
    let factory = Factory::new();
    let (compressed, uncompressed) = secp_keys();
    let key = ed_key();

    // Key-carrying formats round-trip the key itself
    let solana = factory.generate(ChainId::Solana, &key).unwrap();
    assert_eq!(factory.decode(ChainId::Solana, &solana).unwrap().public_key, key);

    let stellar = factory.generate(ChainId::Stellar, &key).unwrap();
    assert_eq!(
        factory.decode(ChainId::Stellar, &stellar).unwrap().public_key,
        key
    );

    // Hash-based formats round-trip the hash payload
    let btc = factory.generate(ChainId::Bitcoin, &compressed).unwrap();
    assert_eq!(
        factory.decode(ChainId::Bitcoin, &btc).unwrap().public_key,
        hdwallet_core::crypto::hash::hash160(&compressed)
    );

    let eth = factory.generate(ChainId::Ethereum, &uncompressed).unwrap();
    assert_eq!(
        factory.decode(ChainId::Ethereum, &eth).unwrap().public_key,
        hdwallet_core::crypto::hash::keccak256(&uncompressed[1..])[12..]
    );
}

#[test]
fn test_eip55_case_flip_fails_checksum() {
    let factory = Factory::new();
    let (_, uncompressed) = secp_keys();
    let addr = factory.generate(ChainId::Ethereum, &uncompressed).unwrap();

    let evm = EvmCodec::new();
    assert!(evm.validate_checksum(&addr));

    // Flip the case of the first letter in the hex part
    let flipped: String = addr
        .char_indices()
        .map(|(i, c)| {
            if i >= 2 && c.is_ascii_alphabetic() {
                if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            } else {
                c
            }
        })
        .collect();
    assert_ne!(addr, flipped);
    assert!(!evm.validate_checksum(&flipped));
}

#[test]
fn test_cross_chain_addresses_do_not_validate() {
    let factory = Factory::new();
    let (compressed, _) = secp_keys();

    let btc = factory.generate(ChainId::Bitcoin, &compressed).unwrap();
    let cosmos = factory.generate(ChainId::Cosmos, &compressed).unwrap();

    assert!(!factory.validate(ChainId::Cosmos, &btc));
    assert!(!factory.validate(ChainId::Bitcoin, &cosmos));
    assert!(!factory.validate(ChainId::Ripple, &btc));
}

#[test]
fn test_chain_info_and_listing() {
    let factory = Factory::new();
    assert!(factory.supported_chains().len() >= 35);

    let info = hdwallet_core::address::chain_info(ChainId::Stellar).unwrap();
    assert_eq!(info.symbol, "XLM");
    assert!(hdwallet_core::address::list_all_chain_info().len() >= 35);
}
