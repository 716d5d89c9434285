//! Tests for the derivation pipeline against published vectors

use hdwallet_core::bip32::{ExtendedKey, MAINNET};
use hdwallet_core::bip39;
use hdwallet_core::bip44::CoinType;
use hdwallet_core::{slip10, Bip44Path, DerivationPath, Wallet};

const VECTOR_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon \
                               abandon abandon abandon abandon about";

#[test]
fn test_bip32_vector1_chain() {
    let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let master = ExtendedKey::master_from_seed(&seed, &MAINNET).unwrap();

    assert_eq!(
        master.to_string(),
        "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
    );
    assert_eq!(
        master.derive_path_str("m/0'").unwrap().to_string(),
        "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
    );
    assert_eq!(
        master.derive_path_str("m/0'/1").unwrap().to_string(),
        "xprv9wTYmMFdV23N2TdNG573QoEsfRrWKQgWeibmLntzniatZvR9BmLnvSxqu53Kw1UmYPxLgboyZQaXwTCg8MSY3H2EU4pWcQDnRnrVA1xe8fs"
    );
}

#[test]
fn test_bip39_to_ethereum_key() {
    let seed = bip39::mnemonic_to_seed(VECTOR_MNEMONIC, "");
    assert_eq!(
        hex::encode(*seed),
        "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
         9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
    );

    let wallet = Wallet::from_seed(&*seed).unwrap();
    let key = wallet.derive_key_str("m/44'/60'/0'/0/0").unwrap();
    assert_eq!(
        hex::encode(key.private_key_bytes().unwrap()),
        "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
    );
}

#[test]
fn test_mnemonic_entropy_round_trip() {
    for bits in [128usize, 160, 192, 224, 256] {
        let entropy = bip39::generate_entropy(bits).unwrap();
        let mnemonic = bip39::entropy_to_mnemonic(&entropy).unwrap();
        assert_eq!(bip39::mnemonic_to_entropy(&mnemonic).unwrap(), entropy);
    }
}

#[test]
fn test_extended_key_string_round_trip() {
    let wallet = Wallet::from_mnemonic(VECTOR_MNEMONIC, "").unwrap();
    for path in ["m", "m/0", "m/44'/0'/0'", "m/44'/60'/0'/0/7"] {
        let key = wallet.derive_key_str(path).unwrap();
        let reparsed: ExtendedKey = key.to_string().parse().unwrap();
        assert_eq!(reparsed.serialize(), key.serialize(), "path {}", path);
    }
}

#[test]
fn test_watch_only_derivation_matches() {
    let wallet = Wallet::from_mnemonic(VECTOR_MNEMONIC, "").unwrap();
    let account = wallet.derive_account(CoinType::BITCOIN, 0).unwrap();

    // An account xpub derives the same receive keys as the private account
    let watch_only = account.public_key();
    for index in 0..5u32 {
        let hot = account.derive_address(0, index).unwrap();
        let cold = watch_only.child(0).unwrap().child(index).unwrap();
        assert_eq!(hot.public_key_bytes(), cold.public_key_bytes());
        assert!(cold.private_key_bytes().is_none());
    }
}

#[test]
fn test_bip44_path_validation() {
    assert!(Bip44Path::parse("m/44'/60'/0'/0/0").is_ok());
    assert!(Bip44Path::parse("m/49'/0'/0'/0/0").is_err());
    assert!(Bip44Path::parse("m/44'/0'/0'/2/0").is_err());

    let path = DerivationPath::parse("m/0'/1h/2").unwrap();
    assert_eq!(path.indices(), &[0x8000_0000, 0x8000_0001, 2]);
}

#[test]
fn test_slip10_solana_flow() {
    let seed = bip39::mnemonic_to_seed(VECTOR_MNEMONIC, "");
    let key = slip10::derive_key_from_path_str(&*seed, "m/44'/501'/0'/0'").unwrap();

    // The leaf key seeds an Ed25519 keypair whose public key is the address
    let public = key.public_key();
    let address = hdwallet_core::Factory::new()
        .generate(hdwallet_core::ChainId::Solana, &public)
        .unwrap();
    assert!(hdwallet_core::Factory::new().validate(hdwallet_core::ChainId::Solana, &address));
}

#[test]
fn test_bulk_address_derivation() {
    let wallet = Wallet::from_mnemonic(VECTOR_MNEMONIC, "").unwrap();
    let addresses = wallet
        .derive_addresses(CoinType::ETHEREUM, 0, 0, 0, 10)
        .unwrap();
    assert_eq!(addresses.len(), 10);

    // Restartable: asking for a sub-range gives the same keys
    let tail = wallet
        .derive_addresses(CoinType::ETHEREUM, 0, 0, 5, 5)
        .unwrap();
    for (info, tail_info) in addresses[5..].iter().zip(tail.iter()) {
        assert_eq!(info.public_key, tail_info.public_key);
        assert_eq!(info.path, tail_info.path);
    }
}
