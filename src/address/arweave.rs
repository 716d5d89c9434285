//! Arweave addresses: Base64URL of the SHA-256 of the RSA modulus

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use super::{AddressCodec, AddressInfo, AddressType, ChainId};
use crate::crypto::hash::sha256;
use crate::error::{Error, Result};

const ADDRESS_LEN: usize = 43;
const MIN_MODULUS_LEN: usize = 256;

/// Arweave address codec. The "public key" input is the raw big-endian
/// RSA modulus.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArweaveCodec;

impl ArweaveCodec {
    pub fn new() -> Self {
        Self
    }

    /// Transaction ids share the address format.
    pub fn is_valid_transaction_id(&self, tx_id: &str) -> bool {
        self.validate(tx_id)
    }
}

impl AddressCodec for ArweaveCodec {
    fn generate(&self, modulus: &[u8]) -> Result<String> {
        if modulus.len() < MIN_MODULUS_LEN {
            return Err(Error::InvalidLength(format!(
                "rsa modulus must be at least {} bytes, got {}",
                MIN_MODULUS_LEN,
                modulus.len()
            )));
        }
        Ok(URL_SAFE_NO_PAD.encode(sha256(modulus)))
    }

    fn validate(&self, address: &str) -> bool {
        if address.len() != ADDRESS_LEN {
            return false;
        }
        matches!(URL_SAFE_NO_PAD.decode(address), Ok(decoded) if decoded.len() == 32)
    }

    fn chain_id(&self) -> ChainId {
        ChainId::Arweave
    }

    fn decode(&self, address: &str) -> Result<AddressInfo> {
        if !self.validate(address) {
            return Err(Error::InvalidAddress(address.to_string()));
        }

        let decoded = URL_SAFE_NO_PAD
            .decode(address)
            .map_err(|e| Error::InvalidEncoding(format!("base64url: {}", e)))?;

        Ok(AddressInfo {
            address: address.to_string(),
            // The modulus hash, not the key itself
            public_key: decoded,
            chain_id: ChainId::Arweave,
            address_type: AddressType::Base32,
            version: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape_and_round_trip() {
        let modulus = [0xC3u8; 512];
        let codec = ArweaveCodec::new();
        let addr = codec.generate(&modulus).unwrap();
        assert_eq!(addr.len(), 43);
        assert!(codec.validate(&addr));
        assert_eq!(codec.decode(&addr).unwrap().public_key, sha256(&modulus));
    }

    #[test]
    fn test_small_modulus_rejected() {
        assert!(ArweaveCodec::new().generate(&[0u8; 128]).is_err());
    }

    #[test]
    fn test_validate_rejects_padding_and_standard_alphabet() {
        let codec = ArweaveCodec::new();
        assert!(!codec.validate("invalid"));
        // 43 chars but containing '+' from the standard alphabet
        let bad = format!("{}+", "A".repeat(42));
        assert!(!codec.validate(&bad));
    }
}
