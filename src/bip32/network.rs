//! Network version bytes for extended-key serialization

/// Version bytes and prefixes for one network.
#[derive(Debug, PartialEq, Eq)]
pub struct Network {
    name: &'static str,
    private_version: u32,
    public_version: u32,
    private_hrp: &'static str,
    public_hrp: &'static str,
}

/// Bitcoin mainnet (`xprv` / `xpub`).
pub const MAINNET: Network = Network {
    name: "mainnet",
    private_version: 0x0488_ADE4,
    public_version: 0x0488_B21E,
    private_hrp: "xprv",
    public_hrp: "xpub",
};

/// Bitcoin testnet (`tprv` / `tpub`).
pub const TESTNET: Network = Network {
    name: "testnet",
    private_version: 0x0435_8394,
    public_version: 0x0435_87CF,
    private_hrp: "tprv",
    public_hrp: "tpub",
};

impl Network {
    /// Network name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 4-byte version for private extended keys.
    pub fn private_version(&self) -> u32 {
        self.private_version
    }

    /// 4-byte version for public extended keys.
    pub fn public_version(&self) -> u32 {
        self.public_version
    }

    /// String prefix of private extended keys on this network.
    pub fn private_hrp(&self) -> &'static str {
        self.private_hrp
    }

    /// String prefix of public extended keys on this network.
    pub fn public_hrp(&self) -> &'static str {
        self.public_hrp
    }

    /// Resolve a serialized version to its network, if known.
    pub fn from_version(version: u32) -> Option<&'static Network> {
        match version {
            v if v == MAINNET.private_version || v == MAINNET.public_version => Some(&MAINNET),
            v if v == TESTNET.private_version || v == TESTNET.public_version => Some(&TESTNET),
            _ => None,
        }
    }

    /// Whether a serialized version denotes a private key.
    pub fn is_private_version(version: u32) -> bool {
        version == MAINNET.private_version || version == TESTNET.private_version
    }
}
