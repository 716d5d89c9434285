//! Derivation path parsing and rendering

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// First hardened child index (2³¹).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// The hardened index for `index`.
pub fn harden(index: u32) -> u32 {
    index + HARDENED_OFFSET
}

/// Whether an index is in the hardened range.
pub fn is_hardened(index: u32) -> bool {
    index >= HARDENED_OFFSET
}

/// A BIP-32 derivation path: an ordered sequence of child indices with the
/// hardened bit at 0x80000000.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    /// Wrap raw child indices.
    pub fn new(indices: Vec<u32>) -> Self {
        Self(indices)
    }

    /// Parse a path string.
    ///
    /// Accepts an optional `m/` or `M/` prefix; hardened components may be
    /// suffixed with `'`, `h` or `H`. An empty string or bare `m` denotes
    /// the current node.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();
        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::default());
        }

        let stripped = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let mut indices = Vec::new();
        for component in stripped.split('/') {
            if component.is_empty() {
                continue;
            }
            indices.push(parse_component(component)?);
        }

        Ok(Self(indices))
    }

    /// The raw child indices.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the `m` path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend the path by one child index.
    pub fn child(&self, index: u32) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// `m/44'/0'/0'/0/0` — BIP-44 Bitcoin, first address.
    pub fn bip44_bitcoin() -> Self {
        Self(vec![harden(44), harden(0), harden(0), 0, 0])
    }

    /// `m/44'/60'/0'/0/0` — BIP-44 Ethereum, first address.
    pub fn bip44_ethereum() -> Self {
        Self(vec![harden(44), harden(60), harden(0), 0, 0])
    }

    /// `m/49'/0'/0'/0/0` — BIP-49 wrapped SegWit.
    pub fn bip49_bitcoin() -> Self {
        Self(vec![harden(49), harden(0), harden(0), 0, 0])
    }

    /// `m/84'/0'/0'/0/0` — BIP-84 native SegWit.
    pub fn bip84_bitcoin() -> Self {
        Self(vec![harden(84), harden(0), harden(0), 0, 0])
    }
}

fn parse_component(component: &str) -> Result<u32> {
    let (digits, hardened) = match component.strip_suffix(['\'', 'h', 'H']) {
        Some(rest) => (rest, true),
        None => (component, false),
    };

    let index: u32 = digits
        .parse()
        .map_err(|_| Error::InvalidPath(format!("invalid index '{}'", component)))?;

    if hardened {
        if index >= HARDENED_OFFSET {
            return Err(Error::InvalidPath(format!(
                "index {} too large for hardened derivation",
                index
            )));
        }
        Ok(harden(index))
    } else {
        Ok(index)
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for &index in &self.0 {
            if is_hardened(index) {
                write!(f, "/{}'", index - HARDENED_OFFSET)?;
            } else {
                write!(f, "/{}", index)?;
            }
        }
        Ok(())
    }
}

impl From<Vec<u32>> for DerivationPath {
    fn from(indices: Vec<u32>) -> Self {
        Self(indices)
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = u32;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}
