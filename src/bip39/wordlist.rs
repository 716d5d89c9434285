//! BIP-39 English word list access
//!
//! The canonical 2048-word list comes from the `bip39` crate; the decoder's
//! hot path needs a word → index map, built once and reused.

use std::collections::HashMap;
use std::sync::OnceLock;

use bip39::Language;

/// Number of words in the BIP-39 list.
pub const WORD_COUNT: usize = 2048;

/// The full English word list, in index order.
pub fn words() -> &'static [&'static str; WORD_COUNT] {
    Language::English.word_list()
}

/// The word at an 11-bit index.
pub fn word_at(index: usize) -> &'static str {
    words()[index]
}

/// Look up a word's 11-bit index; `None` if the word is not in the list.
pub fn index_of(word: &str) -> Option<u16> {
    static INDEX: OnceLock<HashMap<&'static str, u16>> = OnceLock::new();
    INDEX
        .get_or_init(|| {
            words()
                .iter()
                .enumerate()
                .map(|(i, &w)| (w, i as u16))
                .collect()
        })
        .get(word)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_boundaries() {
        assert_eq!(word_at(0), "abandon");
        assert_eq!(word_at(WORD_COUNT - 1), "zoo");
    }

    #[test]
    fn test_index_round_trip() {
        for index in [0usize, 1, 1000, 2047] {
            assert_eq!(index_of(word_at(index)), Some(index as u16));
        }
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(index_of("notaword"), None);
        // Lookups are case-sensitive, as stored
        assert_eq!(index_of("Abandon"), None);
    }
}
