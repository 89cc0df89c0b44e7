use std::collections::HashMap;

use mnemos_types::constants::WORD_LIST_SIZE;
use mnemos_types::error::MnemosError;
use mnemos_types::language::Language;
use once_cell::sync::OnceCell;

use crate::normalize::nfkd;

#[allow(clippy::declare_interior_mutable_const)]
const UNBUILT: OnceCell<WordList> = OnceCell::new();

/// One lazily built index per language, in `Language::ALL` order.
static INDICES: [OnceCell<WordList>; Language::ALL.len()] = [UNBUILT; Language::ALL.len()];

/// An ordered 2048-word vocabulary with constant-time lookups in both directions.
pub struct WordList {
    language: Language,
    words: &'static [&'static str; WORD_LIST_SIZE],
    /// NFKD form of each word -> position in `words`.
    index: HashMap<String, u16>,
}

impl WordList {
    /// Get the shared index for a language, building it on first use.
    ///
    /// Construction happens at most once per language, even under
    /// concurrent first access.
    pub fn get(language: Language) -> &'static WordList {
        INDICES[language.ordinal()].get_or_init(|| WordList::build(language))
    }

    fn build(language: Language) -> Self {
        let words = provider_words(language);
        let index: HashMap<String, u16> = words
            .iter()
            .enumerate()
            .map(|(i, word)| (nfkd(word).into_owned(), i as u16))
            .collect();
        debug_assert_eq!(index.len(), WORD_LIST_SIZE, "word list has duplicates");

        tracing::debug!(language = %language, words = index.len(), "built word list index");
        Self {
            language,
            words,
            index,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// All words in index order.
    pub fn words(&self) -> &'static [&'static str; WORD_LIST_SIZE] {
        self.words
    }

    /// The word at `index`, or `None` if `index` is outside `0..2048`.
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(index as usize).copied()
    }

    /// The position of `word` in the list.
    ///
    /// Composed and decomposed Unicode spellings of the same word resolve
    /// to the same index.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(&*nfkd(word)).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }
}

/// The ordered word list for a language.
pub fn word_list(language: Language) -> &'static [&'static str; WORD_LIST_SIZE] {
    WordList::get(language).words()
}

/// Look up the index of a single word.
///
/// A missing word fails with `InvalidWord { position: 0 }`, since the query
/// is a one-word phrase.
pub fn word_index(language: Language, word: &str) -> Result<u16, MnemosError> {
    WordList::get(language)
        .index_of(word)
        .ok_or(MnemosError::InvalidWord { position: 0 })
}

fn provider_words(language: Language) -> &'static [&'static str; WORD_LIST_SIZE] {
    let provider = match language {
        Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
        Language::ChineseTraditional => bip39::Language::TraditionalChinese,
        Language::Czech => bip39::Language::Czech,
        Language::English => bip39::Language::English,
        Language::French => bip39::Language::French,
        Language::Italian => bip39::Language::Italian,
        Language::Japanese => bip39::Language::Japanese,
        Language::Korean => bip39::Language::Korean,
        Language::Portuguese => bip39::Language::Portuguese,
        Language::Spanish => bip39::Language::Spanish,
    };
    provider.word_list()
}
