use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MnemosError;

/// A language with a standard BIP-39 word list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    #[default]
    English,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Spanish,
}

/// How the words of a mnemonic are joined into a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// U+0020 SPACE.
    Space,
    /// U+3000 IDEOGRAPHIC SPACE, recommended for Japanese phrases.
    IdeographicSpace,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Space => " ",
            Separator::IdeographicSpace => "\u{3000}",
        }
    }
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 10] = [
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Czech,
        Language::English,
        Language::French,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Portuguese,
        Language::Spanish,
    ];

    /// The stable lowercase key identifying this language.
    pub fn key(self) -> &'static str {
        match self {
            Language::ChineseSimplified => "chinesesimplified",
            Language::ChineseTraditional => "chinesetraditional",
            Language::Czech => "czech",
            Language::English => "english",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Portuguese => "portuguese",
            Language::Spanish => "spanish",
        }
    }

    /// Position of this language in [`Language::ALL`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The separator used when rendering a phrase in this language.
    pub fn separator(self) -> Separator {
        match self {
            Language::Japanese => Separator::IdeographicSpace,
            _ => Separator::Space,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Language {
    type Err = MnemosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.key() == wanted)
            .ok_or_else(|| MnemosError::UnsupportedLanguage { key: s.to_string() })
    }
}
