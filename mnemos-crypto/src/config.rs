use std::path::Path;

use mnemos_types::constants::{
    entropy_bits_for_word_count, word_count_for_entropy, DEFAULT_ENTROPY_BITS,
};
use mnemos_types::error::MnemosError;
use mnemos_types::language::Language;
use serde::{Deserialize, Serialize};

use crate::entropy::validate_entropy_bits;
use crate::mnemonic::Mnemonic;
use crate::validate::validate_word_count;

/// Settings for generating new mnemonics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemonicConfig {
    /// Word list used for new phrases.
    pub language: Language,
    /// Entropy size in bits: 128, 160, 192, 224 or 256.
    pub entropy_bits: usize,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            entropy_bits: DEFAULT_ENTROPY_BITS,
        }
    }
}

impl MnemonicConfig {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the entropy size from a target word count.
    pub fn with_word_count(mut self, words: usize) -> Result<Self, MnemosError> {
        validate_word_count(words)?;
        self.entropy_bits = entropy_bits_for_word_count(words);
        Ok(self)
    }

    /// Number of words a mnemonic generated with this config will have.
    pub fn word_count(&self) -> usize {
        word_count_for_entropy(self.entropy_bits)
    }

    pub fn validate(&self) -> Result<(), MnemosError> {
        validate_entropy_bits(self.entropy_bits)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, MnemosError> {
        let config: MnemonicConfig =
            toml::from_str(contents).map_err(|e| MnemosError::ConfigError {
                reason: format!("failed to parse config: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MnemosError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| MnemosError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            language = %config.language,
            entropy_bits = config.entropy_bits,
            "loaded mnemonic config"
        );
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, MnemosError> {
        toml::to_string_pretty(self).map_err(|e| MnemosError::ConfigError {
            reason: format!("failed to serialize config: {}", e),
        })
    }
}

/// Generate a fresh random mnemonic as configured.
pub fn generate_mnemonic(config: &MnemonicConfig) -> Result<Mnemonic, MnemosError> {
    config.validate()?;
    let mnemonic = Mnemonic::generate(config.language, config.entropy_bits)?;
    tracing::debug!(
        language = %config.language,
        words = mnemonic.word_count(),
        "generated mnemonic"
    );
    Ok(mnemonic)
}
