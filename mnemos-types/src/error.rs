use thiserror::Error;

/// All error codes for the mnemos toolkit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemosError {
    // ─── Entropy Errors ──────────────────────────────────────────────────────
    #[error("invalid entropy length: {bits} bits (must be 128, 160, 192, 224 or 256)")]
    InvalidEntropyLength { bits: usize },

    #[error("entropy source unavailable: {reason}")]
    EntropyUnavailable { reason: String },

    // ─── Mnemonic Errors ─────────────────────────────────────────────────────
    #[error("invalid mnemonic size: {words} words (must be 12, 15, 18, 21 or 24)")]
    InvalidMnemonicSize { words: usize },

    #[error("invalid word at position {position}")]
    InvalidWord { position: usize },

    #[error("mnemonic checksum incorrect")]
    ChecksumIncorrect,

    // ─── Language Errors ─────────────────────────────────────────────────────
    #[error("unsupported language: {key}")]
    UnsupportedLanguage { key: String },

    // ─── Configuration Errors ────────────────────────────────────────────────
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl MnemosError {
    /// Whether the error describes a malformed or corrupted mnemonic phrase.
    pub fn is_invalid_mnemonic(&self) -> bool {
        matches!(
            self,
            MnemosError::InvalidMnemonicSize { .. }
                | MnemosError::InvalidWord { .. }
                | MnemosError::ChecksumIncorrect
        )
    }
}
