use mnemos_types::constants::{MAX_WORD_COUNT, MIN_WORD_COUNT};
use mnemos_types::error::MnemosError;
use mnemos_types::language::Language;

use crate::mnemonic::decode;

/// Structural check: the word count must be a multiple of 3 in 12..=24.
pub fn validate_word_count(count: usize) -> Result<(), MnemosError> {
    if count % 3 != 0 || !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&count) {
        return Err(MnemosError::InvalidMnemonicSize { words: count });
    }
    Ok(())
}

/// Fully validate a phrase: word count, word membership and checksum.
pub fn validate(language: Language, phrase: &str) -> Result<(), MnemosError> {
    decode(language, phrase).map(drop)
}

/// Whether `phrase` is a valid mnemonic in `language`.
pub fn is_valid(language: Language, phrase: &str) -> bool {
    validate(language, phrase).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_rules() {
        for count in [12, 15, 18, 21, 24] {
            assert!(validate_word_count(count).is_ok());
        }
        for count in [0, 3, 9, 11, 13, 14, 25, 27] {
            assert_eq!(
                validate_word_count(count),
                Err(MnemosError::InvalidMnemonicSize { words: count })
            );
        }
    }

    #[test]
    fn test_structural_rejection_regardless_of_content() {
        let word = "abandon ";
        for count in [11, 13, 25] {
            let phrase = word.repeat(count);
            assert_eq!(
                validate(Language::English, &phrase),
                Err(MnemosError::InvalidMnemonicSize { words: count })
            );
        }
    }

    #[test]
    fn test_is_valid_known_phrases() {
        assert!(is_valid(
            Language::English,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        ));
        assert!(is_valid(
            Language::English,
            "legal winner thank year wave sausage worth useful legal winner thank yellow"
        ));
    }

    #[test]
    fn test_is_valid_rejects_malformed_input() {
        let bad = [
            "",
            "abandon",
            "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo, wrong",
            "zoo-zoo-zoo-zoo-zoo-zoo-zoo-zoo-zoo-zoo-zoo-wrong",
            "dignity pass list indicate nasty",
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon letter",
            "jello better achieve collect unaware mountain thought cargo oxygen act hood bridge",
        ];
        for phrase in bad {
            assert!(!is_valid(Language::English, phrase), "{phrase:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert!(is_valid(
            Language::English,
            "  abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about\n"
        ));
    }
}
