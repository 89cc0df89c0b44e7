use std::borrow::Cow;

use mnemos_types::language::Language;
use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

/// Apply Unicode compatibility decomposition (NFKD).
///
/// Text that is already in NFKD form is returned borrowed.
pub fn nfkd(text: &str) -> Cow<'_, str> {
    match is_nfkd_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfkd().collect()),
    }
}

/// Split a phrase into words on any Unicode whitespace.
///
/// ASCII and ideographic spaces are both separators. Punctuation is kept
/// attached to its word so that it fails word lookup.
pub fn split_words(phrase: &str) -> impl Iterator<Item = &str> {
    phrase.split_whitespace()
}

/// Join words with the separator of the given language.
pub fn join_words<I, S>(language: Language, words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let separator = language.separator().as_str();
    let mut phrase = String::new();
    for (i, word) in words.into_iter().enumerate() {
        if i > 0 {
            phrase.push_str(separator);
        }
        phrase.push_str(word.as_ref());
    }
    phrase
}
