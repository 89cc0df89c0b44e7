use std::fmt;

use mnemos_types::constants::{PBKDF2_ROUNDS, SALT_PREFIX, SEED_LENGTH};
use mnemos_types::error::MnemosError;
use mnemos_types::language::{Language, Separator};
use sha2::Sha512;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::normalize::{nfkd, split_words};
use crate::validate::validate;
use crate::wordlist::WordList;

/// A 64-byte BIP-39 seed. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// Stretch a mnemonic phrase and passphrase into a seed.
///
/// Both inputs are NFKD-normalized and the phrase is re-joined with single
/// U+0020 separators, so surrounding or repeated whitespace never changes
/// the seed. PBKDF2-HMAC-SHA512 with 2048 rounds, password = phrase,
/// salt = "mnemonic" ‖ passphrase. No validation of any kind is performed
/// on the phrase.
pub fn derive_seed(phrase: &str, passphrase: &str) -> Seed {
    let password = canonical_phrase(phrase);
    let passphrase = Zeroizing::new(nfkd(passphrase).into_owned());
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(&passphrase);

    let mut seed = Seed([0u8; SEED_LENGTH]);
    pbkdf2::pbkdf2_hmac::<Sha512>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed.0,
    );
    seed
}

/// NFKD form of `phrase` with its words joined by a single space.
fn canonical_phrase(phrase: &str) -> Zeroizing<String> {
    let normalized = Zeroizing::new(nfkd(phrase).into_owned());
    let mut canonical = Zeroizing::new(String::with_capacity(normalized.len()));
    for word in split_words(&normalized) {
        if !canonical.is_empty() {
            canonical.push_str(Separator::Space.as_str());
        }
        canonical.push_str(word);
    }
    canonical
}

/// Derive a seed after checking that every word belongs to `language`.
///
/// Neither the word count nor the checksum is checked.
pub fn derive_seed_in(
    language: Language,
    phrase: &str,
    passphrase: &str,
) -> Result<Seed, MnemosError> {
    let list = WordList::get(language);
    if let Some(position) = split_words(phrase).position(|word| !list.contains(word)) {
        return Err(MnemosError::InvalidWord { position });
    }
    Ok(derive_seed(phrase, passphrase))
}

/// Derive a seed only from a fully valid mnemonic (size, words, checksum).
pub fn derive_seed_checked(
    language: Language,
    phrase: &str,
    passphrase: &str,
) -> Result<Seed, MnemosError> {
    validate(language, phrase)?;
    Ok(derive_seed(phrase, passphrase))
}
