use std::fmt;

use mnemos_types::constants::{entropy_bits_for_word_count, BITS_PER_WORD};
use mnemos_types::error::MnemosError;
use mnemos_types::language::Language;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::bits::BitVector;
use crate::checksum::checksum;
use crate::entropy::{new_entropy, Entropy};
use crate::normalize::{join_words, split_words};
use crate::seed::{derive_seed, Seed};
use crate::validate::validate_word_count;
use crate::wordlist::WordList;

/// A checksummed BIP-39 mnemonic: a language plus its ordered word indices.
///
/// Indices are wiped on drop. The `Debug` output never shows the words.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    #[zeroize(skip)]
    language: Language,
    indices: Vec<u16>,
}

impl Mnemonic {
    /// Generate a fresh mnemonic from `entropy_bits` bits of OS randomness.
    pub fn generate(language: Language, entropy_bits: usize) -> Result<Self, MnemosError> {
        let entropy = new_entropy(entropy_bits)?;
        encode(language, entropy.as_bytes())
    }

    /// Encode existing entropy.
    pub fn from_entropy(language: Language, entropy: &[u8]) -> Result<Self, MnemosError> {
        encode(language, entropy)
    }

    /// Parse and fully validate a phrase (size, words and checksum).
    pub fn parse(language: Language, phrase: &str) -> Result<Self, MnemosError> {
        let indices = resolve_words(language, phrase)?;
        verify_checksum(&pack_indices(&indices))?;
        Ok(Self { language, indices })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn word_count(&self) -> usize {
        self.indices.len()
    }

    /// The 11-bit word indices in phrase order.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// The words in phrase order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        // Indices are 11-bit values, always inside the 2048-word list.
        let words = WordList::get(self.language).words();
        self.indices.iter().map(move |index| words[usize::from(*index)])
    }

    /// The phrase, joined with the language separator.
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(join_words(self.language, self.words()))
    }

    /// Recover the entropy this mnemonic encodes.
    pub fn to_entropy(&self) -> Entropy {
        let bits = pack_indices(&self.indices);
        let entropy_bits = entropy_bits_for_word_count(self.indices.len());
        Entropy::from_vec_unchecked(bits.leading_bytes(entropy_bits))
    }

    /// Derive the 64-byte seed for this mnemonic and `passphrase`.
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        derive_seed(&self.phrase(), passphrase)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

/// Encode entropy into a mnemonic.
///
/// The bit vector is entropy ‖ checksum, split into 11-bit groups from the
/// most significant end; each group is a word index.
pub fn encode(language: Language, entropy: &[u8]) -> Result<Mnemonic, MnemosError> {
    let cs = checksum(entropy)?;

    let mut bits = BitVector::from_bytes(entropy);
    bits.push_bits(u32::from(cs.value()), cs.bit_len());
    let indices: Vec<u16> = bits.groups(BITS_PER_WORD).map(|g| g as u16).collect();

    tracing::debug!(
        language = %language,
        entropy_bits = entropy.len() * 8,
        words = indices.len(),
        "encoded mnemonic"
    );
    Ok(Mnemonic { language, indices })
}

/// Decode a phrase back into its entropy, verifying the checksum.
pub fn decode(language: Language, phrase: &str) -> Result<Entropy, MnemosError> {
    let indices = Zeroizing::new(resolve_words(language, phrase)?);
    let entropy = verify_checksum(&pack_indices(&indices))?;

    tracing::debug!(
        language = %language,
        entropy_bits = entropy.bit_len(),
        words = indices.len(),
        "decoded mnemonic"
    );
    Ok(entropy)
}

/// Decode a phrase into its full entropy ‖ checksum bit vector.
///
/// The checksum is verified first. The bits are returned as a big-endian
/// number right-aligned in the smallest whole number of bytes.
pub fn to_checksummed_bytes(language: Language, phrase: &str) -> Result<Vec<u8>, MnemosError> {
    let indices = Zeroizing::new(resolve_words(language, phrase)?);
    let bits = pack_indices(&indices);
    verify_checksum(&bits)?;
    Ok(bits.to_right_aligned_bytes())
}

/// Map every word of `phrase` to its index, after the structural size check.
pub(crate) fn resolve_words(language: Language, phrase: &str) -> Result<Vec<u16>, MnemosError> {
    let words: Vec<&str> = split_words(phrase).collect();
    validate_word_count(words.len())?;

    let list = WordList::get(language);
    words
        .iter()
        .enumerate()
        .map(|(position, word)| {
            list.index_of(word)
                .ok_or(MnemosError::InvalidWord { position })
        })
        .collect()
}

fn pack_indices(indices: &[u16]) -> BitVector {
    let mut bits = BitVector::with_capacity(indices.len() * BITS_PER_WORD);
    for index in indices {
        bits.push_bits(u32::from(*index), BITS_PER_WORD);
    }
    bits
}

/// Split a packed bit vector into entropy and checksum and compare the
/// embedded checksum against a fresh one.
fn verify_checksum(bits: &BitVector) -> Result<Entropy, MnemosError> {
    let entropy_bits = entropy_bits_for_word_count(bits.len() / BITS_PER_WORD);
    let entropy = Entropy::from_bytes(&Zeroizing::new(bits.leading_bytes(entropy_bits)))?;

    let expected = checksum(entropy.as_bytes())?;
    let embedded = bits.read(entropy_bits, expected.bit_len());
    if embedded != u32::from(expected.value()) {
        tracing::debug!(words = bits.len() / BITS_PER_WORD, "mnemonic checksum mismatch");
        return Err(MnemosError::ChecksumIncorrect);
    }
    Ok(entropy)
}
