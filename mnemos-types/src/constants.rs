// ─── Word List Parameters ────────────────────────────────────────────────────

/// Number of words in every BIP-39 word list.
pub const WORD_LIST_SIZE: usize = 2048;

/// Bits encoded by a single word (2^11 = 2048).
pub const BITS_PER_WORD: usize = 11;

// ─── Entropy Parameters ──────────────────────────────────────────────────────

/// Smallest supported entropy size in bits.
pub const MIN_ENTROPY_BITS: usize = 128;

/// Largest supported entropy size in bits.
pub const MAX_ENTROPY_BITS: usize = 256;

/// Entropy sizes must be a multiple of this many bits.
pub const ENTROPY_BITS_MULTIPLE: usize = 32;

/// Every supported entropy size in bits.
pub const VALID_ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Default entropy size for newly generated mnemonics (24 words).
pub const DEFAULT_ENTROPY_BITS: usize = 256;

// ─── Mnemonic Parameters ─────────────────────────────────────────────────────

/// Every structurally valid mnemonic word count.
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Smallest valid mnemonic word count.
pub const MIN_WORD_COUNT: usize = 12;

/// Largest valid mnemonic word count.
pub const MAX_WORD_COUNT: usize = 24;

// ─── Seed Parameters ─────────────────────────────────────────────────────────

/// Length of a derived seed in bytes.
pub const SEED_LENGTH: usize = 64;

/// PBKDF2 iteration count for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Literal prefix of the PBKDF2 salt; the passphrase is appended to it.
pub const SALT_PREFIX: &str = "mnemonic";

/// Checksum length in bits for an entropy of `entropy_bits` bits.
pub const fn checksum_bits(entropy_bits: usize) -> usize {
    entropy_bits / ENTROPY_BITS_MULTIPLE
}

/// Number of words produced by an entropy of `entropy_bits` bits.
pub const fn word_count_for_entropy(entropy_bits: usize) -> usize {
    (entropy_bits + checksum_bits(entropy_bits)) / BITS_PER_WORD
}

/// Entropy size in bits carried by a mnemonic of `word_count` words.
///
/// Only meaningful when `word_count` is a multiple of 3.
pub const fn entropy_bits_for_word_count(word_count: usize) -> usize {
    let total = word_count * BITS_PER_WORD;
    total - total / (ENTROPY_BITS_MULTIPLE + 1)
}
