use std::fmt;

use mnemos_types::constants::{
    word_count_for_entropy, ENTROPY_BITS_MULTIPLE, MAX_ENTROPY_BITS, MIN_ENTROPY_BITS,
};
use mnemos_types::error::MnemosError;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Raw entropy of a supported BIP-39 size. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Wrap existing entropy bytes, checking their length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MnemosError> {
        validate_entropy_bits(bytes.len() * 8)?;
        Ok(Self(bytes.to_vec()))
    }

    /// Wrap bytes already known to be a supported size.
    pub(crate) fn from_vec_unchecked(bytes: Vec<u8>) -> Self {
        debug_assert!(validate_entropy_bits(bytes.len() * 8).is_ok());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Entropy size in bits (ENT).
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Number of words this entropy encodes to.
    pub fn word_count(&self) -> usize {
        word_count_for_entropy(self.bit_len())
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Check that `bits` is a supported entropy size: 128..=256 and a multiple of 32.
pub fn validate_entropy_bits(bits: usize) -> Result<(), MnemosError> {
    if bits % ENTROPY_BITS_MULTIPLE != 0 || !(MIN_ENTROPY_BITS..=MAX_ENTROPY_BITS).contains(&bits)
    {
        return Err(MnemosError::InvalidEntropyLength { bits });
    }
    Ok(())
}

/// Generate `bits` bits of entropy from the operating system RNG.
pub fn new_entropy(bits: usize) -> Result<Entropy, MnemosError> {
    new_entropy_with(&mut rand::rngs::OsRng, bits)
}

/// Generate `bits` bits of entropy from a caller-supplied secure RNG.
///
/// Fails with `EntropyUnavailable` if the RNG cannot fill the whole buffer.
pub fn new_entropy_with<R>(rng: &mut R, bits: usize) -> Result<Entropy, MnemosError>
where
    R: RngCore + CryptoRng,
{
    validate_entropy_bits(bits)?;

    let mut entropy = Entropy(vec![0u8; bits / 8]);
    rng.try_fill_bytes(&mut entropy.0).map_err(|e| {
        tracing::warn!(bits, "entropy source failed: {}", e);
        MnemosError::EntropyUnavailable {
            reason: e.to_string(),
        }
    })?;

    tracing::trace!(bits, "generated entropy");
    Ok(entropy)
}
