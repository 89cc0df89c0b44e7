use mnemos_types::constants::checksum_bits;
use mnemos_types::error::MnemosError;
use sha2::{Digest, Sha256};

use crate::entropy::validate_entropy_bits;

/// The leading bits of SHA-256(entropy), right-aligned in a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    value: u8,
    bits: usize,
}

impl Checksum {
    /// The checksum bits as an unsigned integer.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Number of checksum bits (ENT / 32, between 4 and 8).
    pub fn bit_len(&self) -> usize {
        self.bits
    }
}

/// Compute the BIP-39 checksum of `entropy`.
///
/// Fails with `InvalidEntropyLength` unless the entropy is 16, 20, 24, 28
/// or 32 bytes long.
pub fn checksum(entropy: &[u8]) -> Result<Checksum, MnemosError> {
    let entropy_bits = entropy.len() * 8;
    validate_entropy_bits(entropy_bits)?;

    let bits = checksum_bits(entropy_bits);
    let digest = Sha256::digest(entropy);
    Ok(Checksum {
        value: digest[0] >> (8 - bits),
        bits,
    })
}
