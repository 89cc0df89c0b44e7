//! Property-based tests for the mnemonic codec and seed derivation.

use mnemos_crypto::mnemonic::{decode, encode};
use mnemos_crypto::normalize::join_words;
use mnemos_crypto::seed::derive_seed;
use mnemos_crypto::validate::is_valid;
use mnemos_crypto::wordlist::WordList;
use mnemos_types::constants::checksum_bits;
use mnemos_types::language::Language;
use proptest::prelude::*;

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn any_entropy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

proptest! {
    /// Decoding an encoded mnemonic yields the original entropy, byte for byte.
    #[test]
    fn prop_encode_decode_roundtrip(language in any_language(), entropy in any_entropy()) {
        let mnemonic = encode(language, &entropy).unwrap();
        prop_assert_eq!(mnemonic.word_count(), (entropy.len() * 8 + entropy.len() / 4) / 11);

        let decoded = decode(language, &mnemonic.phrase()).unwrap();
        prop_assert_eq!(decoded.as_bytes(), entropy.as_slice());
    }

    /// Leading zero bytes survive the round trip.
    #[test]
    fn prop_leading_zeros_preserved(
        language in any_language(),
        zeros in 1usize..16,
        entropy in any_entropy(),
    ) {
        let mut entropy = entropy;
        let zeros = zeros.min(entropy.len());
        entropy[..zeros].fill(0);

        let mnemonic = encode(language, &entropy).unwrap();
        let decoded = decode(language, &mnemonic.phrase()).unwrap();
        prop_assert_eq!(decoded.as_bytes().len(), entropy.len());
        prop_assert_eq!(decoded.as_bytes(), entropy.as_slice());
    }

    /// Flipping any single checksum bit invalidates the mnemonic.
    #[test]
    fn prop_checksum_bit_flip_detected(
        language in any_language(),
        entropy in any_entropy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mnemonic = encode(language, &entropy).unwrap();

        // The checksum occupies the low bits of the last word index.
        let cs = checksum_bits(entropy.len() * 8);
        let mut indices = mnemonic.indices().to_vec();
        let last = indices.len() - 1;
        indices[last] ^= 1 << pick.index(cs);

        let list = WordList::get(language);
        let words: Vec<&str> = indices.iter().map(|i| list.word(*i).unwrap()).collect();
        let tampered = join_words(language, words);
        prop_assert!(!is_valid(language, &tampered));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))] // PBKDF2 is slow in debug builds

    /// The same phrase and passphrase always give the same seed.
    #[test]
    fn prop_seed_deterministic(entropy in any_entropy(), passphrase in ".{0,16}") {
        let mnemonic = encode(Language::English, &entropy).unwrap();
        prop_assert_eq!(mnemonic.to_seed(&passphrase), derive_seed(&mnemonic.phrase(), &passphrase));
    }

    /// Different passphrases give different seeds.
    #[test]
    fn prop_passphrase_changes_seed(entropy in any_entropy(), suffix in "[a-z]{1,8}") {
        let mnemonic = encode(Language::English, &entropy).unwrap();
        let with_suffix = format!("TREZOR{}", suffix);
        prop_assert_ne!(mnemonic.to_seed("TREZOR"), mnemonic.to_seed(&with_suffix));
        prop_assert_ne!(mnemonic.to_seed(""), mnemonic.to_seed("TREZOR"));
    }
}
