mod bits;
pub mod checksum;
pub mod config;
pub mod entropy;
pub mod mnemonic;
pub mod normalize;
pub mod seed;
pub mod validate;
pub mod wordlist;
