//! Error types for the textbook cipher pipelines

use num_bigint::BigUint;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid character {0:?} (only A-Z are supported)")]
    InvalidCharacter(char),

    #[error("Empty key (no alphabetic characters left after cleaning)")]
    EmptyKey,

    #[error("{value} has no modular inverse modulo {modulus}")]
    NonInvertibleValue { value: BigUint, modulus: BigUint },

    #[error("Decrypted value {0} is outside the alphabet range 0..=25")]
    OutOfRangeDecryption(BigUint),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
