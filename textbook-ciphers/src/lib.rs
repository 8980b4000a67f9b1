//! # Textbook Ciphers
//!
//! Step-by-step worked examples of two classroom ciphers.
//!
//! - **ElGamal** over Z_p* with a single ephemeral key per message
//! - **Vigenère** over the 26-letter alphabet
//!
//! Every pipeline exposes plain `encrypt`/`decrypt` functions and a `*_steps`
//! variant that keeps all intermediate values, which the demo binaries print
//! as [`Table`]s.
//!
//! ## Usage
//!
//! ```rust
//! use textbook_ciphers::{elgamal, vigenere, ElGamalParams};
//!
//! let params = ElGamalParams::worked_example();
//! let pairs = elgamal::encrypt("EZKRIPTOGRAFI", &params)?;
//! assert_eq!(elgamal::decrypt(&pairs, &params.p, &params.x)?, "EZKRIPTOGRAFI");
//!
//! let ciphertext = vigenere::encrypt("ASPRAKGANTENG", "ADEL")?;
//! assert_eq!(ciphertext, "AVTCANKLNWIYG");
//! # Ok::<(), textbook_ciphers::CipherError>(())
//! ```
//!
//! None of this is secure: the modulus is tiny and `k` is reused.

pub mod alphabet;
pub mod arith;
pub mod elgamal;
pub mod error;
pub mod logging;
pub mod table;
pub mod vigenere;

pub use elgamal::{CiphertextPair, ElGamalParams};
pub use error::{CipherError, Result};
pub use logging::Verbosity;
pub use table::Table;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_errors_render_messages() {
        assert_eq!(
            CipherError::InvalidCharacter('1').to_string(),
            "Invalid character '1' (only A-Z are supported)"
        );
        assert_eq!(
            CipherError::NonInvertibleValue {
                value: 0u32.into(),
                modulus: 37u32.into(),
            }
            .to_string(),
            "0 has no modular inverse modulo 37"
        );
    }
}
