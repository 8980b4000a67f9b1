//! ElGamal over Z_p* with one ephemeral key `k` per message
//!
//! Letters are encrypted as their alphabet index `m` in `0..=25`. The same `k`
//! is used for every letter, so every pair carries the same `c1`. This matches
//! the worked example and is not semantically secure.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::{debug, trace};

use crate::alphabet;
use crate::arith::{mod_inverse, mod_pow};
use crate::error::{CipherError, Result};

/// Domain parameters and secrets of one demo run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElGamalParams {
    /// Prime modulus
    pub p: BigUint,
    /// Generator
    pub g: BigUint,
    /// Private exponent
    pub x: BigUint,
    /// Ephemeral key shared by every letter
    pub k: BigUint,
}

impl ElGamalParams {
    /// Builds parameters, checking `p >= 3` and `1 <= x, k < p - 1`.
    ///
    /// Neither primality of `p` nor the order of `g` is verified.
    pub fn new(p: BigUint, g: BigUint, x: BigUint, k: BigUint) -> Result<Self> {
        if p < BigUint::from(3u32) {
            return Err(CipherError::InvalidParameter(format!(
                "modulus p = {p} must be at least 3"
            )));
        }

        let upper = &p - 1u32;
        for (name, value) in [("x", &x), ("k", &k)] {
            if value < &BigUint::one() || value >= &upper {
                return Err(CipherError::InvalidParameter(format!(
                    "{name} = {value} must lie in [1, {}]",
                    &p - 2u32
                )));
            }
        }

        Ok(Self { p, g, x, k })
    }

    /// The homework values: p = 37, g = 3, x = 2, k = 15.
    pub fn worked_example() -> Self {
        Self {
            p: BigUint::from(37u32),
            g: BigUint::from(3u32),
            x: BigUint::from(2u32),
            k: BigUint::from(15u32),
        }
    }

    /// y = g^x mod p
    pub fn public_key(&self) -> BigUint {
        derive_public_key(&self.g, &self.x, &self.p)
    }

    /// c1 = g^k mod p, identical for every letter.
    pub fn c1(&self) -> BigUint {
        mod_pow(&self.g, &self.k, &self.p)
    }

    /// Encryption-side shared secret y^k mod p.
    pub fn shared_secret(&self) -> BigUint {
        mod_pow(&self.public_key(), &self.k, &self.p)
    }
}

/// Computes the public key `y = g^x mod p`.
pub fn derive_public_key(g: &BigUint, x: &BigUint, p: &BigUint) -> BigUint {
    mod_pow(g, x, p)
}

/// One ElGamal ciphertext.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CiphertextPair {
    pub c1: BigUint,
    pub c2: BigUint,
}

impl CiphertextPair {
    pub fn new(c1: BigUint, c2: BigUint) -> Self {
        Self { c1, c2 }
    }

    /// Renders the pair as `(c1, c2)`.
    pub fn tuple(&self) -> String {
        format!("({}, {})", self.c1, self.c2)
    }
}

/// Compact `c1:c2` form used on the ciphertext line.
impl fmt::Display for CiphertextPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.c1, self.c2)
    }
}

/// Intermediate values of encrypting one letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionStep {
    /// 1-based position in the message
    pub index: usize,
    pub letter: char,
    pub m: usize,
    pub shared: BigUint,
    pub pair: CiphertextPair,
}

/// Intermediate values of decrypting one pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecryptionStep {
    /// 1-based position in the message
    pub index: usize,
    pub pair: CiphertextPair,
    /// s = c1^x mod p
    pub shared: BigUint,
    pub shared_inverse: BigUint,
    pub m: usize,
    pub letter: char,
}

/// Encrypts `plaintext` letter by letter, keeping every intermediate value.
///
/// The text is uppercased first. Fails with [`CipherError::InvalidCharacter`]
/// on anything outside A-Z.
pub fn encryption_steps(plaintext: &str, params: &ElGamalParams) -> Result<Vec<EncryptionStep>> {
    let indices = alphabet::normalize(plaintext)?;

    let y = params.public_key();
    let c1 = params.c1();
    let shared = mod_pow(&y, &params.k, &params.p);
    debug!(%y, %c1, %shared, letters = indices.len(), "derived ElGamal session values");

    Ok(indices
        .into_iter()
        .enumerate()
        .map(|(i, m)| {
            let c2 = (BigUint::from(m) * &shared) % &params.p;
            // normalize only yields indices inside the alphabet
            let letter = alphabet::ALPHABET[m];
            trace!(index = i + 1, %letter, m, %c2, "encrypted letter");
            EncryptionStep {
                index: i + 1,
                letter,
                m,
                shared: shared.clone(),
                pair: CiphertextPair::new(c1.clone(), c2),
            }
        })
        .collect())
}

/// Encrypts `plaintext` into one `(c1, c2)` pair per letter.
pub fn encrypt(plaintext: &str, params: &ElGamalParams) -> Result<Vec<CiphertextPair>> {
    Ok(encryption_steps(plaintext, params)?
        .into_iter()
        .map(|step| step.pair)
        .collect())
}

/// Decrypts a single pair with private exponent `x` under modulus `p`.
fn decrypt_pair(index: usize, pair: &CiphertextPair, p: &BigUint, x: &BigUint) -> Result<DecryptionStep> {
    let shared = mod_pow(&pair.c1, x, p);
    let shared_inverse = mod_inverse(&shared, p)?;
    let value = (&pair.c2 * &shared_inverse) % p;

    let (m, letter) = value
        .to_usize()
        .and_then(|m| alphabet::letter_at(m).map(|letter| (m, letter)))
        .ok_or_else(|| CipherError::OutOfRangeDecryption(value.clone()))?;
    trace!(index, %pair, %shared, %shared_inverse, m, %letter, "decrypted pair");

    Ok(DecryptionStep {
        index,
        pair: pair.clone(),
        shared,
        shared_inverse,
        m,
        letter,
    })
}

/// Decrypts every pair, keeping every intermediate value.
///
/// # Errors
///
/// - [`CipherError::NonInvertibleValue`] if `c1^x mod p` has no inverse
/// - [`CipherError::OutOfRangeDecryption`] if a recovered value exceeds 25
pub fn decryption_steps(pairs: &[CiphertextPair], p: &BigUint, x: &BigUint) -> Result<Vec<DecryptionStep>> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| decrypt_pair(i + 1, pair, p, x))
        .collect()
}

/// Decrypts the pairs back into an uppercase plaintext.
pub fn decrypt(pairs: &[CiphertextPair], p: &BigUint, x: &BigUint) -> Result<String> {
    Ok(decryption_steps(pairs, p, x)?
        .into_iter()
        .map(|step| step.letter)
        .collect())
}
