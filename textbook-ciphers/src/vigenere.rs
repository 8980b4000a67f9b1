//! Vigenère cipher over A-Z

use tracing::{debug, trace};

use crate::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, Result};

/// Strips non-letters from `key`, uppercases it and repeats it to exactly `length` letters.
///
/// Fails with [`CipherError::EmptyKey`] when no letter is left, even for `length == 0`.
pub fn expand_key(key: &str, length: usize) -> Result<String> {
    let cleaned: Vec<char> = key
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned.is_empty() {
        return Err(CipherError::EmptyKey);
    }

    Ok(cleaned.iter().cycle().take(length).collect())
}

/// One row of the encryption or decryption table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VigenereStep {
    /// 1-based position in the text
    pub index: usize,
    pub input: char,
    pub input_index: usize,
    pub key: char,
    pub key_index: usize,
    /// (input ± key) mod 26
    pub output_index: usize,
    pub output: char,
}

#[derive(Clone, Copy, Debug)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn steps(text: &str, key: &str, direction: Direction) -> Result<Vec<VigenereStep>> {
    let input = alphabet::normalize(text)?;
    let key_stream = expand_key(key, input.len())?;
    debug!(?direction, %key_stream, letters = input.len(), "expanded Vigenère key");

    input
        .into_iter()
        .zip(key_stream.chars())
        .enumerate()
        .map(|(i, (input_index, key))| -> Result<VigenereStep> {
            // a cleaned key letter outside A-Z (e.g. 'Ä') surfaces here
            let key_index = alphabet::index_of(key)?;
            let output_index = match direction {
                Direction::Encrypt => (input_index + key_index) % ALPHABET_LEN,
                Direction::Decrypt => {
                    (input_index as isize - key_index as isize).rem_euclid(ALPHABET_LEN as isize) as usize
                }
            };
            let step = VigenereStep {
                index: i + 1,
                input: ALPHABET[input_index],
                input_index,
                key,
                key_index,
                output_index,
                output: ALPHABET[output_index],
            };
            trace!(index = step.index, input = %step.input, key = %step.key, output = %step.output, "shifted letter");
            Ok(step)
        })
        .collect()
}

/// Encrypts `plaintext`, keeping every intermediate value.
pub fn encryption_steps(plaintext: &str, key: &str) -> Result<Vec<VigenereStep>> {
    steps(plaintext, key, Direction::Encrypt)
}

/// Decrypts `ciphertext`, keeping every intermediate value.
pub fn decryption_steps(ciphertext: &str, key: &str) -> Result<Vec<VigenereStep>> {
    steps(ciphertext, key, Direction::Decrypt)
}

/// C_i = (P_i + K_i) mod 26
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    Ok(encryption_steps(plaintext, key)?
        .into_iter()
        .map(|step| step.output)
        .collect())
}

/// P_i = (C_i - K_i) mod 26
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    Ok(decryption_steps(ciphertext, key)?
        .into_iter()
        .map(|step| step.output)
        .collect())
}
