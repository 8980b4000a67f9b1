//! The 26-letter Latin alphabet as a bijection A=0 .. Z=25

use crate::error::{CipherError, Result};

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Letters in index order.
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Maps an uppercase letter to its index.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCharacter`] for anything outside `A..=Z`.
/// Lowercase letters are rejected too; callers normalize with [`normalize`] first.
pub fn index_of(letter: char) -> Result<usize> {
    if letter.is_ascii_uppercase() {
        Ok((letter as u8 - b'A') as usize)
    } else {
        Err(CipherError::InvalidCharacter(letter))
    }
}

/// Maps an index back to its letter, `None` if the index is 26 or larger.
pub fn letter_at(index: usize) -> Option<char> {
    ALPHABET.get(index).copied()
}

/// Uppercases the text and maps every character to its index.
pub fn normalize(text: &str) -> Result<Vec<usize>> {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(index_of)
        .collect()
}
