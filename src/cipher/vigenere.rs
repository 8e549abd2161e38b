use super::{letter_base, KeyStream, ALPHABET_LEN};
use crate::error::Result;
use crate::params::Direction;

/// Vigenère cipher.
///
/// The key is reduced to its ASCII letters (uppercased) and fails with
/// `InvalidKey` when nothing is left. The key position only advances on
/// letters of `text`, so punctuation and spaces never consume key material.
pub fn vigenere(text: &str, key: &str, direction: Direction) -> Result<String> {
    let mut stream = KeyStream::new(key)?;

    let output = text
        .chars()
        .map(|c| match letter_base(c) {
            Some(base) => {
                let value = c as u8 - base;
                let shift = stream.next_shift();
                let shifted = match direction {
                    Direction::Encode => (value + shift) % ALPHABET_LEN,
                    Direction::Decode => (value + ALPHABET_LEN - shift) % ALPHABET_LEN,
                };
                (shifted + base) as char
            }
            None => c,
        })
        .collect();

    Ok(output)
}
