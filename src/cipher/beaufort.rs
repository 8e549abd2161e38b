use super::{letter_base, KeyStream, ALPHABET_LEN};
use crate::error::Result;

/// Beaufort cipher: `key - letter (mod 26)`.
///
/// Self-inverse for a fixed key, so there is no direction. Key handling is
/// the same as Vigenère. Output letters take the case of the input letter.
pub fn beaufort(text: &str, key: &str) -> Result<String> {
    let mut stream = KeyStream::new(key)?;

    let output = text
        .chars()
        .map(|c| match letter_base(c) {
            Some(base) => {
                let value = c.to_ascii_uppercase() as u8 - b'A';
                let shift = stream.next_shift();
                ((shift + ALPHABET_LEN - value) % ALPHABET_LEN + base) as char
            }
            None => c,
        })
        .collect();

    Ok(output)
}
