//! Classical cipher transforms.
//!
//! Every transform is a pure function over `&str`. Letters in `A-Z`/`a-z` are
//! transformed with their case preserved; every other character passes
//! through untouched. Rail Fence is the exception in that it permutes
//! positions, so non-letters move along with the letters around them.

pub mod atbash;
pub mod beaufort;
pub mod caesar;
pub mod rail_fence;
pub mod substitution;
pub mod vigenere;

pub use atbash::*;
pub use beaufort::*;
pub use caesar::*;
pub use rail_fence::*;
pub use substitution::*;
pub use vigenere::*;

use crate::error::{CipherError, Result};

/// Size of the Latin alphabet
pub const ALPHABET_LEN: u8 = 26;

/// ASCII base of the character's case, or `None` for non-letters
#[inline]
pub(crate) fn letter_base(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(b'A'),
        'a'..='z' => Some(b'a'),
        _ => None,
    }
}

/// Repeating key stream whose index only advances on letters.
///
/// Built from the uppercase ASCII letters of a user key; everything else in
/// the key is dropped.
#[derive(Debug, Clone)]
pub(crate) struct KeyStream {
    shifts: Vec<u8>,
    index: usize,
}

impl KeyStream {
    pub(crate) fn new(key: &str) -> Result<Self> {
        if key.trim().is_empty() {
            return Err(CipherError::InvalidKey(CipherError::KEY_REQUIRED));
        }

        let shifts: Vec<u8> = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase() as u8 - b'A')
            .collect();

        if shifts.is_empty() {
            return Err(CipherError::InvalidKey(CipherError::KEY_NEEDS_LETTER));
        }

        Ok(Self { shifts, index: 0 })
    }

    /// Next key value in `0..26`, consuming one position
    #[inline]
    pub(crate) fn next_shift(&mut self) -> u8 {
        let shift = self.shifts[self.index % self.shifts.len()];
        self.index += 1;
        shift
    }
}

/// Validate a key without transforming anything
pub fn validate_key(key: &str) -> Result<()> {
    KeyStream::new(key).map(|_| ())
}
