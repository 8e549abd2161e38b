use super::{letter_base, ALPHABET_LEN};

/// Mirror every letter within its alphabet (`A`↔`Z`, `b`↔`y`, ...).
pub fn atbash(text: &str) -> String {
    text.chars()
        .map(|c| match letter_base(c) {
            Some(base) => (base + (ALPHABET_LEN - 1) - (c as u8 - base)) as char,
            None => c,
        })
        .collect()
}
