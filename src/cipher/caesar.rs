use super::{letter_base, ALPHABET_LEN};
use crate::params::Direction;

/// Shift every letter by `shift` positions.
///
/// Any integer is accepted: the shift is reduced into `0..26` first, and
/// decoding applies the complementary shift so that decoding an encoded
/// text with the same shift restores it.
pub fn caesar(text: &str, shift: i64, direction: Direction) -> String {
    let mut shift = shift.rem_euclid(ALPHABET_LEN as i64) as u8;
    if direction.is_decode() {
        shift = (ALPHABET_LEN - shift) % ALPHABET_LEN;
    }

    text.chars().map(|c| shift_letter(c, shift)).collect()
}

/// ROT13, a Caesar shift of 13. Applying it twice restores the input.
pub fn rot13(text: &str) -> String {
    caesar(text, 13, Direction::Encode)
}

#[inline]
fn shift_letter(c: char, shift: u8) -> char {
    match letter_base(c) {
        Some(base) => (((c as u8 - base + shift) % ALPHABET_LEN) + base) as char,
        None => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_encode() {
        assert_eq!(caesar("Hello, World!", 3, Direction::Encode), "Khoor, Zruog!");
        assert_eq!(caesar("xyz XYZ", 3, Direction::Encode), "abc ABC");
    }

    #[test]
    fn test_caesar_decode() {
        assert_eq!(caesar("Khoor, Zruog!", 3, Direction::Decode), "Hello, World!");
    }

    #[test]
    fn test_caesar_shift_normalization() {
        assert_eq!(
            caesar("abc", -1, Direction::Encode),
            caesar("abc", 25, Direction::Encode)
        );
        assert_eq!(
            caesar("abc", 29, Direction::Encode),
            caesar("abc", 3, Direction::Encode)
        );
        assert_eq!(caesar("abc", 26, Direction::Encode), "abc");
        assert_eq!(caesar("abc", 0, Direction::Decode), "abc");
        assert_eq!(
            caesar("Zebra", i64::MIN, Direction::Encode),
            caesar("Zebra", i64::MIN.rem_euclid(26), Direction::Encode)
        );
    }

    #[test]
    fn test_caesar_passes_non_letters() {
        assert_eq!(caesar("123 ñ-é!", 7, Direction::Encode), "123 ñ-é!");
        assert_eq!(caesar("", 7, Direction::Encode), "");
    }

    #[test]
    fn test_rot13() {
        assert_eq!(rot13("Hello"), "Uryyb");
        let text = "Why did the chicken cross the road?";
        assert_eq!(rot13(&rot13(text)), text);
    }
}
