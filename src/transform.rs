use crate::cipher::{atbash, beaufort, caesar, rail_fence, rot13, vigenere};
use crate::error::Result;
use crate::params::{CipherKind, CipherParameters, Direction};
use tracing::debug;

/// Apply one cipher to `text`.
///
/// Only the parameter fields the chosen cipher uses are read. Direction is
/// ignored by the self-inverse ciphers (ROT13, Atbash, Beaufort).
pub fn apply(
    text: &str,
    kind: CipherKind,
    params: &CipherParameters,
    direction: Direction,
) -> Result<String> {
    debug!(cipher = kind.name(), ?direction, len = text.len(), "applying cipher");

    match kind {
        CipherKind::Caesar => Ok(caesar(text, params.shift, direction)),
        CipherKind::Rot13 => Ok(rot13(text)),
        CipherKind::Vigenere => vigenere(text, &params.key, direction),
        CipherKind::Atbash => Ok(atbash(text)),
        CipherKind::RailFence => rail_fence(text, params.rails, direction),
        CipherKind::Beaufort => beaufort(text, &params.key),
    }
}

/// Shorthand for `apply(.., Direction::Encode)`
pub fn encode(text: &str, kind: CipherKind, params: &CipherParameters) -> Result<String> {
    apply(text, kind, params, Direction::Encode)
}

/// Shorthand for `apply(.., Direction::Decode)`
pub fn decode(text: &str, kind: CipherKind, params: &CipherParameters) -> Result<String> {
    apply(text, kind, params, Direction::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_dispatch_uses_relevant_fields() {
        let params = CipherParameters {
            shift: 1,
            key: String::new(),
            rails: 0,
        };
        // empty key and zero rails are irrelevant for Caesar
        assert_eq!(encode("abc", CipherKind::Caesar, &params).unwrap(), "bcd");
        assert_eq!(encode("abc", CipherKind::Atbash, &params).unwrap(), "zyx");
        assert_eq!(encode("abc", CipherKind::Rot13, &params).unwrap(), "nop");

        assert!(matches!(
            encode("abc", CipherKind::Vigenere, &params),
            Err(CipherError::InvalidKey(_))
        ));
        assert!(matches!(
            encode("abc", CipherKind::RailFence, &params),
            Err(CipherError::InvalidRails(0))
        ));
    }

    #[test]
    fn test_every_kind_roundtrips() {
        let text = "Attack at dawn, 0600 hours!";
        let params = CipherParameters {
            shift: 11,
            key: "Lemon".into(),
            rails: 4,
        };
        for kind in CipherKind::ALL {
            let encoded = encode(text, kind, &params).unwrap();
            let decoded = decode(&encoded, kind, &params).unwrap();
            assert_eq!(decoded, text, "{} failed to roundtrip", kind);
        }
    }

    #[test]
    fn test_self_inverse_kinds_ignore_direction() {
        let params = CipherParameters::with_key("SECRET");
        for kind in [CipherKind::Rot13, CipherKind::Atbash, CipherKind::Beaufort] {
            assert_eq!(
                encode("Hello", kind, &params).unwrap(),
                decode("Hello", kind, &params).unwrap()
            );
        }
    }
}
