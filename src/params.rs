use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default Caesar shift when none is supplied
pub const DEFAULT_SHIFT: i64 = 3;
/// Default key for Vigenère and Beaufort when none is supplied
pub const DEFAULT_KEY: &str = "KEY";
/// Default rail count for Rail Fence when none is supplied
pub const DEFAULT_RAILS: usize = 3;

/// Cipher family selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Rot13,
    Vigenere,
    Atbash,
    RailFence,
    Beaufort,
}

impl CipherKind {
    pub const ALL: [CipherKind; 6] = [
        Self::Caesar,
        Self::Rot13,
        Self::Vigenere,
        Self::Atbash,
        Self::RailFence,
        Self::Beaufort,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Rot13 => "rot13",
            Self::Vigenere => "vigenere",
            Self::Atbash => "atbash",
            Self::RailFence => "railfence",
            Self::Beaufort => "beaufort",
        }
    }

    /// Whether Encode and Decode differ for this cipher
    pub fn is_directional(self) -> bool {
        matches!(self, Self::Caesar | Self::Vigenere | Self::RailFence)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Caesar => "Caesar",
            Self::Rot13 => "ROT13",
            Self::Vigenere => "Vigenère",
            Self::Atbash => "Atbash",
            Self::RailFence => "Rail Fence",
            Self::Beaufort => "Beaufort",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for CipherKind {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "rot13" => Ok(Self::Rot13),
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "atbash" => Ok(Self::Atbash),
            "railfence" | "rail-fence" | "rail_fence" => Ok(Self::RailFence),
            "beaufort" => Ok(Self::Beaufort),
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

impl Direction {
    pub fn is_decode(self) -> bool {
        self == Self::Decode
    }
}

/// Parameters for a single transform.
/// Only the fields relevant to the active cipher are read; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherParameters {
    /// Caesar shift, any integer
    pub shift: i64,
    /// Vigenère/Beaufort key
    pub key: String,
    /// Rail Fence row count
    pub rails: usize,
}

impl Default for CipherParameters {
    fn default() -> Self {
        Self {
            shift: DEFAULT_SHIFT,
            key: DEFAULT_KEY.to_string(),
            rails: DEFAULT_RAILS,
        }
    }
}

impl CipherParameters {
    pub fn with_shift(shift: i64) -> Self {
        Self {
            shift,
            ..Default::default()
        }
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_rails(rails: usize) -> Self {
        Self {
            rails,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Caesar".parse::<CipherKind>().unwrap(), CipherKind::Caesar);
        assert_eq!("ROT13".parse::<CipherKind>().unwrap(), CipherKind::Rot13);
        assert_eq!("rail-fence".parse::<CipherKind>().unwrap(), CipherKind::RailFence);
        assert_eq!("vigenère".parse::<CipherKind>().unwrap(), CipherKind::Vigenere);
        assert!(matches!(
            "enigma".parse::<CipherKind>(),
            Err(CipherError::UnsupportedCipher(name)) if name == "enigma"
        ));
    }

    #[test]
    fn test_kind_names_parse_back() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.name().parse::<CipherKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&CipherKind::RailFence).unwrap();
        assert_eq!(json, "\"railfence\"");
        let kind: CipherKind = serde_json::from_str("\"beaufort\"").unwrap();
        assert_eq!(kind, CipherKind::Beaufort);
    }

    #[test]
    fn test_parameter_defaults() {
        let params = CipherParameters::default();
        assert_eq!(params.shift, 3);
        assert_eq!(params.key, "KEY");
        assert_eq!(params.rails, 3);

        let params: CipherParameters = serde_json::from_str(r#"{"rails": 5}"#).unwrap();
        assert_eq!(params.rails, 5);
        assert_eq!(params.shift, DEFAULT_SHIFT);
    }

    #[test]
    fn test_directional_kinds() {
        assert!(CipherKind::Caesar.is_directional());
        assert!(CipherKind::RailFence.is_directional());
        assert!(!CipherKind::Atbash.is_directional());
        assert!(!CipherKind::Beaufort.is_directional());
        assert!(!CipherKind::Rot13.is_directional());
    }
}
