//! User-defined ciphers.
//!
//! A custom cipher wraps one of four methods (substitution by character map,
//! rail fence transposition, Vigenère, or a hybrid pipeline) together with a
//! name, a free-form description and a self-assessed complexity. Definitions
//! are plain serde values; storing them is up to the caller.

use crate::cipher::{rail_fence, vigenere, CharacterMap};
use crate::error::{CipherError, Result};
use crate::hybrid::{apply_pipeline, HybridStep};
use crate::params::{Direction, DEFAULT_KEY, DEFAULT_RAILS};
use serde::{Deserialize, Serialize};

/// Highest estimated security score
pub const MAX_STRENGTH: u8 = 10;

/// How a custom cipher transforms text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CustomMethod {
    Substitution {
        #[serde(default)]
        map: CharacterMap,
    },
    Transposition {
        #[serde(default = "default_rails")]
        rails: usize,
    },
    Polyalphabetic {
        #[serde(default = "default_key")]
        key: String,
    },
    Hybrid {
        #[serde(default)]
        steps: Vec<HybridStep>,
    },
}

fn default_rails() -> usize {
    DEFAULT_RAILS
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl CustomMethod {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Substitution { .. } => "Substitution",
            Self::Transposition { .. } => "Transposition",
            Self::Polyalphabetic { .. } => "Polyalphabetic",
            Self::Hybrid { .. } => "Hybrid",
        }
    }
}

/// A named, user-defined cipher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCipher {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Self-assessed complexity, 1 to 5
    #[serde(default = "default_complexity")]
    pub complexity: u8,
    #[serde(flatten)]
    pub method: CustomMethod,
}

fn default_complexity() -> u8 {
    1
}

impl CustomCipher {
    pub fn new(name: impl Into<String>, method: CustomMethod) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            complexity: default_complexity(),
            method,
        }
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        let cipher: Self = serde_json::from_slice(data)?;
        cipher.validate()?;
        Ok(cipher)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.complexity) {
            return Err(CipherError::InvalidComplexity(self.complexity));
        }
        Ok(())
    }

    /// Encode `text` with this cipher
    pub fn apply(&self, text: &str) -> Result<String> {
        self.validate()?;
        match &self.method {
            CustomMethod::Substitution { map } => map.apply(text),
            CustomMethod::Transposition { rails } => rail_fence(text, *rails, Direction::Encode),
            CustomMethod::Polyalphabetic { key } => vigenere(text, key, Direction::Encode),
            CustomMethod::Hybrid { steps } => apply_pipeline(text, steps),
        }
    }

    /// Rough strength score from 0 to 10: a base score for the method plus
    /// the declared complexity
    pub fn security_strength(&self) -> u8 {
        let base = match &self.method {
            CustomMethod::Substitution { map } => {
                if map.len() > 20 {
                    3
                } else {
                    1
                }
            }
            CustomMethod::Transposition { rails } => {
                if *rails > 5 {
                    2
                } else {
                    1
                }
            }
            CustomMethod::Polyalphabetic { key } => {
                if key.chars().count() > 10 {
                    4
                } else {
                    2
                }
            }
            CustomMethod::Hybrid { steps } => {
                steps.len().saturating_mul(2).min(MAX_STRENGTH as usize) as u8
            }
        };
        base.saturating_add(self.complexity).min(MAX_STRENGTH)
    }

    /// Human-readable summary of how the cipher works
    pub fn analysis(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Cipher: {}\n", self.name));
        output.push_str(&format!("Cipher Type: {}\n", self.method.label()));
        let description = if self.description.trim().is_empty() {
            "No description provided."
        } else {
            self.description.as_str()
        };
        output.push_str(&format!("Description: {}\n", description));
        output.push_str(&format!("Perceived Complexity: {}/5\n", self.complexity));

        match &self.method {
            CustomMethod::Substitution { map } => {
                let size = map.len();
                output.push_str(&format!(
                    "Mapping: {} character{} mapped.\n",
                    size,
                    if size == 1 { "" } else { "s" }
                ));
                if size > 0 {
                    let preview: Vec<String> = map
                        .iter()
                        .take(5)
                        .map(|(from, to)| format!("{} -> {}", from, to))
                        .collect();
                    let more = if size > 5 { "..." } else { "" };
                    output.push_str(&format!("  Preview: {}{}\n", preview.join(", "), more));
                } else {
                    output.push_str("  Warning: No character map defined!\n");
                }
            }
            CustomMethod::Transposition { rails } => {
                output.push_str("Method: Rail Fence\n");
                output.push_str(&format!("Rails: {}\n", rails));
            }
            CustomMethod::Polyalphabetic { key } => {
                output.push_str("Method: Vigenère\n");
                let shown = if key.is_empty() { "Not set" } else { key.as_str() };
                output.push_str(&format!("Keyword: {}\n", shown));
                output.push_str(&format!("Key Length: {}\n", key.chars().count()));
            }
            CustomMethod::Hybrid { steps } => {
                output.push_str(&format!("Steps ({}):\n", steps.len()));
                if steps.is_empty() {
                    output.push_str("  Warning: No steps defined for hybrid cipher!\n");
                }
                for (i, step) in steps.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, step));
                }
            }
        }

        output.push_str(&format!(
            "Estimated Security: {}/{}\n",
            self.security_strength(),
            MAX_STRENGTH
        ));
        output
    }
}
