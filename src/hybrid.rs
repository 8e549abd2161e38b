//! Hybrid cipher composition.
//!
//! A pipeline is an ordered list of steps. Each step encodes the output of
//! the previous one:
//!
//! ```text
//! Input → Step 1 → Step 2 → ... → Step N → Output
//! ```
//!
//! Only Caesar, Vigenère, Atbash and Rail Fence can appear as steps, named
//! exactly `caesar`, `vigenere`, `atbash` and `railfence`. Any other step
//! type is skipped. Steps always run in the Encode direction. There is no built-in inverse:
//! to undo a pipeline the caller decodes each step with the individual
//! transforms, last step first.

use crate::cipher::validate_key;
use crate::error::{CipherError, Result};
use crate::params::{CipherKind, CipherParameters, DEFAULT_KEY, DEFAULT_RAILS, DEFAULT_SHIFT};
use crate::transform;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Step selector. Only the four exact lowercase names select a cipher; any
/// other name is kept so the step can be skipped at run time instead of
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StepKind {
    Caesar,
    Vigenere,
    Atbash,
    RailFence,
    Unknown(String),
}

impl StepKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::Atbash => "atbash",
            Self::RailFence => "railfence",
            Self::Unknown(name) => name,
        }
    }

    /// Cipher this step runs, `None` for skipped steps
    pub fn cipher(&self) -> Option<CipherKind> {
        match self {
            Self::Caesar => Some(CipherKind::Caesar),
            Self::Vigenere => Some(CipherKind::Vigenere),
            Self::Atbash => Some(CipherKind::Atbash),
            Self::RailFence => Some(CipherKind::RailFence),
            Self::Unknown(_) => None,
        }
    }
}

impl From<String> for StepKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "caesar" => Self::Caesar,
            "vigenere" => Self::Vigenere,
            "atbash" => Self::Atbash,
            "railfence" => Self::RailFence,
            _ => Self::Unknown(name),
        }
    }
}

impl From<&str> for StepKind {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<StepKind> for String {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Unknown(name) => name,
            known => known.name().to_string(),
        }
    }
}

/// One stage of a hybrid pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HybridStep {
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rails: Option<usize>,
}

impl HybridStep {
    pub fn new(kind: impl Into<StepKind>) -> Self {
        Self {
            kind: kind.into(),
            shift: None,
            key: None,
            rails: None,
        }
    }

    pub fn caesar(shift: i64) -> Self {
        Self {
            shift: Some(shift),
            ..Self::new(StepKind::Caesar)
        }
    }

    pub fn vigenere(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::new(StepKind::Vigenere)
        }
    }

    pub fn atbash() -> Self {
        Self::new(StepKind::Atbash)
    }

    pub fn rail_fence(rails: usize) -> Self {
        Self {
            rails: Some(rails),
            ..Self::new(StepKind::RailFence)
        }
    }

    // A zero shift, zero rails or empty key counts as not set.
    fn shift_or_default(&self) -> Option<i64> {
        self.shift.filter(|s| *s != 0)
    }

    fn key_or_default(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }

    fn rails_or_default(&self) -> Option<usize> {
        self.rails.filter(|r| *r != 0)
    }

    /// Parameters for this step, with defaults for anything missing
    pub fn parameters(&self) -> CipherParameters {
        CipherParameters {
            shift: self.shift_or_default().unwrap_or(DEFAULT_SHIFT),
            key: self.key_or_default().unwrap_or(DEFAULT_KEY).to_string(),
            rails: self.rails_or_default().unwrap_or(DEFAULT_RAILS),
        }
    }

    /// Check the step's parameters without running it.
    /// Unknown steps are always valid since they are skipped.
    pub fn validate(&self) -> Result<()> {
        let params = self.parameters();
        match self.kind {
            StepKind::Vigenere => validate_key(&params.key),
            StepKind::RailFence if params.rails < 2 => {
                Err(CipherError::InvalidRails(params.rails))
            }
            StepKind::Caesar | StepKind::Atbash | StepKind::RailFence | StepKind::Unknown(_) => {
                Ok(())
            }
        }
    }

    fn apply(&self, text: &str) -> Result<String> {
        match self.kind.cipher() {
            Some(kind) => transform::encode(text, kind, &self.parameters()),
            None => {
                trace!(step = %self.kind.name(), "skipping unknown hybrid step");
                Ok(text.to_string())
            }
        }
    }
}

/// Step type with its first letter capitalized, followed by the parameter
/// the step uses, e.g. `Caesar (Shift: 4)` or `Railfence (Rails: default)`.
impl fmt::Display for HybridStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            write!(f, "{}{}", first.to_uppercase(), chars.as_str())?;
        }
        match self.kind {
            StepKind::Caesar => match self.shift_or_default() {
                Some(shift) => write!(f, " (Shift: {})", shift),
                None => write!(f, " (Shift: default)"),
            },
            StepKind::Vigenere => match self.key_or_default() {
                Some(key) => write!(f, " (Key: {})", key),
                None => write!(f, " (Key: default)"),
            },
            StepKind::RailFence => match self.rails_or_default() {
                Some(rails) => write!(f, " (Rails: {})", rails),
                None => write!(f, " (Rails: default)"),
            },
            StepKind::Atbash | StepKind::Unknown(_) => Ok(()),
        }
    }
}

/// Ordered list of hybrid steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HybridPipeline {
    steps: Vec<HybridStep>,
}

impl HybridPipeline {
    pub fn new(steps: Vec<HybridStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[HybridStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Load a pipeline from its JSON form, an array of steps such as
    /// `[{"type": "caesar", "shift": 5}, {"type": "atbash"}]`
    pub fn from_json(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn apply(&self, text: &str) -> Result<String> {
        apply_pipeline(text, &self.steps)
    }
}

impl FromIterator<HybridStep> for HybridPipeline {
    fn from_iter<I: IntoIterator<Item = HybridStep>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Run `steps` over `text` left to right.
///
/// Fails with `EmptyPipeline` when there are no steps. All steps are
/// validated before the first one runs, so a bad step anywhere in the list
/// fails the whole call without producing output.
pub fn apply_pipeline(text: &str, steps: &[HybridStep]) -> Result<String> {
    if steps.is_empty() {
        return Err(CipherError::EmptyPipeline);
    }
    for step in steps {
        step.validate()?;
    }

    debug!(steps = steps.len(), "running hybrid pipeline");

    steps.iter().try_fold(text.to_string(), |acc, step| step.apply(&acc))
}
