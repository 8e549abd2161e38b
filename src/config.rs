//! Config file handling.

use crate::error::Result;
use crate::params::{CipherParameters, DEFAULT_KEY, DEFAULT_RAILS, DEFAULT_SHIFT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Defaults used by the command line when a parameter flag is omitted.
///
/// ```toml
/// shift = 7
/// key = "LEMON"
/// rails = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub shift: Option<i64>,
    pub key: Option<String>,
    pub rails: Option<usize>,
}

impl Config {
    /// Read a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Build parameters, preferring explicit values over the config file and
    /// the config file over built-in defaults
    pub fn parameters(
        &self,
        shift: Option<i64>,
        key: Option<String>,
        rails: Option<usize>,
    ) -> CipherParameters {
        CipherParameters {
            shift: shift.or(self.shift).unwrap_or(DEFAULT_SHIFT),
            key: key
                .or_else(|| self.key.clone())
                .unwrap_or_else(|| DEFAULT_KEY.to_string()),
            rails: rails.or(self.rails).unwrap_or(DEFAULT_RAILS),
        }
    }
}
