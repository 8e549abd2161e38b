use crate::error::{CipherError, Result};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Where command input text comes from
#[derive(Debug, Clone, Default)]
pub enum TextSource {
    /// Literal text from the command line
    Inline(String),
    /// Contents of a file
    File(PathBuf),
    /// Standard input
    #[default]
    Stdin,
}

impl TextSource {
    pub fn from_args(text: Option<String>, input: Option<PathBuf>) -> Self {
        match (text, input) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }

    /// Read the full text. A single trailing line break from a file or stdin
    /// is dropped so it does not take part in transposition.
    pub fn read(&self) -> Result<String> {
        let mut text = match self {
            Self::Inline(text) => return Ok(text.clone()),
            Self::File(path) => {
                debug!(path = %path.display(), "reading input file");
                std::fs::read_to_string(path)?
            }
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}

/// Reject blank input the way an interactive front end would
pub fn require_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CipherError::EmptyInput);
    }
    Ok(())
}
