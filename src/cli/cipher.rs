use crate::cli::input::require_text;
use crate::error::Result;
use crate::params::{CipherKind, CipherParameters, Direction};
use crate::transform::apply;

/// Options for the encode and decode commands
#[derive(Debug, Clone)]
pub struct CipherOptions {
    pub kind: CipherKind,
    pub params: CipherParameters,
    pub direction: Direction,
}

impl Default for CipherOptions {
    fn default() -> Self {
        Self {
            kind: CipherKind::Caesar,
            params: CipherParameters::default(),
            direction: Direction::Encode,
        }
    }
}

/// Encode or decode `text` with a single cipher
pub fn run_cipher(text: &str, options: &CipherOptions) -> Result<String> {
    require_text(text)?;
    apply(text, options.kind, &options.params, options.direction)
}
