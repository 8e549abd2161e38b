use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(&'static str),

    #[error("Invalid rails: {0}. Rail Fence cipher requires at least 2 rails")]
    InvalidRails(usize),

    #[error("No steps defined for hybrid cipher")]
    EmptyPipeline,

    #[error("You must enter some text to encode or decode")]
    EmptyInput,

    #[error("Character mapping is not defined")]
    EmptyCharacterMap,

    #[error("Invalid complexity: {0}. Must be between 1 and 5")]
    InvalidComplexity(u8),

    #[error("Unsupported cipher: {0}")]
    UnsupportedCipher(String),
}

impl CipherError {
    pub(crate) const KEY_REQUIRED: &'static str = "a key is required";
    pub(crate) const KEY_NEEDS_LETTER: &'static str = "key must contain at least one letter";
}

pub type Result<T> = std::result::Result<T, CipherError>;
