use crate::cli::input::require_text;
use crate::custom::CustomCipher;
use crate::error::Result;
use std::path::Path;

/// Load a JSON custom cipher definition
pub fn load_custom(path: &Path) -> Result<CustomCipher> {
    let data = std::fs::read(path)?;
    CustomCipher::from_json(&data)
}

/// Encode `text` with the custom cipher stored at `cipher_path`.
/// With `analysis`, the cipher's description report follows the output.
pub fn run_custom(text: &str, cipher_path: &Path, analysis: bool) -> Result<String> {
    require_text(text)?;
    let cipher = load_custom(cipher_path)?;
    let encoded = cipher.apply(text)?;
    if !analysis {
        return Ok(encoded);
    }
    Ok(format!("{}\n\n{}", encoded, cipher.analysis().trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_custom_with_analysis() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cipher.json");
        std::fs::write(
            &path,
            r#"{"name": "Poly", "complexity": 2, "type": "polyalphabetic", "key": "KEY"}"#,
        )
        .unwrap();

        assert_eq!(run_custom("HELLO", &path, false).unwrap(), "RIJVS");

        let output = run_custom("HELLO", &path, true).unwrap();
        assert!(output.starts_with("RIJVS\n\n"));
        assert!(output.contains("Keyword: KEY"));
        assert!(output.contains("Estimated Security: 4/10"));
    }
}
