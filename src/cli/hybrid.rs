use crate::cli::input::require_text;
use crate::error::Result;
use crate::hybrid::HybridPipeline;
use std::path::Path;

/// Load a JSON pipeline definition
pub fn load_pipeline(path: &Path) -> Result<HybridPipeline> {
    let data = std::fs::read(path)?;
    HybridPipeline::from_json(&data)
}

/// Encode `text` through the pipeline stored at `steps_path`
pub fn run_hybrid(text: &str, steps_path: &Path) -> Result<String> {
    require_text(text)?;
    let pipeline = load_pipeline(steps_path)?;
    pipeline.apply(text)
}
