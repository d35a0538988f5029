use crate::errors::PromptAbError;
use crate::model::TestResult;
use std::path::Path;

/// Persist `results` as a pretty-printed JSON array.
pub fn write_results(path: &Path, results: &[TestResult]) -> Result<(), PromptAbError> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).map_err(|source| PromptAbError::WriteResults {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), tests = results.len(), "results written");
    Ok(())
}
