use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptAbError {
    #[error("failed to serialize test results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write results to {}", .path.display())]
    WriteResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
