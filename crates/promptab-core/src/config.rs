use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the persisted results, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "prompt-optimization-results.json";

/// Thresholds and paths used by a run.
///
/// The binary takes no flags, so `Default` is the effective configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub baseline_score: u32,
    /// Minimum improvement (percent) that counts as a successful optimization.
    pub success_threshold: f64,
    /// Minimum improvement (percent) that counts as significant.
    pub significant_threshold: f64,
    pub min_significance: f64,
    /// Success rate at or above which the run is complete.
    pub complete_rate: f64,
    /// Success rate at or above which the run is mostly complete.
    pub mostly_complete_rate: f64,
    pub output_path: PathBuf,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            baseline_score: 75,
            success_threshold: 10.0,
            significant_threshold: 15.0,
            min_significance: 0.90,
            complete_rate: 80.0,
            mostly_complete_rate: 60.0,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
