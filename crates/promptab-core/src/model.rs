use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named group of test scenarios sharing one pair of prompt variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub metrics: Vec<String>,
    /// Improvement (percent) the category is expected to reach.
    pub target_improvement: u32,
    pub test_scenarios: Vec<String>,
}

/// One candidate modification of a base prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub variant: String,
    pub description: String,
    pub modifications: Vec<String>,
    pub prompt_changes: BTreeMap<String, String>,
}

/// Outcome of one variant inside a single scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantResult {
    pub variant: String,
    pub description: String,
    pub score: u32,
    /// Percent gain of `score` over the baseline.
    pub improvement: f64,
    pub modifications: Vec<String>,
    pub statistical_significance: f64,
}

/// All variant outcomes for one (category, scenario) pair.
///
/// Field names are the on-disk JSON names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub agent_type: String,
    pub test_scenario: String,
    pub baseline_score: u32,
    pub variant_results: Vec<VariantResult>,
    pub timestamp: String,
}
