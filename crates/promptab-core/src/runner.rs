use crate::catalog::Catalog;
use crate::config::OptimizerConfig;
use crate::model::{Category, TestResult, Variant};
use crate::score::score_variant;

/// Local time in the `YYYY-MM-DDTHH:MM:SS.ffffff` form used in the results file.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Score every variant against a single scenario.
pub fn simulate_ab_test(
    category: &Category,
    scenario: &str,
    variants: &[Variant],
    baseline: u32,
    timestamp: String,
) -> TestResult {
    TestResult {
        agent_type: category.name.clone(),
        test_scenario: scenario.to_string(),
        baseline_score: baseline,
        variant_results: variants.iter().map(|v| score_variant(v, baseline)).collect(),
        timestamp,
    }
}

pub fn run_batch(catalog: &Catalog, config: &OptimizerConfig) -> Vec<TestResult> {
    run_batch_with_clock(catalog, config, local_timestamp)
}

/// Run every (category, scenario) pair in declaration order.
///
/// `clock` is called once per test result to stamp it.
pub fn run_batch_with_clock<F>(
    catalog: &Catalog,
    config: &OptimizerConfig,
    mut clock: F,
) -> Vec<TestResult>
where
    F: FnMut() -> String,
{
    let mut results = Vec::new();
    for category in catalog.categories() {
        let variants = catalog.variants_for(&category.name);
        tracing::debug!(
            category = %category.name,
            variants = variants.len(),
            scenarios = category.test_scenarios.len(),
            "testing category"
        );
        for scenario in &category.test_scenarios {
            let result = simulate_ab_test(
                category,
                scenario,
                variants,
                config.baseline_score,
                clock(),
            );
            tracing::debug!(
                category = %category.name,
                scenario = %scenario,
                "scenario scored"
            );
            results.push(result);
        }
    }
    tracing::info!(tests = results.len(), "simulation batch finished");
    results
}
