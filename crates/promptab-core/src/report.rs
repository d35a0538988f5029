//! Roll-up of all test results into counts, best variants and a verdict.

use crate::catalog::Catalog;
use crate::config::OptimizerConfig;
use crate::model::TestResult;
use serde::Serialize;

/// Variants assumed per test when computing the success rate.
///
/// This is fixed rather than counted from the results, so a catalog with more
/// than two variants per category over-reports the rate.
pub const VARIANTS_PER_TEST: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestVariant {
    pub category: String,
    pub variant: String,
    pub improvement: f64,
    pub description: String,
    pub modifications: Vec<String>,
    /// Target of the category, when it is known to the catalog.
    pub target_improvement: Option<u32>,
}

impl BestVariant {
    pub fn met_target(&self) -> Option<bool> {
        self.target_improvement
            .map(|t| self.improvement >= f64::from(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Complete,
    MostlyComplete,
    NeedsWork,
}

impl Verdict {
    pub fn from_rate(success_rate: f64, config: &OptimizerConfig) -> Self {
        if success_rate >= config.complete_rate {
            Self::Complete
        } else if success_rate >= config.mostly_complete_rate {
            Self::MostlyComplete
        } else {
            Self::NeedsWork
        }
    }

    pub fn passed(self) -> bool {
        !matches!(self, Self::NeedsWork)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_tests: usize,
    pub successful_optimizations: usize,
    pub significant_improvements: usize,
    pub success_rate: f64,
    /// One entry per category, in the order categories first appear.
    pub best_variants: Vec<BestVariant>,
    pub verdict: Verdict,
}

impl Report {
    pub fn build(results: &[TestResult], catalog: &Catalog, config: &OptimizerConfig) -> Self {
        let mut successful = 0;
        let mut significant = 0;
        let mut best: Vec<BestVariant> = Vec::new();

        for result in results {
            for vr in &result.variant_results {
                if vr.improvement >= config.success_threshold {
                    successful += 1;
                }
                if vr.improvement >= config.significant_threshold
                    && vr.statistical_significance >= config.min_significance
                {
                    significant += 1;
                }

                let candidate = BestVariant {
                    category: result.agent_type.clone(),
                    variant: vr.variant.clone(),
                    improvement: vr.improvement,
                    description: vr.description.clone(),
                    modifications: vr.modifications.clone(),
                    target_improvement: catalog
                        .category(&result.agent_type)
                        .map(|c| c.target_improvement),
                };
                match best.iter_mut().find(|b| b.category == result.agent_type) {
                    // strict: the first variant seen keeps ties
                    Some(current) if vr.improvement > current.improvement => *current = candidate,
                    Some(_) => {}
                    None => best.push(candidate),
                }
            }
        }

        let total_tests = results.len();
        let success_rate = success_rate(successful, total_tests);
        tracing::debug!(
            total_tests,
            successful,
            significant,
            success_rate,
            "report aggregated"
        );

        Self {
            total_tests,
            successful_optimizations: successful,
            significant_improvements: significant,
            success_rate,
            best_variants: best,
            verdict: Verdict::from_rate(success_rate, config),
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict.passed()
    }
}

fn success_rate(successful: usize, total_tests: usize) -> f64 {
    let slots = total_tests * VARIANTS_PER_TEST;
    if slots == 0 {
        return 0.0;
    }
    successful as f64 / slots as f64 * 100.0
}
