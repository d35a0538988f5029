use crate::catalog::Catalog;
use crate::model::TestResult;
use crate::report::{Report, Verdict};
use crate::score::ImprovementBand;
use std::fmt;

/// Modifications listed under "Key Changes" for each best variant.
const KEY_CHANGES: usize = 2;

/// Plain-text rendering of a full run: per-scenario lines, summary, best
/// variants and the final verdict.
pub struct ConsoleReport<'a> {
    catalog: &'a Catalog,
    results: &'a [TestResult],
    report: &'a Report,
}

impl<'a> ConsoleReport<'a> {
    pub fn new(catalog: &'a Catalog, results: &'a [TestResult], report: &'a Report) -> Self {
        Self {
            catalog,
            results,
            report,
        }
    }

    fn fmt_scenarios(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AGENT PROMPT OPTIMIZATION")?;
        writeln!(f, "{}", "=".repeat(50))?;

        for category in self.catalog.categories() {
            writeln!(f)?;
            writeln!(f, "Testing {} Agent Prompts", category.name.to_uppercase())?;
            writeln!(f, "{}", "-".repeat(40))?;
            writeln!(
                f,
                "Generated {} prompt variants for testing",
                self.catalog.variants_for(&category.name).len()
            )?;

            for result in self.results.iter().filter(|r| r.agent_type == category.name) {
                writeln!(f)?;
                writeln!(f, "Testing scenario: {}", result.test_scenario)?;
                for vr in &result.variant_results {
                    writeln!(
                        f,
                        "  [{}] {}: {:.1}% improvement (p={})",
                        ImprovementBand::classify(vr.improvement).label(),
                        vr.variant,
                        vr.improvement,
                        vr.statistical_significance
                    )?;
                }
            }
        }
        Ok(())
    }

    fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.report;
        writeln!(f)?;
        writeln!(f, "OPTIMIZATION REPORT")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Tests Conducted: {}", r.total_tests)?;
        writeln!(f, "Successful Optimizations: {}", r.successful_optimizations)?;
        writeln!(f, "Significant Improvements: {}", r.significant_improvements)?;
        writeln!(f, "Success Rate: {:.1}%", r.success_rate)?;

        writeln!(f)?;
        writeln!(f, "BEST PERFORMING VARIANTS:")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for best in &r.best_variants {
            writeln!(f)?;
            writeln!(f, "{}:", best.category.to_uppercase())?;
            writeln!(f, "  Best Variant: {}", best.variant)?;
            writeln!(f, "  Improvement: {:.1}%", best.improvement)?;
            writeln!(f, "  Description: {}", best.description)?;
            let key_changes: Vec<&str> = best
                .modifications
                .iter()
                .take(KEY_CHANGES)
                .map(String::as_str)
                .collect();
            writeln!(f, "  Key Changes: {}", key_changes.join(", "))?;
            if let (Some(target), Some(met)) = (best.target_improvement, best.met_target()) {
                writeln!(
                    f,
                    "  Target: {}% ({})",
                    target,
                    if met { "met" } else { "missed" }
                )?;
            }
        }
        Ok(())
    }

    fn fmt_verdict(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = self.report.success_rate;
        writeln!(f)?;
        match self.report.verdict {
            Verdict::Complete => {
                writeln!(f, "OPTIMIZATION: COMPLETE")?;
                writeln!(f, "   + High success rate achieved ({rate:.1}%)")?;
                writeln!(f, "   + Significant improvements identified")?;
                writeln!(f, "   + Production-ready optimizations available")?;
            }
            Verdict::MostlyComplete => {
                writeln!(f, "OPTIMIZATION: MOSTLY COMPLETE")?;
                writeln!(f, "   + Good optimization results ({rate:.1}%)")?;
                writeln!(f, "   ! Some variants need refinement")?;
                writeln!(f, "   > Ready for selective implementation")?;
            }
            Verdict::NeedsWork => {
                writeln!(f, "OPTIMIZATION: NEEDS MORE WORK")?;
                writeln!(f, "   - Low success rate ({rate:.1}%)")?;
                writeln!(f, "   > Additional optimization iterations required")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_scenarios(f)?;
        self.fmt_summary(f)?;
        self.fmt_verdict(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptimizerConfig;
    use crate::model::VariantResult;
    use crate::runner::run_batch_with_clock;

    #[test]
    fn renders_default_run() {
        let catalog = Catalog::builtin();
        let config = OptimizerConfig::default();
        let results = run_batch_with_clock(&catalog, &config, String::new);
        let report = Report::build(&results, &catalog, &config);
        let text = ConsoleReport::new(&catalog, &results, &report).to_string();

        assert!(text.starts_with("AGENT PROMPT OPTIMIZATION\n"));
        assert!(text.contains("Testing COFOUNDER Agent Prompts"));
        assert!(text.contains("Generated 2 prompt variants for testing"));
        assert!(text.contains("Testing scenario: Database optimization"));
        assert!(text.contains("  [PASS] B_structured_brief: 25.3% improvement (p=0.95)"));
        assert_eq!(text.matches("Testing scenario:").count(), 9);
        assert!(text.contains("Tests Conducted: 9"));
        assert!(text.contains("Successful Optimizations: 18"));
        assert!(text.contains("Success Rate: 100.0%"));
        assert!(text.contains("PARALLEL-WORKER:\n  Best Variant: A_enhanced_coordination"));
        assert!(text.contains(
            "  Key Changes: Add mandatory test coverage targets, Include code review checkpoints"
        ));
        assert!(text.contains("  Target: 25% (met)"));
        assert!(text.contains("OPTIMIZATION: COMPLETE"));
    }

    #[test]
    fn renders_needs_work_verdict() {
        let catalog = Catalog::default();
        let config = OptimizerConfig::default();
        let results = vec![TestResult {
            agent_type: "solo".into(),
            test_scenario: "only".into(),
            baseline_score: 75,
            variant_results: vec![VariantResult {
                variant: "weak".into(),
                description: "weak variant".into(),
                score: 80,
                improvement: 5.0 / 75.0 * 100.0,
                modifications: vec!["a".into()],
                statistical_significance: 0.85,
            }],
            timestamp: String::new(),
        }];
        let report = Report::build(&results, &catalog, &config);
        let text = ConsoleReport::new(&catalog, &results, &report).to_string();

        assert!(text.contains("Success Rate: 0.0%"));
        assert!(text.contains("  Key Changes: a"));
        assert!(!text.contains("  Target:"));
        assert!(text.contains("OPTIMIZATION: NEEDS MORE WORK"));
        assert!(text.contains("Low success rate (0.0%)"));
    }
}
