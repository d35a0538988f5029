//! Prompt variant A/B simulation.
//!
//! A fixed [`Catalog`] of agent categories is expanded into one [`TestResult`]
//! per (category, scenario) pair. Variant scores come from a stable hash of the
//! variant name, so every run produces the same numbers. The results are then
//! rolled up into a [`Report`] with a best variant per category and an overall
//! [`Verdict`].

pub mod catalog;
pub mod config;
pub mod console;
pub mod errors;
pub mod model;
pub mod output;
pub mod report;
pub mod runner;
pub mod score;

pub use catalog::Catalog;
pub use config::OptimizerConfig;
pub use console::ConsoleReport;
pub use errors::PromptAbError;
pub use model::{Category, TestResult, Variant, VariantResult};
pub use output::write_results;
pub use report::{BestVariant, Report, Verdict, VARIANTS_PER_TEST};
pub use runner::{run_batch, run_batch_with_clock, simulate_ab_test};
pub use score::{improvement_for, score_variant, stable_hash, ImprovementBand};
