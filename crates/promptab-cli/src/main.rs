use anyhow::Context;
use promptab_core::{
    run_batch, write_results, Catalog, ConsoleReport, OptimizerConfig, Report,
};

pub mod exit_codes;

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();
    let code = match run() {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::INTERNAL_ERROR
        }
    };
    std::process::exit(code);
}

fn run() -> anyhow::Result<()> {
    let config = OptimizerConfig::default();
    let catalog = Catalog::builtin();

    let results = run_batch(&catalog, &config);
    let report = Report::build(&results, &catalog, &config);
    print!("{}", ConsoleReport::new(&catalog, &results, &report));
    tracing::info!(verdict = ?report.verdict, passed = report.passed(), "optimization assessed");

    write_results(&config.output_path, &results)
        .context("could not persist optimization results")?;

    println!();
    println!("Results saved to: {}", config.output_path.display());
    Ok(())
}
