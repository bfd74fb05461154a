//! Command-line entry point for the ablation study.

use std::io::{self, Write};
use std::process;

use clap::Parser;

use survivor_sim::{run_study, write_report, Difficulty, EnemyCatalog, StudyConfig};

/// Monte Carlo ablation study over survivor combat builds.
///
/// Compares the best survival rate found with abilities disabled vs.
/// enabled for every (enemy, difficulty) scenario.
#[derive(Parser, Debug)]
#[command(name = "ablation", version)]
struct Args {
    /// Random builds sampled per scenario (default 2000).
    build_samples: Option<usize>,

    /// Simulated fights per build and ability setting (default 200).
    trials_per_build: Option<u32>,

    /// Base seed for scenario stream derivation (default 42).
    seed_base: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let defaults = StudyConfig::default();
    let config = StudyConfig {
        build_samples: args.build_samples.unwrap_or(defaults.build_samples),
        trials_per_build: args.trials_per_build.unwrap_or(defaults.trials_per_build),
        seed_base: args.seed_base.unwrap_or(defaults.seed_base),
    };

    println!("Ablation study started");
    println!(
        "Config: build_samples={}, trials_per_build={}, seed_base={}",
        config.build_samples, config.trials_per_build, config.seed_base
    );
    println!();

    let catalog = EnemyCatalog::standard();
    let outcome = match run_study(&catalog, &Difficulty::ALL, &config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &outcome.results).expect("failed to write report to stdout");
    out.flush().expect("failed to flush stdout");

    let stats = &outcome.stats;
    println!(
        "Sampled {} builds ({} degenerate skipped), {} fights in {:.2}s ({:.0} fights/s)",
        stats.builds_sampled,
        stats.degenerate_skipped,
        stats.simulations_run,
        stats.time_us as f64 / 1_000_000.0,
        stats.simulations_per_second()
    );
}
