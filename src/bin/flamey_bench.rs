//! CLI for verifying and benchmarking the registered sort variants.
//!
//! Usage:
//!   flamey-bench              # Run all algorithms
//!   flamey-bench --list       # List available algorithms
//!   flamey-bench --verify     # Check every variant against its reference
//!   flamey-bench sort         # Run one algorithm

use clap::Parser;
use flamey_utils::registry::{build_registry, AlgorithmRunner};
use flamey_utils::tracing_config::init_tracing;
use flamey_utils::utils::runner::{export_csv, raw_timings, run_benchmarks};
use flamey_utils::utils::timer::TimingConfig;
use flamey_utils::{tui, Result};

#[derive(Parser, Debug)]
#[command(name = "flamey-bench", version, about = "Verify and benchmark sort variants")]
struct Args {
    /// Name of a specific algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    list: bool,

    /// Verify variants instead of benchmarking them
    #[arg(long)]
    verify: bool,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_value = "6,64,256,1024")]
    sizes: Vec<usize>,

    /// Number of measured runs per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Number of warmup runs per variant
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Random seed for reproducible inputs and schedules (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// Export raw timings to a CSV file
    #[arg(long)]
    csv: Option<String>,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let registry = build_registry();

    if args.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let algos: Vec<&dyn AlgorithmRunner> = match &args.algorithm {
        Some(name) => match registry.find(name) {
            Some(algo) => vec![algo],
            None => {
                eprintln!("Algorithm '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                std::process::exit(1);
            }
        },
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    if args.verify {
        let mut failed = false;
        for algo in &algos {
            let outcome = algo.verify();
            tui::print_verification(*algo, &outcome);
            failed |= outcome.is_err();
        }
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = TimingConfig {
        runs_per_variant: args.runs,
        warmup_iterations: args.warmup,
        seed: args.seed,
    };

    tui::print_header();
    for algo in &algos {
        tui::print_algo_info_box(*algo);
    }

    let reports = run_benchmarks(&algos, &args.sizes, &config, |report| {
        println!("  [{}]", report.algo_name);
        tui::print_results_table(&report.results, report.size, config.runs_per_variant);
    });

    if let Some(path) = &args.csv {
        export_csv(path, &raw_timings(&reports))?;
        println!("Raw timings written to {}", path);
    }

    println!("Note: Speedup is relative to the first variant (the reference).");
    Ok(())
}
