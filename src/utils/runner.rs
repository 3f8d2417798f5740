//! Benchmark driver: run registered algorithms over input sizes, and export
//! raw timing data to CSV.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::to_nanos;
use crate::utils::timer::{measure_variants, TimingConfig};

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub run_index: usize,
    pub nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of one algorithm at one input size
pub struct SizeReport {
    pub algo_name: &'static str,
    pub size: usize,
    pub results: Vec<BenchmarkResult>,
}

/// Measure every variant of every algorithm at every size.
///
/// `on_report` sees each report as soon as it is measured, so the caller
/// can print progressively.
pub fn run_benchmarks<F>(
    algos: &[&dyn AlgorithmRunner],
    sizes: &[usize],
    config: &TimingConfig,
    mut on_report: F,
) -> Vec<SizeReport>
where
    F: FnMut(&SizeReport),
{
    let seed = config.seed_or_time();
    let config = TimingConfig {
        seed: Some(seed),
        ..config.clone()
    };
    info!(seed, algorithms = algos.len(), "starting benchmarks");

    let mut reports = Vec::new();
    for algo in algos {
        for &size in sizes {
            let closures = algo.get_variant_closures(size, seed);
            debug!(algo = algo.name(), size, variants = closures.len(), "measuring");

            let report = SizeReport {
                algo_name: algo.name(),
                size,
                results: measure_variants(closures, &config),
            };
            on_report(&report);
            reports.push(report);
        }
    }

    reports
}

/// Flatten reports into one row per raw measurement
pub fn raw_timings(reports: &[SizeReport]) -> Vec<RawTimingData> {
    reports
        .iter()
        .flat_map(|report| {
            report.results.iter().flat_map(move |result| {
                result
                    .raw
                    .iter()
                    .enumerate()
                    .map(move |(run_index, &t)| RawTimingData {
                        algo_name: report.algo_name.to_string(),
                        variant_name: result.name.clone(),
                        input_size: report.size,
                        run_index,
                        nanos: to_nanos(t),
                        result_sample: result.result_sample,
                    })
            })
        })
        .collect()
}

/// Export timing data to CSV file
pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> Result<()> {
    let mut file = std::fs::File::create(path.as_ref())?;
    write_csv(&mut file, data)?;
    info!(path = %path.as_ref().display(), rows = data.len(), "exported timings");
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> Result<()> {
    writeln!(out, "algorithm,variant,input_size,run,time_ns,result")?;

    for entry in data {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            entry.input_size,
            entry.run_index,
            entry.nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
