//! Timing system for variant benchmarks.
//!
//! - Warmup before any measurement
//! - Randomized variant execution to avoid ordering bias
//! - All raw measurements kept for CSV export

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

use super::bench::{compute_stats, time_seed, to_nanos, Measurement};

/// Time one expression, returning `(elapsed, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
    /// Seed for the task schedule and the generated inputs (default: time-based)
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            seed: None,
        }
    }
}

impl TimingConfig {
    pub fn seed_or_time(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs once and returns (measurement, optional result value).
    /// Timing happens inside the closure so setup is not measured.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Precise average in nanoseconds
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of measured runs
    pub iterations: usize,
    /// Sample result value, for algorithms with comparable results
    pub result_sample: Option<f64>,
    /// Every raw measurement, in execution order
    pub raw: Vec<Duration>,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Creates a randomized task schedule
/// 3. Measures each variant `runs_per_variant` times
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // Randomized task schedule: (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(config.seed_or_time()));

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for (variant_idx, _) in tasks {
        let (elapsed_time, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed_time);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            let result_sample = result_samples[idx].take();
            compute_variant_result(variant.name, variant.description, times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: Vec<Measurement>,
    result_sample: Option<f64>,
) -> VariantResult {
    let (avg_time, min_time, max_time, std_dev) = compute_stats(&times);
    let total_ns: u64 = times.iter().map(|&t| to_nanos(t)).sum();
    let avg_nanos_f64 = total_ns as f64 / times.len().max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time,
        avg_nanos_f64,
        median_time: calculate_median(&times),
        min_time,
        max_time,
        std_dev,
        iterations: times.len(),
        result_sample,
        raw: times,
    }
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
