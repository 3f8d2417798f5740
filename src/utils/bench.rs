//! Shared benchmark utilities.
//!
//! Measurements are wall-clock [`Duration`]s.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Measurement value type
pub type Measurement = Duration;

#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Human-readable duration with a unit suited to its magnitude
pub fn format_measurement(d: Duration) -> String {
    let ns = d.as_nanos() as f64;
    if ns < 1_000.0 {
        format!("{:.0} ns", ns)
    } else if ns < 1_000_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else if ns < 1_000_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else {
        format!("{:.2} s", ns / 1_000_000_000.0)
    }
}

/// Calculate standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Compute (average, min, max, std_dev) from a list of durations
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration, Duration) {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return (Duration::ZERO, Duration::ZERO, Duration::ZERO, Duration::ZERO);
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;
    let std_dev = calculate_std_dev(times, avg);

    (avg, min, max, std_dev)
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Reproducible benchmark input
pub fn random_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| rng.random_range(-1_000_000..1_000_000))
        .collect()
}
