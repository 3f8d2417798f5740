//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod runner;
pub mod timer;
pub mod tui;

pub use bench::{calculate_std_dev, compute_stats, random_values, time_seed};
pub use timer::{calculate_median, measure_variants, TimingConfig, Variant, VariantResult};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "library", "bubble")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
