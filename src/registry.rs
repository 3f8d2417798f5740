//! Algorithm registry for variant discovery, verification and benchmarks.
//!
//! Each algorithm exposes its implementation variants behind one
//! [`AlgorithmRunner`], so the CLI can list, verify and measure them
//! without knowing their signatures.

use crate::error::Result;
use crate::utils::timer::{Variant, VariantResult};

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that runs and times one iteration of a variant
pub type VariantClosure<'a> = Variant<'a>;

/// Trait that all algorithm runners must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "sort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "array")
    fn category(&self) -> &'static str;

    /// Names of the registered variants, reference first
    fn available_variants(&self) -> Vec<&'static str>;

    /// Closures for each variant able to run at `size`, built over the same
    /// input generated from `seed`. The reference variant comes first.
    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'_>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<()>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::array::sort::SortRunner);
    registry.register(crate::array::shuffle::ShuffleRunner);

    registry
}
