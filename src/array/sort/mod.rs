//! # Sorting
//!
//! In-place sorts over the inclusive range of an [`ArrayViewMut`]:
//!
//! - **library**: the standard library's unstable sort, O(n log n)
//! - **bubble**: adjacent swaps, O(n²)
//! - **gnome**: swap backwards until in place, O(n²)
//! - **bogo**: shuffle until sorted, unbounded
//! - **miracle**: wait until sorted, never returns on unsorted input
//!
//! Orderings are plain three-way comparisons. [`ascending`] and
//! [`descending`] cover the common cases.

pub mod code;
pub mod order;

pub use code::*;
pub use order::{ascending, descending, is_sorted, OrderingFn};

use crate::array::view::ArrayViewMut;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::random_values;
use std::sync::Arc;

/// Runner for the sorting variants
pub struct SortRunner;

impl AlgorithmRunner for SortRunner {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "Ascending in-place sort of random i64 values"
    }

    fn category(&self) -> &'static str {
        "array"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'_>> {
        if size == 0 {
            return Vec::new();
        }
        let data: Arc<Vec<i64>> = Arc::new(random_values(size, seed));

        code::available_variants()
            .into_iter()
            .filter(|v| code::runs_at_size(v.name, size))
            .map(|v| {
                let data = Arc::clone(&data);
                let func = v.function;
                let mut buffer: Vec<i64> = Vec::with_capacity(data.len());

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        buffer.clear();
                        buffer.extend_from_slice(&data);
                        let Ok(view) = ArrayViewMut::full(&mut buffer) else {
                            unreachable!("benchmark input is never empty");
                        };
                        let (elapsed, _) = crate::measure!(func(view, ascending::<i64>));
                        (elapsed, Some(checksum(&buffer)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}

/// Position-weighted sum, equal across variants only when the order is.
fn checksum(values: &[i64]) -> f64 {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64 + 1.0) * v as f64)
        .sum()
}
