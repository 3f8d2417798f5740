//! # Shuffle
//!
//! In-place shuffling of an array range. The public [`shuffle`] keeps the
//! index-swap strategy (each index swapped with a uniformly drawn index of
//! the whole range). Its output is always a permutation of the input, but
//! not every permutation is equally likely.
//!
//! The `fisher-yates` variant exists only so the benchmarks can compare
//! against a uniform shuffle.

pub mod code;
pub mod test;

pub use code::{shuffle_fisher_yates, shuffle_index_swap};

use crate::array::view::ArrayViewMut;
use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};
use crate::utils::bench::random_values;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Shuffle the view's range with the thread-local generator.
pub fn shuffle<T>(view: ArrayViewMut<'_, T>) {
    shuffle_with_rng(view, &mut rand::rng());
}

pub fn shuffle_with_rng<T, R: Rng + ?Sized>(view: ArrayViewMut<'_, T>, rng: &mut R) {
    shuffle_slice(view.into_mut_slice(), rng);
}

pub(crate) fn shuffle_slice<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    shuffle_index_swap(data, rng);
}

/// Runner for the shuffle variants
pub struct ShuffleRunner;

impl AlgorithmRunner for ShuffleRunner {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    fn description(&self) -> &'static str {
        "In-place shuffle of random i64 values"
    }

    fn category(&self) -> &'static str {
        "array"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures(&self, size: usize, seed: u64) -> Vec<VariantClosure<'_>> {
        let data: Arc<Vec<i64>> = Arc::new(random_values(size, seed));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let func = v.function;
                let mut buffer: Vec<i64> = Vec::with_capacity(data.len());
                let mut rng = StdRng::seed_from_u64(seed);

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        buffer.clear();
                        buffer.extend_from_slice(&data);
                        let (elapsed, _) = crate::measure!(func(&mut buffer, &mut rng));
                        // No comparable result: variants draw differently.
                        (elapsed, None)
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
