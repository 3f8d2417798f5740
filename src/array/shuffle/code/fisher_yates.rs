use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform Fisher-Yates shuffle from `rand`. Benchmark comparison only.
pub fn shuffle_fisher_yates<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    data.shuffle(rng);
}
