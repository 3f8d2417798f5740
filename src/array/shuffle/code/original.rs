use rand::Rng;

/// For every index, swap it with an index drawn uniformly from the whole
/// slice.
///
/// This is not Fisher-Yates: there are n^n equally likely swap sequences
/// for n! permutations, so some orderings come out more often than others.
pub fn shuffle_index_swap<T, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    let n = data.len();
    for i in 0..n {
        let j = rng.random_range(0..n);
        data.swap(i, j);
    }
}
