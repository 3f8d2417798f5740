//! Verification and tests for the shuffle variants.

use super::code::available_variants;
use crate::error::{Result, UtilError};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Every variant must return a permutation of its input.
pub fn verify_all() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5417_f1e5);

    for variant in available_variants() {
        for size in [0usize, 1, 2, 7, 100] {
            let input: Vec<i64> = (0..size as i64).collect();
            let mut data = input.clone();
            (variant.function)(&mut data, &mut rng);
            data.sort_unstable();

            if data != input {
                return Err(UtilError::Verification {
                    variant: variant.name.to_string(),
                    reason: format!("output over {} elements is not a permutation", size),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::shuffle::{shuffle, shuffle_with_rng};
    use crate::array::view::ArrayViewMut;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All shuffle variants should permute");
    }

    #[test]
    fn test_shuffle_is_always_a_permutation() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [[0usize; 4]; 4];

        for _ in 0..10_000 {
            let mut data = [0usize, 1, 2, 3];
            shuffle_with_rng(ArrayViewMut::full(&mut data).unwrap(), &mut rng);

            let mut sorted = data;
            sorted.sort_unstable();
            assert_eq!(sorted, [0, 1, 2, 3]);

            for (position, &value) in data.iter().enumerate() {
                counts[value][position] += 1;
            }
        }

        // Every element reaches every position, whatever the skew.
        assert!(counts.iter().flatten().all(|&c| c > 0));
    }

    #[test]
    fn test_shuffle_only_touches_range() {
        let mut data = [-1, 0, 1, 2, 3, 4, -1];
        for _ in 0..100 {
            shuffle(ArrayViewMut::new(&mut data, 1, 5).unwrap());
            assert_eq!(data[0], -1);
            assert_eq!(data[6], -1);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut a: Vec<i32> = (0..32).collect();
        let mut b = a.clone();
        shuffle_with_rng(ArrayViewMut::full(&mut a).unwrap(), &mut StdRng::seed_from_u64(9));
        shuffle_with_rng(ArrayViewMut::full(&mut b).unwrap(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
