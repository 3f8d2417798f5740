//! Tests for range statistics.

#[cfg(test)]
mod tests {
    use crate::array::stats::*;
    use crate::array::view::ArrayView;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPSILON: f64 = 1e-9;

    fn assert_close(a: f64, b: f64, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    fn full<T>(data: &[T]) -> ArrayView<'_, T> {
        ArrayView::full(data).unwrap()
    }

    #[test]
    fn test_average_basic() {
        assert_close(average(full(&[1, 2, 3, 4])), 2.5, "average basic");
        assert_close(average(full(&[-3.5f32, 3.5])), 0.0, "average floats");
    }

    #[test]
    fn test_average_subrange() {
        let data = [100, 1, 2, 3, 100];
        let view = ArrayView::new(&data, 1, 3).unwrap();
        assert_close(average(view), 2.0, "average subrange");
    }

    #[test]
    fn test_average_does_not_overflow() {
        let data = [i64::MAX, i64::MAX, i64::MAX];
        assert_close(
            average(full(&data)) / i64::MAX as f64,
            1.0,
            "average of i64::MAX",
        );

        let bytes = [u8::MAX; 1000];
        assert_close(average(full(&bytes)), 255.0, "average of u8::MAX");
    }

    #[test]
    fn test_average_matches_independent_mean() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.random_range(1..64);
            let data: Vec<i32> = (0..len).map(|_| rng.random_range(-1000..1000)).collect();
            let start = rng.random_range(0..len);
            let end = rng.random_range(start..len);

            let expected = data[start..=end].iter().map(|&v| v as f64).sum::<f64>()
                / (end - start + 1) as f64;
            let view = ArrayView::new(&data, start, end).unwrap();
            assert!((average(view) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_extremes_first_occurrence_wins() {
        let data = [3, 1, 1, 5, 1];
        assert_eq!(min_index(full(&data)), 1);
        assert_eq!(min_value(full(&data)), 1);

        let data = [2, 9, 4, 9];
        assert_eq!(max_index(full(&data)), 1);
        assert_eq!(max_value(full(&data)), 9);
    }

    #[test]
    fn test_extreme_indices_are_absolute() {
        let data = [0, 7, 5, 9, 0];
        let view = ArrayView::new(&data, 1, 3).unwrap();
        assert_eq!(min_index(view), 2);
        assert_eq!(max_index(view), 3);
        assert_eq!(min_value(view), 5);
    }

    #[test]
    fn test_single_element_range() {
        let data = [4, 8, 15];
        let view = ArrayView::new(&data, 2, 2).unwrap();
        assert_eq!(min_index(view), 2);
        assert_eq!(max_index(view), 2);
        assert_eq!(median_by_mean(view), 15);
        assert_close(average(view), 15.0, "single element average");
    }

    #[test]
    fn test_median_by_mean_is_not_order_statistic() {
        // mean = 22, distances = [21, 20, 19, 18, 78]
        let data = [1, 2, 3, 4, 100];
        assert_eq!(median_by_mean(full(&data)), 4);
        assert_eq!(median_by_mean_index(full(&data)), 3);
    }

    #[test]
    fn test_median_by_mean_tie_keeps_first() {
        // mean = 2.5, both 2 and 3 are 0.5 away
        let data = [2, 3, 2, 3];
        assert_eq!(median_by_mean_index(full(&data)), 0);

        let data = [3, 2];
        assert_eq!(median_by_mean(full(&data)), 3);
    }

    #[test]
    fn test_median_by_mean_keeps_fractional_distance() {
        // mean = 1.4: 1 is 0.4 away, 2 is 0.6 away
        let data = [2, 1, 1, 2, 1];
        assert_eq!(median_by_mean_index(full(&data)), 1);
    }

    #[test]
    fn test_floats() {
        let data = [0.5, -2.0, 8.25, 1.0];
        assert_eq!(min_value(full(&data)), -2.0);
        assert_eq!(max_value(full(&data)), 8.25);
        assert_eq!(median_by_mean(full(&data)), 1.0);
    }
}
