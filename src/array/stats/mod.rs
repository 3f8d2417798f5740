//! # Range Statistics
//!
//! Linear scans over an [`ArrayView`]. None of them mutate the array, and
//! every index they return is absolute (relative to the whole array, not to
//! the start of the range).
//!
//! Ties always go to the earliest element: comparisons are strict, so a
//! later element only wins when it is strictly better.
//!
//! The "median" here is the element closest to the arithmetic mean, not
//! the middle element of the sorted range:
//!
//! ```
//! use flamey_utils::array::{stats, ArrayView};
//!
//! let data = [1, 2, 3, 4, 100];
//! let view = ArrayView::full(&data).unwrap();
//! assert_eq!(stats::median_by_mean(view), 4);
//! ```

#[cfg(test)]
pub mod test;

use super::element::Element;
use super::view::ArrayView;

/// Arithmetic mean of the range.
pub fn average<T: Element>(view: ArrayView<'_, T>) -> f64 {
    let sum = view
        .as_slice()
        .iter()
        .fold(T::Wide::default(), |acc, &value| acc + value.widen());

    T::wide_to_f64(sum) / view.len() as f64
}

pub fn min_value<T: PartialOrd + Copy>(view: ArrayView<'_, T>) -> T {
    view.as_slice()[index_of_best(view, |candidate, best| candidate < best) - view.start()]
}

pub fn max_value<T: PartialOrd + Copy>(view: ArrayView<'_, T>) -> T {
    view.as_slice()[index_of_best(view, |candidate, best| candidate > best) - view.start()]
}

pub fn min_index<T: PartialOrd>(view: ArrayView<'_, T>) -> usize {
    index_of_best(view, |candidate, best| candidate < best)
}

pub fn max_index<T: PartialOrd>(view: ArrayView<'_, T>) -> usize {
    index_of_best(view, |candidate, best| candidate > best)
}

/// Element whose distance to [`average`] is smallest.
pub fn median_by_mean<T: Element>(view: ArrayView<'_, T>) -> T {
    view.as_slice()[median_by_mean_index(view) - view.start()]
}

/// Index of the element whose distance to [`average`] is smallest.
pub fn median_by_mean_index<T: Element>(view: ArrayView<'_, T>) -> usize {
    let mean = average(view);
    let distance = |value: &T| (value.to_f64() - mean).abs();

    index_of_best(view, |candidate, best| distance(candidate) < distance(best))
}

/// Single pass keeping the first index for which no later element is
/// strictly `better`.
fn index_of_best<T, F>(view: ArrayView<'_, T>, mut better: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut best = view.start();
    let data = view.as_slice();

    for (index, value) in view.indexed() {
        if better(value, &data[best - view.start()]) {
            best = index;
        }
    }

    best
}
