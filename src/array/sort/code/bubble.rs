use std::cmp::Ordering;

use tracing::trace;

use crate::array::view::ArrayViewMut;

/// Adjacent-swap bubble sort, O(n²).
pub fn bubble_sort<T, F>(view: ArrayViewMut<'_, T>, mut ordering: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let data = view.into_mut_slice();
    let n = data.len();
    let mut swaps = 0usize;

    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            if ordering(&data[j], &data[j + 1]) == Ordering::Greater {
                data.swap(j, j + 1);
                swaps += 1;
            }
        }
    }

    trace!(len = n, swaps, "bubble sort done");
}
