use std::cmp::Ordering;

use crate::array::sort::order::sorted_by;
use crate::array::view::ArrayViewMut;

/// Wait for the range to become sorted on its own.
///
/// Returns at once when the range is already sorted. Otherwise it spins
/// forever: the view is borrowed exclusively, so nothing can ever sort it.
pub fn miracle_sort<T, F>(view: ArrayViewMut<'_, T>, mut ordering: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let data = view.into_mut_slice();
    while !sorted_by(data, &mut ordering) {
        std::hint::spin_loop();
    }
}
