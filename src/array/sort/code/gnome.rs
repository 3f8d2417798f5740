use std::cmp::Ordering;

use tracing::trace;

use crate::array::view::ArrayViewMut;

/// Gnome sort: step forward while the pair behind is in order, otherwise
/// swap it and step back. O(n²).
pub fn gnome_sort<T, F>(view: ArrayViewMut<'_, T>, mut ordering: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let data = view.into_mut_slice();
    let mut pos = 0usize;
    let mut swaps = 0usize;

    while pos < data.len() {
        if pos == 0 || ordering(&data[pos - 1], &data[pos]) != Ordering::Greater {
            pos += 1;
        } else {
            data.swap(pos - 1, pos);
            swaps += 1;
            pos -= 1;
        }
    }

    trace!(len = data.len(), swaps, "gnome sort done");
}
