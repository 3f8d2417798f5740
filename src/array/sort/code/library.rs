//! Standard library sort.
//!
//! This is the reference every other variant is verified against.

use std::cmp::Ordering;

use crate::array::sort::order::{ascending, descending};
use crate::array::view::ArrayViewMut;

/// Unstable pattern-defeating quicksort from the standard library.
///
/// # Example
/// ```
/// use flamey_utils::array::{sort, ArrayViewMut};
///
/// let mut data = [5, 3, 9, 1, 7];
/// sort::library_sort(ArrayViewMut::new(&mut data, 1, 3).unwrap(), sort::ascending);
/// assert_eq!(data, [5, 1, 3, 9, 7]);
/// ```
pub fn library_sort<T, F>(view: ArrayViewMut<'_, T>, ordering: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    view.into_mut_slice().sort_unstable_by(ordering);
}

pub fn sort_ascending<T: PartialOrd>(view: ArrayViewMut<'_, T>) {
    library_sort(view, ascending::<T>);
}

pub fn sort_descending<T: PartialOrd>(view: ArrayViewMut<'_, T>) {
    library_sort(view, descending::<T>);
}
