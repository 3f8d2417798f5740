//! Orderings and the sortedness check.

use std::cmp::Ordering;

use crate::array::view::ArrayView;

/// Plain function ordering, as stored in variant tables.
pub type OrderingFn<T> = fn(&T, &T) -> Ordering;

/// Smaller elements first. Values not comparable to themselves (NaN) go
/// last and compare equal to each other.
pub fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| unordered_last(a, b))
}

/// Larger elements first. Values not comparable to themselves (NaN) go
/// last and compare equal to each other.
pub fn descending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    b.partial_cmp(a).unwrap_or_else(|| unordered_last(a, b))
}

fn unordered_last<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    let unordered = |x: &T| x.partial_cmp(x).is_none();
    unordered(a).cmp(&unordered(b))
}

/// True when no adjacent pair in range is out of `ordering`.
pub fn is_sorted<T, F>(view: ArrayView<'_, T>, mut ordering: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    sorted_by(view.as_slice(), &mut ordering)
}

pub(crate) fn sorted_by<T, F>(data: &[T], ordering: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|pair| ordering(&pair[0], &pair[1]) != Ordering::Greater)
}
