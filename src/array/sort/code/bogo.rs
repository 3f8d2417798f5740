//! Bogosort: shuffle until sorted.
//!
//! Expected running time grows factorially with the range length. Only
//! usable on a handful of elements.

use std::cmp::Ordering;

use rand::Rng;
use tracing::debug;

use crate::array::shuffle::shuffle_slice;
use crate::array::sort::order::sorted_by;
use crate::array::view::ArrayViewMut;

pub fn bogosort<T, F>(view: ArrayViewMut<'_, T>, ordering: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bogosort_with_rng(view, ordering, &mut rand::rng());
}

/// Bogosort drawing from `rng`. Returns the number of shuffles performed,
/// zero when the range was already sorted.
pub fn bogosort_with_rng<T, F, R>(view: ArrayViewMut<'_, T>, mut ordering: F, rng: &mut R) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
    R: Rng + ?Sized,
{
    let data = view.into_mut_slice();
    let mut shuffles = 0usize;

    while !sorted_by(data, &mut ordering) {
        shuffle_slice(data, rng);
        shuffles += 1;
    }

    debug!(len = data.len(), shuffles, "bogosort done");
    shuffles
}
