//! Sorting implementations.
//!
//! Every sort takes a mutable view and an ordering, and only reorders the
//! elements inside the view's range.

mod bogo;
mod bubble;
mod gnome;
mod library;
mod miracle;

pub use bogo::{bogosort, bogosort_with_rng};
pub use bubble::bubble_sort;
pub use gnome::gnome_sort;
pub use library::{library_sort, sort_ascending, sort_descending};
pub use miracle::miracle_sort;

use crate::array::sort::order::OrderingFn;
use crate::array::view::ArrayViewMut;
use crate::utils::VariantInfo;

/// Signature shared by the registered variants.
pub type SortFn = fn(ArrayViewMut<'_, i64>, OrderingFn<i64>);

/// Largest range bogosort is run on by the verifier and the benchmarks.
pub const BOGO_MAX_SIZE: usize = 6;

/// All registered variants. `miracle_sort` is left out since it never
/// returns on unsorted input.
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "library",
            description: "Standard library unstable sort (reference)",
            function: library_sort::<i64, OrderingFn<i64>>,
        },
        VariantInfo {
            name: "bubble",
            description: "Adjacent-swap bubble sort",
            function: bubble_sort::<i64, OrderingFn<i64>>,
        },
        VariantInfo {
            name: "gnome",
            description: "Gnome sort (swap backwards until in place)",
            function: gnome_sort::<i64, OrderingFn<i64>>,
        },
        VariantInfo {
            name: "bogo",
            description: "Shuffle until sorted",
            function: bogosort::<i64, OrderingFn<i64>>,
        },
    ]
}

/// Whether `variant` can finish in reasonable time on `size` elements.
pub fn runs_at_size(variant: &str, size: usize) -> bool {
    variant != "bogo" || size <= BOGO_MAX_SIZE
}
