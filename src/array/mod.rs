//! # Array Utilities
//!
//! Statistics, shuffling and sorting over an inclusive index range
//! `[start, end]` of a caller-owned array. Ranges are validated once, when
//! the view is built:
//!
//! ```
//! use flamey_utils::array::{ArrayView, ArrayViewMut};
//!
//! let mut data = [4, 2, 7];
//! assert!(ArrayView::new(&data, 2, 1).is_err());
//! assert!(ArrayViewMut::new(&mut data, 0, 3).is_err());
//! ```

pub mod element;
pub mod shuffle;
pub mod sort;
pub mod stats;
pub mod view;

pub use element::Element;
pub use view::{check_range, ArrayView, ArrayViewMut};
