//! # Flamey Utils
//!
//! Small helpers for command-line teaching programs: validated input
//! prompts, statistics over array ranges, and a few classic (and a few
//! absurd) sorting algorithms.

pub mod array;
pub mod error;
pub mod input;
pub mod registry;
pub mod tracing_config;
pub mod utils;

pub use error::{Result, UtilError};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::array::sort::{ascending, descending, is_sorted};
    pub use crate::array::{stats, ArrayView, ArrayViewMut};
    pub use crate::error::{Result, UtilError};
    pub use crate::input::{OrdinalPlacement, PromptSpec, Prompter, RangePrompt, RetryPolicy};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
