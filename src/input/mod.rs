//! # Validated Input
//!
//! Prompts that render a template, scan a typed value from a text stream
//! and keep asking until a caller predicate accepts the value.
//!
//! ```no_run
//! use flamey_utils::input::{Prompter, PromptSpec};
//!
//! let mut prompter = Prompter::stdio();
//! let (lo, hi) = (10, 16);
//! let value: i32 = prompter
//!     .prompt_one_validated_bound(
//!         &PromptSpec::new("Number in [{}, {}]: ").with_args(&[&lo, &hi]),
//!         "Out of range.\n",
//!         |v: &i32, (lo, hi): (i32, i32)| (lo..=hi).contains(v),
//!         (lo, hi),
//!     )
//!     .unwrap();
//! println!("{}", value);
//! ```

pub mod prompt;
pub mod scanner;
pub mod template;
#[cfg(test)]
pub mod test;

pub use prompt::{OrdinalPlacement, PromptSpec, Prompter, RangePrompt, RetryPolicy};
pub use scanner::{ScanMode, Scanner};
