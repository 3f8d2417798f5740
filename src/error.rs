//! Error type shared by every module of the crate.

use thiserror::Error;

/// Errors surfaced by prompts, array utilities and the variant registry.
#[derive(Debug, Error)]
pub enum UtilError {
    /// The inclusive range `[start, end]` does not fit the array.
    #[error("invalid range [{start}, {end}] for array of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// An input token could not be parsed into the destination type.
    #[error("could not parse {token:?} as {expected}")]
    ScanMismatch {
        token: String,
        expected: &'static str,
    },

    /// The input stream closed before a value was read.
    #[error("input stream ended before a value could be read")]
    EndOfInput,

    /// A prompt template and its bound values disagree on arity.
    #[error("template expects {expected} bound values but {supplied} were supplied")]
    TemplateArity { expected: usize, supplied: usize },

    /// An opt-in retry limit was reached without an accepted value.
    #[error("no acceptable value after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    /// A registered variant disagreed with the reference variant.
    #[error("variant '{variant}' failed verification: {reason}")]
    Verification { variant: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl UtilError {
    /// Build a `ScanMismatch` for destination type `T`.
    pub fn scan_mismatch<T>(token: String) -> Self {
        Self::ScanMismatch {
            token,
            expected: std::any::type_name::<T>(),
        }
    }
}

pub type Result<T, E = UtilError> = std::result::Result<T, E>;
