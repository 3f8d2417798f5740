//! Token-oriented formatted scanning over any buffered reader.
//!
//! The destination type chooses the parser (`T: FromStr`), and a
//! [`ScanMode`] chooses how much input one scan consumes.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use tracing::trace;

use crate::error::{Result, UtilError};

/// How much input a single scan consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Next whitespace-delimited token. Leftover tokens on the line stay
    /// buffered for the following scans.
    #[default]
    Token,
    /// Drop any buffered tokens and parse the next whole line, trimmed.
    Line,
}

/// Reads typed values from a text stream.
pub struct Scanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Scan one value of type `T` according to `mode`.
    pub fn scan<T: FromStr>(&mut self, mode: ScanMode) -> Result<T> {
        let token = match mode {
            ScanMode::Token => self.next_token()?,
            ScanMode::Line => {
                self.discard_pending();
                self.next_line()?.trim().to_string()
            }
        };
        trace!(token = %token, ?mode, "scanned");

        token
            .parse::<T>()
            .map_err(|_| UtilError::scan_mismatch::<T>(token))
    }

    /// Forget tokens left over from the current line.
    pub fn discard_pending(&mut self) {
        self.pending.clear();
    }

    /// Number of tokens still buffered from the last line read.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn next_token(&mut self) -> Result<String> {
        while self.pending.is_empty() {
            let line = self.next_line()?;
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.pending.pop_front().ok_or(UtilError::EndOfInput)
    }

    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(UtilError::EndOfInput);
        }
        Ok(line)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}
