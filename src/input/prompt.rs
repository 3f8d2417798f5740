//! The validated prompt loop.
//!
//! A [`Prompter`] writes a rendered prompt, scans one value and, for the
//! validated variants, hands it to a predicate. Rejected values print the
//! failure message and the prompt starts over.
//!
//! With the default [`RetryPolicy::Unbounded`] a predicate that never
//! accepts keeps the loop running forever. Callers who want a bound opt in
//! with [`Prompter::with_policy`].

use std::fmt::Display;
use std::io::{BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use tracing::debug;

use super::scanner::{ScanMode, Scanner};
use super::template;
use crate::array::view::check_range;
use crate::error::{Result, UtilError};

/// What to show and how to scan for one value.
#[derive(Clone, Copy)]
pub struct PromptSpec<'a> {
    text: &'a str,
    args: &'a [&'a dyn Display],
    mode: ScanMode,
}

impl<'a> PromptSpec<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            args: &[],
            mode: ScanMode::default(),
        }
    }

    /// Bind the values substituted into the text's `{}` placeholders.
    pub fn with_args(mut self, args: &'a [&'a dyn Display]) -> Self {
        self.args = args;
        self
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn render(&self) -> Result<String> {
        template::render(self.text, self.args)
    }
}

/// Where the ordinal goes relative to the main prompt text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrdinalPlacement {
    #[default]
    Before,
    After,
}

/// Prompt used to fill a run of array cells.
///
/// `ordinal` is a template with exactly one `{}`, which receives the
/// one-based position `i + 1` of the cell being read.
#[derive(Clone, Copy)]
pub struct RangePrompt<'a> {
    prompt: PromptSpec<'a>,
    ordinal: &'a str,
    placement: OrdinalPlacement,
}

impl<'a> RangePrompt<'a> {
    pub fn new(prompt: PromptSpec<'a>, ordinal: &'a str, placement: OrdinalPlacement) -> Self {
        Self {
            prompt,
            ordinal,
            placement,
        }
    }

    fn header(&self, text: &str, index: usize) -> Result<String> {
        let position = index + 1;
        let ordinal = template::render(self.ordinal, &[&position])?;
        Ok(match self.placement {
            OrdinalPlacement::Before => format!("{}{}", ordinal, text),
            OrdinalPlacement::After => format!("{}{}", text, ordinal),
        })
    }
}

/// How many rejected candidates the validated loop tolerates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retry until the predicate accepts, however long that takes.
    #[default]
    Unbounded,
    /// Give up with `RetriesExhausted` after this many rejected attempts.
    /// At least one attempt is always made.
    MaxAttempts(usize),
}

impl RetryPolicy {
    fn check(self, attempts: usize) -> Result<()> {
        match self {
            RetryPolicy::Unbounded => Ok(()),
            RetryPolicy::MaxAttempts(max) if attempts >= max => {
                Err(UtilError::RetriesExhausted { attempts })
            }
            RetryPolicy::MaxAttempts(_) => Ok(()),
        }
    }
}

/// Interactive reader bound to an input stream and an output stream.
pub struct Prompter<R, W> {
    scanner: Scanner<R>,
    out: W,
    policy: RetryPolicy,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            scanner: Scanner::new(input),
            out: output,
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (R, W) {
        (self.scanner.into_inner(), self.out)
    }

    /// Show the prompt and read one value, without validation.
    pub fn prompt_one<T: FromStr>(&mut self, spec: &PromptSpec<'_>) -> Result<T> {
        let text = spec.render()?;
        self.write_flush(&text)?;
        self.scanner.scan(spec.mode)
    }

    /// Read values until `predicate` accepts one, printing `fail` after
    /// every rejection.
    pub fn prompt_one_validated<T, P>(
        &mut self,
        spec: &PromptSpec<'_>,
        fail: &str,
        predicate: P,
    ) -> Result<T>
    where
        T: FromStr,
        P: FnMut(&T) -> bool,
    {
        let text = spec.render()?;
        let mode = spec.mode;
        self.retry(
            fail,
            |this| {
                this.write_flush(&text)?;
                this.scanner.scan(mode)
            },
            predicate,
        )
    }

    /// Like [`prompt_one_validated`](Self::prompt_one_validated), with the
    /// predicate receiving a fresh clone of `bound` on every evaluation.
    pub fn prompt_one_validated_bound<T, A, P>(
        &mut self,
        spec: &PromptSpec<'_>,
        fail: &str,
        mut predicate: P,
        bound: A,
    ) -> Result<T>
    where
        T: FromStr,
        A: Clone,
        P: FnMut(&T, A) -> bool,
    {
        self.prompt_one_validated(spec, fail, |value: &T| predicate(value, bound.clone()))
    }

    /// Fill `array[start..=end]`, one prompt per cell.
    pub fn prompt_range<T: FromStr>(
        &mut self,
        prompt: &RangePrompt<'_>,
        array: &mut [T],
        start: usize,
        end: usize,
    ) -> Result<()> {
        let range = check_range(array.len(), start, end)?;
        let text = prompt.prompt.render()?;

        for i in range {
            let header = prompt.header(&text, i)?;
            self.write_flush(&header)?;
            array[i] = self.scanner.scan(prompt.prompt.mode)?;
        }

        Ok(())
    }

    /// Fill `array[start..=end]`, retrying each cell until `predicate`
    /// accepts its value.
    pub fn prompt_range_validated<T, P>(
        &mut self,
        prompt: &RangePrompt<'_>,
        array: &mut [T],
        start: usize,
        end: usize,
        fail: &str,
        mut predicate: P,
    ) -> Result<()>
    where
        T: FromStr,
        P: FnMut(&T) -> bool,
    {
        let range = check_range(array.len(), start, end)?;
        let text = prompt.prompt.render()?;
        let mode = prompt.prompt.mode;

        for i in range {
            let header = prompt.header(&text, i)?;
            array[i] = self.retry(
                fail,
                |this| {
                    this.write_flush(&header)?;
                    this.scanner.scan(mode)
                },
                &mut predicate,
            )?;
        }

        Ok(())
    }

    /// Per-cell validated fill with a bound argument cloned for every
    /// predicate evaluation.
    #[allow(clippy::too_many_arguments)]
    pub fn prompt_range_validated_bound<T, A, P>(
        &mut self,
        prompt: &RangePrompt<'_>,
        array: &mut [T],
        start: usize,
        end: usize,
        fail: &str,
        mut predicate: P,
        bound: A,
    ) -> Result<()>
    where
        T: FromStr,
        A: Clone,
        P: FnMut(&T, A) -> bool,
    {
        self.prompt_range_validated(prompt, array, start, end, fail, |value: &T| {
            predicate(value, bound.clone())
        })
    }

    fn retry<T, F, P>(&mut self, fail: &str, mut read: F, mut accept: P) -> Result<T>
    where
        F: FnMut(&mut Self) -> Result<T>,
        P: FnMut(&T) -> bool,
    {
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let candidate = read(self)?;
            if accept(&candidate) {
                debug!(attempts, "value accepted");
                return Ok(candidate);
            }

            debug!(attempts, "value rejected");
            self.write_flush(fail)?;
            self.policy.check(attempts)?;
        }
    }

    fn write_flush(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
