//! Positional prompt templates.
//!
//! `{}` takes the next bound value, `{{` and `}}` are literal braces.

use std::fmt::Display;

use crate::error::{Result, UtilError};

/// Render `template`, substituting `args` in order.
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String> {
    let expected = placeholder_count(template);
    if expected != args.len() {
        return Err(UtilError::TemplateArity {
            expected,
            supplied: args.len(),
        });
    }

    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                out.push(c);
                chars.next();
            }
            ('{', Some('}')) => {
                chars.next();
                if let Some(arg) = args.next() {
                    out.push_str(&arg.to_string());
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Number of `{}` placeholders in `template`.
pub fn placeholder_count(template: &str) -> usize {
    let mut count = 0;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
            }
            ('{', Some('}')) => {
                chars.next();
                count += 1;
            }
            _ => {}
        }
    }

    count
}
