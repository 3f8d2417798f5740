//! Tracing configuration.
//!
//! The subscriber is only initialised when `FLAMEY_LOG` (or `RUST_LOG`) is
//! set. Output format is chosen with `FLAMEY_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `json`: one JSON object per event
//!
//! ```bash
//! FLAMEY_LOG=debug flamey-bench sort
//! FLAMEY_LOG="flamey_utils::input=debug" FLAMEY_LOG_FORMAT=json my-program
//! ```
//!
//! Everything goes to stderr, so prompts and tables on stdout stay clean.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Parse from the `FLAMEY_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        match std::env::var("FLAMEY_LOG_FORMAT")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// `FLAMEY_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("FLAMEY_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `FLAMEY_LOG` nor `RUST_LOG` is set, or when a
/// global subscriber is already installed.
pub fn init_tracing() {
    let has_flamey_log = std::env::var("FLAMEY_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_flamey_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    let _ = match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
}
