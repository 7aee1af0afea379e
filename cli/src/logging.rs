//! # Structured Logging
//!
//! Initializes the `tracing` subscriber with a pretty or JSON format and
//! `EnvFilter` directives.
//!
//! All log output goes to stderr; stdout carries only command output so
//! strings can be piped between invocations.

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "nyzo_cli=info,nyzo_protocol=info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, colored output.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Initialize the global tracing subscriber. Call once, early in `main()`.
///
/// An explicit `level` wins over `RUST_LOG`, which wins over
/// [`DEFAULT_FILTER`].
pub fn init_logging(level: Option<&str>, format: LogFormat) {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = EnvFilter::new(filter_directives(level, from_env.as_deref()));

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(false),
                )
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .init();
        }
    }

    tracing::debug!(?format, "logging initialized");
}

/// Pick the filter directives: explicit flag, then environment, then default.
fn filter_directives<'a>(level: Option<&'a str>, from_env: Option<&'a str>) -> &'a str {
    level
        .or(from_env)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
}
