use std::io::{self, IsTerminal};
use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Workspace crates whose level is raised by [`env_filter_with_level`].
pub const TARGETS: [&str; 3] = ["serp_api_service", "overview_engine", "api"];

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Formatting layer for the service binary.
///
/// - RFC3339 UTC timestamps
/// - Compact single-line format with target
/// - Span close events, so instrumented provider calls report durations
/// - ANSI colors only when stdout is a terminal
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .compact()
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
}

/// Level directives for every workspace crate, e.g. `overview_engine=debug`.
pub fn level_directives(level: Level) -> Vec<Directive> {
    TARGETS
        .iter()
        .filter_map(|target| {
            Directive::from_str(&format!("{target}={}", level.as_str().to_lowercase())).ok()
        })
        .collect()
}

/// EnvFilter from `RUST_LOG` when set; otherwise `default` for dependencies
/// and `level` for the workspace crates.
pub fn env_filter_with_level(default: &str, level: Level) -> EnvFilter {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => level_directives(level)
            .into_iter()
            .fold(EnvFilter::new(default), |filter, d| filter.add_directive(d)),
    }
}
