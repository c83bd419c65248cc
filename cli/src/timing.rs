//! Tracing setup with optional span timing.
//!
//! Functions annotated with `#[instrument]` log their duration when the span
//! closes if `--timing` is given.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Default filter level for the given flags. `RUST_LOG` still wins.
pub fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        // Span close events are logged at INFO level
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Initialize tracing subscriber with optional timing output.
///
/// # Arguments
/// * `verbose` - If true, enables debug-level logging
/// * `timing` - If true, logs span close events with duration
pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
