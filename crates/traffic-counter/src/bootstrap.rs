use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a Python-style level name (`"WARNING"`, `"CRITICAL"`, ...) to the
/// directive understood by [`EnvFilter`].
pub fn normalise_level(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Output goes to stderr so stdout carries only the report. Falls back to
/// `"warn"` if the level string is not a valid filter directive.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
