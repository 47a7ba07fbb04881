use clap::Parser;
use std::path::PathBuf;

use crate::models::AnalysisOptions;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/sample_input.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise half-hour traffic counts
#[derive(Parser, Debug, Clone)]
#[command(
    name = "traffic-counter",
    about = "Summarise half-hour traffic counts",
    version
)]
pub struct Settings {
    /// Input file with one `<timestamp> <count>` reading per line
    #[arg(env = "TRAFFIC_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Number of busiest half hours to report
    #[arg(long, default_value = "3")]
    pub top: usize,

    /// Number of contiguous readings in the least busy period
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u64).range(1..))]
    pub window: u64,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// The two numeric analysis parameters.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            top_n: self.top,
            window: usize::try_from(self.window).unwrap_or(usize::MAX),
        }
    }

    /// Level actually used for logging; `--debug` overrides `--log-level`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }

    pub fn wants_json(&self) -> bool {
        self.format == "json"
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
