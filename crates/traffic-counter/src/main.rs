mod bootstrap;

use anyhow::{Context, Result};
use clap::Parser;
use traffic_core::formatting::{render_json, render_text};
use traffic_core::settings::Settings;
use traffic_data::analysis::analyze_file;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("Traffic Counter v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Input: {}, Top: {}, Window: {}, Format: {}",
        settings.input.display(),
        settings.top,
        settings.window,
        settings.format
    );

    let output = run(&settings)?;
    print!("{output}");

    Ok(())
}

/// Load, analyse and render according to `settings`.
fn run(settings: &Settings) -> Result<String> {
    let options = settings.analysis_options();
    let report = analyze_file(&settings.input, &options)
        .with_context(|| format!("Failed to analyse {}", settings.input.display()))?;

    if settings.wants_json() {
        let mut json = render_json(&report)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render_text(&report))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
