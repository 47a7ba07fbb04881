//! Analysis pipeline for the traffic counter.
//!
//! Runs the four analyses over a reading sequence and bundles the results
//! into a [`TrafficReport`] for the presenter.

use std::path::Path;
use std::time::Instant;

use tracing::debug;
use traffic_core::error::Result;
use traffic_core::models::{AnalysisOptions, Reading, TrafficReport};

use crate::aggregator::TrafficAggregator;
use crate::reader::load_readings;

/// Run every analysis over `readings`.
///
/// Fails as a whole when the least-busy window cannot be computed, so callers
/// never receive a partial report. The individual analyses stay available on
/// [`TrafficAggregator`].
pub fn analyze(readings: &[Reading], options: &AnalysisOptions) -> Result<TrafficReport> {
    let least_busy_period = TrafficAggregator::least_busy_period(readings, options.window)?;

    Ok(TrafficReport {
        readings_analyzed: readings.len(),
        total_cars: TrafficAggregator::total_cars(readings),
        daily_totals: TrafficAggregator::daily_totals(readings),
        top_n: options.top_n,
        top_periods: TrafficAggregator::top_periods(readings, options.top_n),
        window: options.window,
        least_busy_period,
    })
}

/// Load `path` and analyse its readings.
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<TrafficReport> {
    let load_start = Instant::now();
    let readings = load_readings(path)?;
    let load_time = load_start.elapsed();

    let analysis_start = Instant::now();
    let report = analyze(&readings, options)?;

    debug!(
        "Analysed {} readings over {} days (load {:.3}s, analysis {:.3}s)",
        report.readings_analyzed,
        report.daily_totals.len(),
        load_time.as_secs_f64(),
        analysis_start.elapsed().as_secs_f64(),
    );

    Ok(report)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
