//! Loading of traffic count files.
//!
//! Each non-blank line holds `<ISO-8601 timestamp> <count>`. Readings come
//! back in line order; nothing is sorted or deduplicated, and the first
//! malformed line aborts the whole load.

use std::io::BufRead;
use std::path::Path;

use tracing::debug;
use traffic_core::error::{ParseError, Result, TrafficError};
use traffic_core::models::Reading;

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<Reading>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Parse an in-memory sequence of lines into readings.
pub fn parse_readings<I, S>(lines: I) -> Result<Vec<Reading>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut readings = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        push_line(&mut readings, idx + 1, line.as_ref())?;
    }
    Ok(readings)
}

/// Read and parse every line from a buffered source.
pub fn read_readings<R: BufRead>(reader: R) -> Result<Vec<Reading>> {
    let mut readings = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        push_line(&mut readings, idx + 1, &line?)?;
    }
    Ok(readings)
}

/// Open `path` and load every reading in it.
pub fn load_readings(path: &Path) -> Result<Vec<Reading>> {
    let file = std::fs::File::open(path).map_err(|source| TrafficError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let readings = read_readings(std::io::BufReader::new(file)).map_err(|e| match e {
        TrafficError::Io(source) => TrafficError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!("Loaded {} readings from {}", readings.len(), path.display());
    Ok(readings)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn push_line(readings: &mut Vec<Reading>, line_no: usize, line: &str) -> Result<()> {
    match parse_line(line) {
        Ok(Some(reading)) => readings.push(reading),
        Ok(None) => {}
        Err(source) => {
            return Err(TrafficError::Parse {
                line: line_no,
                source,
            })
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
