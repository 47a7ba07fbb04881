//! Shared types for the traffic counter.
//!
//! Holds the [`models::Reading`] value type and the derived report views,
//! the error taxonomy, CLI settings, and the text / JSON presenter.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{ParseError, Result, TrafficError};
pub use models::{AnalysisOptions, DailyTotal, Reading, TrafficReport};
