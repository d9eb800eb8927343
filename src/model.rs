/// Core data types for the weather monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond serde
/// derives — only types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single normalized weather observation for one city at one instant.
///
/// Temperatures are already converted to the configured display unit by the
/// ingest layer; nothing downstream converts again. `timestamp` is the
/// provider-reported observation time in epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: String,  // provider condition label, e.g. "Clear", "Clouds", "Rain"
    pub timestamp: i64,
}

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Daily statistics for one city, computed from all readings stored within
/// that local calendar day.
///
/// `summary_data` holds the JSON serialization of the contributing readings
/// for later inspection. Summaries are append-only: repeated aggregation for
/// the same (city, date) inserts additional rows rather than replacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub city: String,
    pub date: NaiveDate,
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub dominant_condition: String,
    pub summary_data: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching current conditions from the
/// weather API.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    /// Non-2xx HTTP response from the API.
    Http(u16),
    /// Network-level failure, including request timeouts.
    Transport(String),
    /// The response body could not be deserialized or was structurally
    /// incomplete (e.g. empty `weather` array).
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(code) => write!(f, "HTTP error: {}", code),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}
