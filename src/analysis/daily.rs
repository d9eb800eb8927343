/// Daily summary computation.
///
/// One summary per (city, local calendar date): arithmetic mean, maximum,
/// and minimum temperature, the dominant condition label, and a JSON
/// snapshot of the contributing readings. The day window runs from local
/// 00:00:00 through local 23:59:59, both ends inclusive.
///
/// Summaries are append-only. `aggregate_day` inserts unconditionally;
/// invoking it twice for the same (city, date) produces two rows. The
/// integration suite pins that behavior so any future move to upsert
/// semantics is a deliberate, visible change.

use chrono::{Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::collections::HashMap;

use crate::db::{SampleStore, StoreError};
use crate::model::{DailySummary, WeatherReading};

// ---------------------------------------------------------------------------
// Day window
// ---------------------------------------------------------------------------

/// Epoch-second bounds of a local calendar day, inclusive on both ends.
pub fn day_bounds(date: NaiveDate) -> (i64, i64) {
    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::seconds(86_399); // 23:59:59 of the same date
    (local_ts(start), local_ts(end))
}

/// Resolves a naive local wall-clock time to epoch seconds.
///
/// DST ambiguity takes the earlier instant; a wall-clock time skipped by a
/// forward transition falls back to the UTC interpretation.
fn local_ts(naive: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earlier, _) => earlier.timestamp(),
        LocalResult::None => Utc.from_utc_datetime(&naive).timestamp(),
    }
}

// ---------------------------------------------------------------------------
// Summary computation
// ---------------------------------------------------------------------------

/// Computes the summary for one city and date from its in-window readings.
///
/// Returns `None` for an empty slice — a day with no data produces no
/// summary and no error.
pub fn summarize(city: &str, date: NaiveDate, readings: &[WeatherReading]) -> Option<DailySummary> {
    if readings.is_empty() {
        return None;
    }

    let sum: f64 = readings.iter().map(|r| r.temperature).sum();
    let avg_temp = sum / readings.len() as f64;
    let max_temp = readings.iter().map(|r| r.temperature).fold(f64::MIN, f64::max);
    let min_temp = readings.iter().map(|r| r.temperature).fold(f64::MAX, f64::min);

    // Non-finite temperatures cannot be represented in JSON; an empty
    // snapshot is the degraded fallback rather than a lost summary.
    let summary_data =
        serde_json::to_string(readings).unwrap_or_else(|_| "[]".to_string());

    Some(DailySummary {
        city: city.to_string(),
        date,
        avg_temp,
        max_temp,
        min_temp,
        dominant_condition: dominant_condition(readings),
        summary_data,
    })
}

/// Most frequent condition label. Ties break to the lexicographically
/// smallest label, so the result is deterministic regardless of store
/// iteration order.
fn dominant_condition(readings: &[WeatherReading]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for reading in readings {
        *counts.entry(reading.condition.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .max_by(|(label_a, count_a), (label_b, count_b)| {
            count_a.cmp(count_b).then_with(|| label_b.cmp(label_a))
        })
        .map(|(label, _)| label.to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Store-backed aggregation
// ---------------------------------------------------------------------------

/// Queries the store for one city's readings on `date`, computes the
/// summary, and appends it. `Ok(None)` means no readings existed in the
/// window; nothing was inserted.
pub fn aggregate_day<S: SampleStore>(
    store: &mut S,
    city: &str,
    date: NaiveDate,
) -> Result<Option<DailySummary>, StoreError> {
    let (from_ts, to_ts) = day_bounds(date);
    let readings = store.query(city, from_ts, to_ts)?;

    let summary = match summarize(city, date, &readings) {
        Some(summary) => summary,
        None => return Ok(None),
    };

    store.append_summary(&summary)?;
    Ok(Some(summary))
}
