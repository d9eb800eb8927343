/// Data ingestion from external weather APIs.
///
/// Each provider gets its own file under ingest/ rather than bloating a
/// single client module. The monitoring loop consumes the `ReadingSource`
/// trait so tests can script observations without network access.

pub mod owm;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::model::{FetchError, WeatherReading};

/// Source of current-conditions readings, one city at a time.
///
/// A fetch failure for one city is recoverable: the caller logs it and
/// moves on to the next city in the cycle.
pub trait ReadingSource {
    fn fetch(&self, city: &str) -> Result<WeatherReading, FetchError>;
}
