/// OpenWeatherMap current-conditions API client.
///
/// Handles URL construction and JSON response parsing for the current
/// weather endpoint:
///   https://api.openweathermap.org/data/2.5/weather
///
/// The API reports temperatures in Kelvin; readings are converted to the
/// configured display unit here, at the edge, so everything downstream
/// works in one unit. See `fixtures.rs` for annotated response examples.

use serde::Deserialize;
use std::time::Duration;

use crate::model::{FetchError, WeatherReading};
use crate::units::TempUnit;
use crate::ingest::ReadingSource;

const OWM_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

// ---------------------------------------------------------------------------
// Serde structures for response deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct CurrentResponse {
    main: MainBlock,
    weather: Vec<WeatherBlock>,
    dt: i64,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,        // Kelvin
    feels_like: f64,  // Kelvin
}

#[derive(Deserialize)]
struct WeatherBlock {
    main: String,  // condition label, e.g. "Clear"
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the current-conditions URL for one city.
///
/// The city string is passed through exactly as configured (so
/// "Delhi,IN"-style country qualifiers work) and percent-encoded for the
/// query string.
pub fn build_current_url(city: &str, api_key: &str) -> String {
    format!(
        "{}?q={}&appid={}",
        OWM_BASE_URL,
        urlencoding::encode(city),
        api_key
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a current-conditions JSON body into a `WeatherReading`, applying
/// the Kelvin conversion for the given display unit.
///
/// The reading is keyed by the configured city string rather than the
/// API's echo of the resolved name, so stored rows always match the
/// configuration and each other.
///
/// # Errors
/// `FetchError::Parse` — malformed JSON, or an empty `weather` array.
pub fn parse_current_response(
    json: &str,
    city: &str,
    unit: TempUnit,
) -> Result<WeatherReading, FetchError> {
    let response: CurrentResponse = serde_json::from_str(json)
        .map_err(|e| FetchError::Parse(format!("JSON deserialization failed: {}", e)))?;

    let condition = response
        .weather
        .first()
        .map(|w| w.main.clone())
        .ok_or_else(|| FetchError::Parse("Empty weather array in response".to_string()))?;

    Ok(WeatherReading {
        city: city.to_string(),
        temperature: unit.from_kelvin(response.main.temp),
        feels_like: unit.from_kelvin(response.main.feels_like),
        condition,
        timestamp: response.dt,
    })
}

// ---------------------------------------------------------------------------
// HTTP source
// ---------------------------------------------------------------------------

/// Production `ReadingSource` backed by the OpenWeatherMap API.
pub struct OwmSource {
    client: reqwest::blocking::Client,
    api_key: String,
    unit: TempUnit,
}

impl OwmSource {
    /// Builds the source with a bounded per-request timeout so one
    /// unresponsive city cannot stall a whole cycle.
    pub fn new(
        api_key: String,
        unit: TempUnit,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self { client, api_key, unit })
    }
}

impl ReadingSource for OwmSource {
    fn fetch(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let url = build_current_url(city, &self.api_key);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_current_response(&body, city, self.unit)
    }
}
