/// wxmon_service: city weather sampling and alerting service.
///
/// # Module structure
///
/// ```text
/// wxmon_service
/// ├── model       — shared data types (WeatherReading, DailySummary, FetchError)
/// ├── config      — runtime configuration loader (monitor.toml)
/// ├── units       — temperature unit selection and Kelvin conversion
/// ├── db          — SampleStore trait, PostgreSQL and in-memory implementations
/// ├── ingest
/// │   ├── owm     — OpenWeatherMap API: URL construction + JSON parsing
/// │   └── fixtures (test only) — representative API response payloads
/// ├── alert
/// │   ├── hysteresis — per-city consecutive-breach alert engine
/// │   └── email      — SMTP alert delivery
/// ├── analysis
/// │   └── daily      — per-city daily summary computation
/// ├── daemon      — main monitoring loop (cycles, aggregation trigger, shutdown)
/// └── endpoint    — read-only HTTP API for current conditions
/// ```

/// Public modules
pub mod alert;
pub mod analysis;
pub mod config;
pub mod daemon;
pub mod db;
pub mod endpoint;
pub mod ingest;
pub mod model;
pub mod units;
