/// HTTP endpoint for querying current conditions.
///
/// Provides a small read-only API so external tools (dashboards, spot
/// checks with curl) can see the latest stored reading per city without
/// touching the database directly.
///
/// Endpoints:
/// - GET /current - Latest reading for every city with data
/// - GET /health - Service health check
///
/// The endpoint runs on its own store connection in a background thread;
/// it never writes and never touches alert state.

use serde::Serialize;

use crate::db::{SampleStore, StoreError};
use crate::model::WeatherReading;

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// One city's latest conditions for the JSON response.
#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub city: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: String,
    pub timestamp: i64,
}

impl From<&WeatherReading> for CurrentConditions {
    fn from(reading: &WeatherReading) -> Self {
        Self {
            city: reading.city.clone(),
            temperature: reading.temperature,
            feels_like: reading.feels_like,
            condition: reading.condition.clone(),
            timestamp: reading.timestamp,
        }
    }
}

// ---------------------------------------------------------------------------
// Data Fetching
// ---------------------------------------------------------------------------

/// Latest reading per city, shaped for the JSON response.
pub fn fetch_current<S: SampleStore>(
    store: &mut S,
) -> Result<Vec<CurrentConditions>, StoreError> {
    let readings = store.latest_per_city()?;
    Ok(readings.iter().map(CurrentConditions::from).collect())
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the HTTP endpoint server on the specified port. Blocks serving
/// requests; run it on a dedicated thread.
pub fn start_endpoint_server<S: SampleStore>(port: u16, mut store: S) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    println!("   GET /current - Latest reading per city");
    println!("   GET /health - Service health check\n");

    for request in server.incoming_requests() {
        let url = request.url();

        let response = if url == "/health" {
            handle_health()
        } else if url == "/current" {
            handle_current(&mut store)
        } else {
            create_response(
                404,
                serde_json::json!({
                    "error": "Not found",
                    "available_endpoints": ["/health", "/current"]
                }),
            )
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Handle /health endpoint
fn handle_health() -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    create_response(
        200,
        serde_json::json!({
            "status": "ok",
            "service": "wxmon_service",
            "version": "0.1.0"
        }),
    )
}

/// Handle /current endpoint
fn handle_current<S: SampleStore>(store: &mut S) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    match fetch_current(store) {
        Ok(conditions) => create_response(200, serde_json::json!({ "cities": conditions })),
        Err(e) => create_response(500, serde_json::json!({ "error": e.to_string() })),
    }
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let body = serde_json::to_string_pretty(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap(),
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
