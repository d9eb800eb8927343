/// Test fixtures: representative JSON payloads from the OpenWeatherMap
/// current-conditions API.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real envelope returned
/// by:
///   https://api.openweathermap.org/data/2.5/weather?q={city}&appid={key}
///
/// Response shape (fields we consume marked with *):
///   .weather[0].main *   — condition label ("Clear", "Clouds", "Rain", ...)
///   .main.temp *         — temperature in Kelvin
///   .main.feels_like *   — apparent temperature in Kelvin
///   .dt *                — observation time, epoch seconds
///   .name                — resolved city name (ignored; we key by config)
///   .cod                 — HTTP-like status code echoed in the body

/// Delhi, clear sky. temp 300.0 K (26.85 °C / 80.33 °F), feels_like 305.0 K.
pub(crate) fn fixture_delhi_clear_json() -> &'static str {
    r#"{
      "coord": { "lon": 77.2167, "lat": 28.6667 },
      "weather": [
        { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
      ],
      "base": "stations",
      "main": {
        "temp": 300.0,
        "feels_like": 305.0,
        "temp_min": 298.15,
        "temp_max": 301.48,
        "pressure": 1006,
        "humidity": 58
      },
      "visibility": 10000,
      "wind": { "speed": 3.6, "deg": 290 },
      "clouds": { "all": 0 },
      "dt": 1754550000,
      "sys": { "country": "IN", "sunrise": 1754526120, "sunset": 1754574540 },
      "timezone": 19800,
      "id": 1273294,
      "name": "New Delhi",
      "cod": 200
    }"#
}

/// Structurally valid response with an empty weather array. Seen from the
/// API during upstream hiccups; the parser must reject it rather than
/// fabricate a condition label.
pub(crate) fn fixture_empty_weather_json() -> &'static str {
    r#"{
      "coord": { "lon": 77.2167, "lat": 28.6667 },
      "weather": [],
      "main": { "temp": 300.0, "feels_like": 305.0, "pressure": 1006, "humidity": 58 },
      "dt": 1754550000,
      "name": "New Delhi",
      "cod": 200
    }"#
}
