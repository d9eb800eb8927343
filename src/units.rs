/// Temperature unit handling.
///
/// The weather API reports absolute temperatures in Kelvin; readings are
/// converted to the configured display unit exactly once, at ingest. The
/// conversions here are exact — rounding to one decimal place happens only
/// when a value is formatted for an alert message or endpoint response.

use serde::Deserialize;

/// Display unit for temperatures, selected in monitor.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
}

impl TempUnit {
    /// Single-letter abbreviation used after the degree sign in alert
    /// messages: "C" or "F".
    pub fn abbrev(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "C",
            TempUnit::Fahrenheit => "F",
        }
    }

    /// Converts a Kelvin temperature into this unit.
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TempUnit::Celsius => kelvin_to_celsius(kelvin),
            TempUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
        }
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin_to_celsius(kelvin) * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn test_kelvin_to_celsius_reference_point() {
        // 300 K is the standard reference point: 26.85 °C to two decimals.
        assert!(approx_eq(kelvin_to_celsius(300.0), 26.85));
    }

    #[test]
    fn test_kelvin_to_fahrenheit_reference_point() {
        // 300 K == 80.33 °F to two decimals.
        assert!(approx_eq(kelvin_to_fahrenheit(300.0), 80.33));
    }

    #[test]
    fn test_absolute_zero() {
        assert!(approx_eq(kelvin_to_celsius(0.0), -273.15));
        assert!(approx_eq(kelvin_to_fahrenheit(0.0), -459.67));
    }

    #[test]
    fn test_freezing_point_of_water() {
        assert!(approx_eq(kelvin_to_celsius(273.15), 0.0));
        assert!(approx_eq(kelvin_to_fahrenheit(273.15), 32.0));
    }

    #[test]
    fn test_unit_dispatch() {
        assert!(approx_eq(TempUnit::Celsius.from_kelvin(300.0), 26.85));
        assert!(approx_eq(TempUnit::Fahrenheit.from_kelvin(300.0), 80.33));
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(TempUnit::Celsius.abbrev(), "C");
        assert_eq!(TempUnit::Fahrenheit.abbrev(), "F");
    }

    #[test]
    fn test_conversion_is_not_rounded() {
        // 300.123 K → 26.973 °C; a conversion that rounded early would
        // collapse this to 26.97 or 27.0.
        let c = kelvin_to_celsius(300.123);
        assert!((c - 26.973).abs() < 1e-9);
    }
}
