/// Monitor configuration loader - parses monitor.toml
///
/// Separates runtime settings from code, making it easy to adjust the
/// sampling interval, city list, or alert thresholds without recompiling
/// the service. Configuration is read once at startup and is immutable
/// for the lifetime of the process.

use serde::Deserialize;
use std::fs;

use crate::units::TempUnit;

/// Runtime configuration loaded from monitor.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    /// Seconds of idle time between sampling cycles. Must be > 0.
    pub interval_seconds: u64,

    /// Cities to sample each cycle, processed in this order. Must be
    /// non-empty. Entries are passed to the weather API verbatim, so a
    /// country qualifier like "Delhi,IN" goes here directly.
    pub cities: Vec<String>,

    /// Display unit for all stored and reported temperatures.
    pub temp_unit: TempUnit,

    /// High-temperature alert threshold, in the display unit.
    pub high_temp_threshold: f64,

    /// Consecutive breaching readings required before an alert fires.
    /// Must be >= 1.
    pub consecutive_alerts: u32,

    /// Upper bound on each weather API request, so one unresponsive city
    /// cannot stall the cycle.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_seconds: u64,

    /// PostgreSQL connection string. Falls back to the DATABASE_URL
    /// environment variable when absent.
    #[serde(default)]
    pub database_url: Option<String>,

    /// OpenWeatherMap API key. Falls back to the OWM_API_KEY environment
    /// variable when absent.
    #[serde(default)]
    pub api_key: Option<String>,

    /// SMTP delivery settings. Absence disables alert delivery entirely;
    /// alerts are still detected and logged.
    #[serde(default)]
    pub email: Option<EmailConfig>,
}

/// SMTP settings for alert delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub smtp_server: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
    pub to: String,
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_smtp_port() -> u16 {
    587
}

impl MonitorConfig {
    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let config: MonitorConfig =
            toml::from_str(contents).map_err(|e| format!("invalid TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.interval_seconds == 0 {
            return Err("interval_seconds must be greater than zero".to_string());
        }
        if self.cities.is_empty() {
            return Err("cities must list at least one city".to_string());
        }
        if self.cities.iter().any(|c| c.trim().is_empty()) {
            return Err("cities must not contain empty entries".to_string());
        }
        if self.consecutive_alerts == 0 {
            return Err("consecutive_alerts must be at least 1".to_string());
        }
        if self.fetch_timeout_seconds == 0 {
            return Err("fetch_timeout_seconds must be greater than zero".to_string());
        }
        Ok(())
    }
}

/// Loads configuration from a monitor.toml file.
///
/// # Panics
/// Panics if the file is missing, malformed, or fails validation. This is
/// intentional — the service cannot operate without valid configuration.
pub fn load_config(path: &str) -> MonitorConfig {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));

    MonitorConfig::from_toml_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_toml() -> &'static str {
        r#"
            interval_seconds = 300
            cities = ["Delhi", "Mumbai", "Chennai"]
            temp_unit = "celsius"
            high_temp_threshold = 35.0
            consecutive_alerts = 2

            [email]
            smtp_server = "smtp.example.com"
            username = "monitor"
            password = "secret"
            from = "monitor@example.com"
            to = "oncall@example.com"
        "#
    }

    #[test]
    fn test_parse_full_config() {
        let config = MonitorConfig::from_toml_str(full_toml()).expect("config should parse");
        assert_eq!(config.interval_seconds, 300);
        assert_eq!(config.cities, vec!["Delhi", "Mumbai", "Chennai"]);
        assert_eq!(config.temp_unit, TempUnit::Celsius);
        assert_eq!(config.high_temp_threshold, 35.0);
        assert_eq!(config.consecutive_alerts, 2);

        let email = config.email.expect("email table should be present");
        assert_eq!(email.smtp_server, "smtp.example.com");
        assert_eq!(email.smtp_port, 587, "smtp_port should default to 587");
    }

    #[test]
    fn test_defaults_applied() {
        let config = MonitorConfig::from_toml_str(
            r#"
                interval_seconds = 60
                cities = ["Delhi"]
                temp_unit = "fahrenheit"
                high_temp_threshold = 95.0
                consecutive_alerts = 1
            "#,
        )
        .expect("minimal config should parse");

        assert_eq!(config.fetch_timeout_seconds, 30);
        assert!(config.database_url.is_none());
        assert!(config.api_key.is_none());
        assert!(config.email.is_none(), "absent email table disables delivery");
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = MonitorConfig::from_toml_str(
            r#"
                interval_seconds = 0
                cities = ["Delhi"]
                temp_unit = "celsius"
                high_temp_threshold = 35.0
                consecutive_alerts = 2
            "#,
        );
        assert!(result.is_err(), "zero interval should be rejected");
    }

    #[test]
    fn test_empty_city_list_rejected() {
        let result = MonitorConfig::from_toml_str(
            r#"
                interval_seconds = 300
                cities = []
                temp_unit = "celsius"
                high_temp_threshold = 35.0
                consecutive_alerts = 2
            "#,
        );
        assert!(result.is_err(), "empty city list should be rejected");
    }

    #[test]
    fn test_zero_consecutive_alerts_rejected() {
        let result = MonitorConfig::from_toml_str(
            r#"
                interval_seconds = 300
                cities = ["Delhi"]
                temp_unit = "celsius"
                high_temp_threshold = 35.0
                consecutive_alerts = 0
            "#,
        );
        assert!(result.is_err(), "consecutive_alerts = 0 should be rejected");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result = MonitorConfig::from_toml_str(
            r#"
                interval_seconds = 300
                cities = ["Delhi"]
                temp_unit = "kelvin"
                high_temp_threshold = 35.0
                consecutive_alerts = 2
            "#,
        );
        assert!(result.is_err(), "only celsius and fahrenheit are supported");
    }

    #[test]
    fn test_city_order_preserved() {
        let config = MonitorConfig::from_toml_str(full_toml()).expect("config should parse");
        assert_eq!(config.cities[0], "Delhi");
        assert_eq!(config.cities[2], "Chennai");
    }
}
