/// Consecutive-breach hysteresis for high-temperature alerts.
///
/// One counter per city. A reading above the threshold increments the
/// city's counter; reaching the configured count fires exactly one alert
/// and resets the counter. Any reading at or below the threshold resets
/// the counter — a single cooling observation clears all progress toward
/// an alert. There is no decay and no partial credit.
///
/// High temperature is currently the only threshold kind; if another kind
/// lands, the counter key widens from city to (city, kind).
///
/// The engine owns its state and performs no I/O, so the full state
/// machine is testable without a store, a network, or a clock.

use std::collections::HashMap;

use crate::model::WeatherReading;
use crate::units::TempUnit;

pub struct AlertEngine {
    threshold: f64,
    required: u32,
    unit: TempUnit,
    counters: HashMap<String, u32>,
}

impl AlertEngine {
    /// `threshold` is in the display unit; `required` is the consecutive
    /// breach count that fires an alert (>= 1, enforced by config).
    pub fn new(threshold: f64, required: u32, unit: TempUnit) -> Self {
        Self {
            threshold,
            required,
            unit,
            counters: HashMap::new(),
        }
    }

    /// Feeds one reading through the state machine. Returns the alert
    /// message when this reading completes a qualifying run of breaches.
    ///
    /// Counter updates never fail; delivery problems downstream do not
    /// roll back the reset — the alert is considered fired here.
    pub fn observe(&mut self, reading: &WeatherReading) -> Option<String> {
        if reading.temperature > self.threshold {
            let count = self.counters.entry(reading.city.clone()).or_insert(0);
            *count += 1;

            if *count >= self.required {
                *count = 0;
                return Some(format!(
                    "High temperature alert for {}: {:.1}°{}",
                    reading.city,
                    reading.temperature,
                    self.unit.abbrev()
                ));
            }
        } else {
            self.counters.insert(reading.city.clone(), 0);
        }

        None
    }

    /// Current consecutive-breach count for a city (0 if never seen).
    pub fn breach_count(&self, city: &str) -> u32 {
        self.counters.get(city).copied().unwrap_or(0)
    }
}
