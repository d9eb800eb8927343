/// Core daemon implementation for the weather monitoring service.
///
/// This module implements the main monitoring loop that:
/// 1. Polls the weather API for every configured city, in order
/// 2. Warehouses each successful reading
/// 3. Feeds each stored reading through the alert hysteresis engine
/// 4. Dispatches alerts to the configured sink
/// 5. Writes one daily summary per city when the local date advances
///
/// One cycle is strictly sequential: a fetch failure for one city is
/// logged and skipped, a store failure abandons that city for the cycle,
/// and neither ever aborts the loop.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::alert::{AlertEngine, AlertSink};
use crate::analysis::daily;
use crate::config::MonitorConfig;
use crate::db::SampleStore;
use crate::ingest::ReadingSource;

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Cooperative shutdown flag.
///
/// Checked before every per-city fetch and polled during the inter-cycle
/// sleep, so a stop request never waits out a full sampling interval.
/// Clone freely; all clones share the flag.
#[derive(Clone, Default)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleeps for up to `duration`, polling the flag in 250 ms slices.
    /// Returns true if shutdown was requested before the time elapsed.
    pub fn sleep(&self, duration: Duration) -> bool {
        const SLICE: Duration = Duration::from_millis(250);

        let mut remaining = duration;
        while !remaining.is_zero() {
            if self.is_requested() {
                return true;
            }
            let nap = remaining.min(SLICE);
            thread::sleep(nap);
            remaining -= nap;
        }
        self.is_requested()
    }
}

// ---------------------------------------------------------------------------
// Monitor
// ---------------------------------------------------------------------------

/// What happened during one sampling cycle, for progress output.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    pub stored: usize,
    pub alerts: usize,
    pub failures: usize,
}

/// Main monitor state: configuration plus the three collaborators and the
/// alert engine's per-city counters.
pub struct Monitor<S: SampleStore> {
    config: MonitorConfig,
    source: Box<dyn ReadingSource + Send>,
    store: S,
    sink: Option<Box<dyn AlertSink + Send>>,
    engine: AlertEngine,
    /// Per-city marker of the last local date an aggregation run completed.
    /// Initialized lazily to the date a city is first seen, so startup
    /// never triggers an aggregation storm.
    last_aggregated: HashMap<String, NaiveDate>,
}

impl<S: SampleStore> Monitor<S> {
    /// `sink: None` disables alert delivery entirely; breaches are still
    /// detected, counted, and logged.
    pub fn new(
        config: MonitorConfig,
        source: Box<dyn ReadingSource + Send>,
        store: S,
        sink: Option<Box<dyn AlertSink + Send>>,
    ) -> Self {
        let engine = AlertEngine::new(
            config.high_temp_threshold,
            config.consecutive_alerts,
            config.temp_unit,
        );

        Self {
            config,
            source,
            store,
            sink,
            engine,
            last_aggregated: HashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn engine(&self) -> &AlertEngine {
        &self.engine
    }

    /// Main monitoring loop. Runs until `shutdown` is requested; under
    /// normal operation that never happens and the loop is ended only by
    /// process termination.
    pub fn run(&mut self, shutdown: &Shutdown) {
        println!("🔄 Starting monitoring loop...");
        println!("   Sampling interval: {} seconds", self.config.interval_seconds);
        println!("   Monitoring {} cities", self.config.cities.len());

        let interval = Duration::from_secs(self.config.interval_seconds);

        loop {
            if shutdown.is_requested() {
                break;
            }

            let today = Local::now().date_naive();
            let outcome = self.run_cycle(today, shutdown);
            println!(
                "✓ Cycle complete: {} stored, {} alerts, {} failures",
                outcome.stored, outcome.alerts, outcome.failures
            );

            if shutdown.sleep(interval) {
                break;
            }
        }

        println!("✓ Monitor stopped");
    }

    /// One fetch-store-check pass over every configured city, followed by
    /// the daily aggregation check. `today` is the local calendar date the
    /// cycle runs under; `run` passes the wall clock, tests pass fixed
    /// dates.
    pub fn run_cycle(&mut self, today: NaiveDate, shutdown: &Shutdown) -> CycleOutcome {
        let mut outcome = CycleOutcome::default();
        let cities = self.config.cities.clone();

        for city in &cities {
            if shutdown.is_requested() {
                return outcome;
            }

            match self.source.fetch(city) {
                Ok(reading) => {
                    // Store before alert-evaluating: a crash between the
                    // two leaves at most an unflagged breach, never an
                    // alert with no backing record.
                    if let Err(e) = self.store.append(&reading) {
                        eprintln!("   ✗ [{}] store failed: {}", city, e);
                        outcome.failures += 1;
                        continue;
                    }
                    outcome.stored += 1;

                    if let Some(message) = self.engine.observe(&reading) {
                        outcome.alerts += 1;
                        eprintln!("   ⚠ ALERT: {}", message);

                        if let Some(sink) = &self.sink {
                            // The counter reset stands even when delivery
                            // fails; the alert is fired, not retried.
                            if let Err(e) = sink.send(&message) {
                                eprintln!("   ✗ [{}] alert delivery failed: {}", city, e);
                            }
                        }
                    }
                }
                Err(e) => {
                    eprintln!("   ✗ [{}] fetch failed: {}", city, e);
                    outcome.failures += 1;
                }
            }
        }

        self.aggregate_if_due(today);
        outcome
    }

    /// Writes the previous day's summary for every city whose marker lags
    /// the current local date. A no-data day advances the marker; a store
    /// error leaves it so the next cycle retries.
    fn aggregate_if_due(&mut self, today: NaiveDate) {
        let previous_day = match today.pred_opt() {
            Some(date) => date,
            None => return,
        };
        let cities = self.config.cities.clone();

        for city in &cities {
            let marker = *self
                .last_aggregated
                .entry(city.clone())
                .or_insert(today);
            if marker >= today {
                continue;
            }

            match daily::aggregate_day(&mut self.store, city, previous_day) {
                Ok(Some(summary)) => {
                    println!(
                        "   ✓ [{}] summary for {}: avg {:.1} max {:.1} min {:.1} ({})",
                        city,
                        previous_day,
                        summary.avg_temp,
                        summary.max_temp,
                        summary.min_temp,
                        summary.dominant_condition
                    );
                    self.last_aggregated.insert(city.clone(), today);
                }
                Ok(None) => {
                    println!("   [{}] no readings for {}, no summary written", city, previous_day);
                    self.last_aggregated.insert(city.clone(), today);
                }
                Err(e) => {
                    eprintln!("   ✗ [{}] aggregation failed: {}", city, e);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
