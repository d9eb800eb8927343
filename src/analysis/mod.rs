/// Statistical analysis over stored readings.
///
/// `daily` computes the per-city daily summary. Anything heavier
/// (trend detection, cross-city comparison) belongs in external tooling
/// that reads the curated database, not in the daemon.

pub mod daily;
