//! Weather Monitoring Service - Main Daemon
//!
//! A server-side daemon that continuously:
//! 1. Samples the OpenWeatherMap API for every configured city
//! 2. Warehouses readings in PostgreSQL
//! 3. Detects sustained high-temperature breaches and sends email alerts
//! 4. Writes one statistical summary per city per calendar day
//! 5. Optionally serves current conditions over HTTP
//!
//! Usage:
//!   cargo run --release                           # Start daemon
//!   cargo run --release -- --config custom.toml   # Alternate config file
//!   cargo run --release -- --endpoint 8080        # Also serve HTTP on 8080
//!
//! Environment:
//!   DATABASE_URL - PostgreSQL connection string (unless set in monitor.toml)
//!   OWM_API_KEY  - OpenWeatherMap API key (unless set in monitor.toml)

use std::env;
use std::time::Duration;

use wxmon_service::alert::email::EmailSink;
use wxmon_service::alert::AlertSink;
use wxmon_service::config;
use wxmon_service::daemon::{Monitor, Shutdown};
use wxmon_service::db::PgStore;
use wxmon_service::endpoint;
use wxmon_service::ingest::owm::OwmSource;

fn main() {
    println!("🌤  Weather Monitoring Service");
    println!("==============================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut config_path = "monitor.toml".to_string();
    let mut endpoint_port: Option<u16> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if i + 1 < args.len() {
                    config_path = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
            }
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint_port = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --endpoint requires a port number");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--config PATH] [--endpoint PORT]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load configuration (panics with an explanatory message when invalid)
    println!("📋 Loading configuration from {}...", config_path);
    let cfg = config::load_config(&config_path);
    println!("✓ {} cities, {}s interval\n", cfg.cities.len(), cfg.interval_seconds);

    // Resolve the API key: monitor.toml value, then environment
    dotenv::dotenv().ok();
    let api_key = match cfg.api_key.clone().or_else(|| env::var("OWM_API_KEY").ok()) {
        Some(key) => key,
        None => {
            eprintln!("\n❌ No API key configured.\n");
            eprintln!("Set OWM_API_KEY in .env or api_key in {}\n", config_path);
            std::process::exit(1);
        }
    };

    // Connect to the database and make sure the tables exist
    println!("📊 Connecting to database...");
    let store = match PgStore::connect(cfg.database_url.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("\n❌ Database setup failed: {}\n", e);
            std::process::exit(1);
        }
    };
    println!("✓ Database ready\n");

    // Build the weather source with a bounded per-request timeout
    let source = match OwmSource::new(
        api_key,
        cfg.temp_unit,
        Duration::from_secs(cfg.fetch_timeout_seconds),
    ) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("\n❌ Failed to set up weather API client: {}\n", e);
            std::process::exit(1);
        }
    };

    // Build the alert sink; absent email settings disable delivery
    let sink: Option<Box<dyn AlertSink + Send>> = match &cfg.email {
        Some(email_cfg) => match EmailSink::new(email_cfg) {
            Ok(sink) => {
                println!("✉️  Email alerts enabled (to {})", email_cfg.to);
                Some(Box::new(sink))
            }
            Err(e) => {
                eprintln!("\n❌ Email configuration invalid: {}\n", e);
                std::process::exit(1);
            }
        },
        None => {
            println!("✉️  Email alerts disabled (no [email] section)");
            None
        }
    };

    // Start HTTP endpoint if requested (in background thread, own connection)
    if let Some(port) = endpoint_port {
        println!("🚀 Starting HTTP endpoint server...");
        match PgStore::connect(cfg.database_url.as_deref()) {
            Ok(endpoint_store) => {
                std::thread::spawn(move || {
                    if let Err(e) = endpoint::start_endpoint_server(port, endpoint_store) {
                        eprintln!("❌ Endpoint server error: {}", e);
                    }
                });
            }
            Err(e) => {
                eprintln!("❌ Failed to connect to database for endpoint: {}", e);
                eprintln!("   Continuing without HTTP endpoint\n");
            }
        }
    }

    // Run the main monitoring loop until the process is terminated
    println!("   Press Ctrl+C to stop\n");
    let shutdown = Shutdown::new();
    let mut monitor = Monitor::new(cfg, Box::new(source), store, sink);
    monitor.run(&shutdown);
}
