/// Temperature alerting: hysteresis state machine and delivery transport.
///
/// `hysteresis` decides when a run of hot readings becomes an alert;
/// `email` delivers the resulting message. The two halves meet only in
/// the daemon loop, which keeps the decision logic free of I/O.

pub mod email;
pub mod hysteresis;

pub use hysteresis::AlertEngine;

/// Delivery transport for alert messages.
///
/// Failures are logged and never retried; by the time `send` is called
/// the alert already counts as fired for hysteresis purposes.
pub trait AlertSink {
    fn send(&self, message: &str) -> Result<(), SinkError>;
}

/// An alert could not be delivered.
#[derive(Debug)]
pub enum SinkError {
    /// Bad transport configuration (relay host, mailbox addresses).
    Config(String),
    /// The message was built but delivery failed.
    Send(String),
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Config(msg) => write!(f, "Sink configuration error: {}", msg),
            SinkError::Send(msg) => write!(f, "Delivery failed: {}", msg),
        }
    }
}

impl std::error::Error for SinkError {}
