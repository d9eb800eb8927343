/// Email alert delivery over SMTP.
///
/// Plain-text messages with a fixed "Weather Alert" subject, delivered
/// through the configured relay with STARTTLS. Mailbox addresses are
/// parsed at construction so a typo in monitor.toml fails at startup
/// rather than at the first alert.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::alert::{AlertSink, SinkError};
use crate::config::EmailConfig;

pub struct EmailSink {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl EmailSink {
    pub fn new(config: &EmailConfig) -> Result<Self, SinkError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| SinkError::Config(format!("invalid from address '{}': {}", config.from, e)))?;

        let to: Mailbox = config
            .to
            .parse()
            .map_err(|e| SinkError::Config(format!("invalid to address '{}': {}", config.to, e)))?;

        let creds = Credentials::new(config.username.clone(), config.password.clone());

        let mailer = SmtpTransport::starttls_relay(&config.smtp_server)
            .map_err(|e| SinkError::Config(format!("SMTP relay setup failed: {}", e)))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self { mailer, from, to })
    }
}

impl AlertSink for EmailSink {
    fn send(&self, message: &str) -> Result<(), SinkError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject("Weather Alert")
            .header(ContentType::TEXT_PLAIN)
            .body(message.to_string())
            .map_err(|e| SinkError::Send(format!("failed to build message: {}", e)))?;

        self.mailer
            .send(&email)
            .map_err(|e| SinkError::Send(e.to_string()))?;

        Ok(())
    }
}
