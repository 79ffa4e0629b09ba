//! Reminder dispatch over SMTP.
//!
//! The mailer submits one message per call through an authenticated
//! STARTTLS relay and never retries; a transient relay failure surfaces
//! as `DeliveryFailed` and the next scheduled run tries again.
//! Credentials are an explicit value handed in at construction, so a run
//! without them fails before any connection is opened.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::RelayConfig;
use crate::error::{CoreError, Result};

/// Environment variable holding the sender/login address.
pub const ADDRESS_VAR: &str = "DIPLOBOT_EMAIL_ADDRESS";
/// Environment variable holding the relay password or app secret.
pub const SECRET_VAR: &str = "DIPLOBOT_EMAIL_PASSWORD";

/// Anything that can deliver a reminder. The production implementation is
/// [`Mailer`]; tests substitute a recording fake.
pub trait ReminderChannel {
    fn send_reminder(&self, recipient: &str, days_left: i64) -> Result<()>;
}

/// Relay login material, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub address: String,
    pub secret: String,
}

impl SmtpCredentials {
    /// Read credentials from the environment.
    ///
    /// Fails with `CredentialsMissing` when either variable is unset or
    /// empty; a half-configured environment is treated the same as an
    /// unconfigured one.
    pub fn from_env() -> Result<Self> {
        let address = std::env::var(ADDRESS_VAR).unwrap_or_default();
        let secret = std::env::var(SECRET_VAR).unwrap_or_default();
        if address.is_empty() || secret.is_empty() {
            return Err(CoreError::CredentialsMissing {
                address_var: ADDRESS_VAR,
                secret_var: SECRET_VAR,
            });
        }
        Ok(Self { address, secret })
    }
}

/// SMTP reminder channel.
pub struct Mailer {
    credentials: SmtpCredentials,
    relay: RelayConfig,
}

impl Mailer {
    pub fn new(credentials: SmtpCredentials, relay: RelayConfig) -> Self {
        Self { credentials, relay }
    }

    fn sender(&self) -> Result<Mailbox> {
        self.credentials
            .address
            .parse()
            .map_err(|e| CoreError::DeliveryFailed(format!("invalid sender address: {e}")))
    }
}

/// Fixed reminder message body.
pub fn reminder_body(days_left: i64) -> String {
    format!("DiploBot Reminder -- there are {days_left} day(s) remaining until the next turn")
}

impl ReminderChannel for Mailer {
    fn send_reminder(&self, recipient: &str, days_left: i64) -> Result<()> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| CoreError::DeliveryFailed(format!("invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.sender()?)
            .to(to)
            .subject("DiploBot turn reminder")
            .body(reminder_body(days_left))
            .map_err(|e| CoreError::DeliveryFailed(format!("building message: {e}")))?;

        let transport = SmtpTransport::starttls_relay(&self.relay.host)
            .map_err(|e| CoreError::DeliveryFailed(format!("relay setup: {e}")))?
            .port(self.relay.port)
            .credentials(Credentials::new(
                self.credentials.address.clone(),
                self.credentials.secret.clone(),
            ))
            .build();

        tracing::trace!(recipient, days_left, "submitting reminder");
        transport
            .send(&message)
            .map_err(|e| CoreError::DeliveryFailed(e.to_string()))?;
        Ok(())
    }
}
