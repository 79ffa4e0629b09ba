//! # DiploBot Core Library
//!
//! Core logic for DiploBot, a small scheduled tool that watches a
//! webDiplomacy game's turn countdown and e-mails a reminder when the
//! deadline is close. The CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Time source**: scrapes the board page for the deadline timestamp
//!   and reports the duration remaining
//! - **Decision**: a pure rule combining the days-left threshold with a
//!   once-per-phase guard over the persisted last-reminder timestamp
//! - **Dispatch**: SMTP delivery behind the [`ReminderChannel`] trait,
//!   with credentials supplied explicitly at construction
//! - **Store**: single-slot durable record of when the last reminder
//!   was sent
//!
//! ## Key Components
//!
//! - [`TimeSource`]: board page adapter
//! - [`reminder_required`]: the decision rule
//! - [`Mailer`]: SMTP reminder channel
//! - [`LastReminderStore`]: last-notified persistence
//! - [`run_check`]: one read-decide-send-persist pass

pub mod check;
pub mod config;
pub mod decision;
pub mod error;
pub mod mailer;
pub mod source;
pub mod store;

pub use check::{run_check, CheckOutcome};
pub use config::{Config, RelayConfig};
pub use decision::{reminder_required, Decision, DecisionReason, ReminderPolicy};
pub use error::{CoreError, Result};
pub use mailer::{Mailer, ReminderChannel, SmtpCredentials};
pub use source::TimeSource;
pub use store::LastReminderStore;
