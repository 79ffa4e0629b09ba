//! One check pass: read the last-reminder record, evaluate the rule,
//! send if due, persist on confirmed delivery.
//!
//! The last-reminder timestamp is written only after the channel reports
//! success, so a failed send is retried on the next qualifying run
//! instead of going quiet for a whole phase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decision::{reminder_required, DecisionReason, ReminderPolicy};
use crate::error::Result;
use crate::mailer::ReminderChannel;
use crate::store::LastReminderStore;

/// What a check run did.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// A reminder was delivered and the record updated.
    Sent { days_left: i64 },
    /// No reminder was due.
    NotRequired {
        days_left: i64,
        reason: DecisionReason,
    },
}

/// Run one read-decide-send-persist pass.
///
/// `days_left` comes from the time source; `now` is passed in so the
/// whole pass is one logical unit against a single clock reading.
pub fn run_check(
    policy: ReminderPolicy,
    days_left: i64,
    channel: &dyn ReminderChannel,
    store: &LastReminderStore,
    recipient: &str,
    now: DateTime<Utc>,
) -> Result<CheckOutcome> {
    let last_reminder = store.read()?;
    let decision = reminder_required(policy, days_left, last_reminder, now);

    if !decision.required {
        tracing::trace!(days_left, reason = %decision.reason, "no reminder due");
        return Ok(CheckOutcome::NotRequired {
            days_left,
            reason: decision.reason,
        });
    }

    channel.send_reminder(recipient, days_left)?;
    store.write(now)?;
    Ok(CheckOutcome::Sent { days_left })
}
