//! The reminder decision rule.
//!
//! A pure function: given the policy, the days left on the clock, and the
//! timestamp of the last reminder, decide whether a reminder is due. No
//! I/O, no hidden state, deterministic for a fixed `now`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-invocation reminder policy. Not persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReminderPolicy {
    /// Remind when this many days (or fewer) remain.
    pub days_threshold: i64,
    /// Length of one game phase in days; at most one reminder is sent per
    /// phase window.
    pub phase_length_days: i64,
}

/// Why the decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// A reminder already went out within the current phase window.
    AlreadyNotified,
    /// The remaining time is at or below the threshold.
    ThresholdMet,
    /// More time remains than the threshold allows for.
    ThresholdNotMet,
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            DecisionReason::AlreadyNotified => "reminder already sent this phase",
            DecisionReason::ThresholdMet => "reminder threshold met",
            DecisionReason::ThresholdNotMet => "reminder threshold not met",
        };
        f.write_str(msg)
    }
}

/// Outcome of evaluating the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub required: bool,
    pub reason: DecisionReason,
}

/// Decide whether a reminder is due.
///
/// Evaluated in order:
/// 1. if the last reminder is within `phase_length_days` whole days of
///    `now`, nothing is due regardless of the clock;
/// 2. otherwise a reminder is due when `days_left` is at or below
///    `days_threshold` (inclusive boundary);
/// 3. otherwise nothing is due.
///
/// `days_left` may be negative when the deadline has already passed; an
/// overdue game still satisfies the threshold.
pub fn reminder_required(
    policy: ReminderPolicy,
    days_left: i64,
    last_reminder: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Decision {
    let days_since_last = (now - last_reminder).num_days();
    if days_since_last <= policy.phase_length_days {
        return Decision {
            required: false,
            reason: DecisionReason::AlreadyNotified,
        };
    }

    if days_left <= policy.days_threshold {
        Decision {
            required: true,
            reason: DecisionReason::ThresholdMet,
        }
    } else {
        Decision {
            required: false,
            reason: DecisionReason::ThresholdNotMet,
        }
    }
}
