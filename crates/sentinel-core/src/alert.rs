//! Manual alert side channel - transient, pass-through.

use serde::Serialize;

/// How long an issued alert stays visible, in milliseconds.
pub const ALERT_VISIBLE_MS: i64 = 5_000;

/// A supervisor-issued alert for one member. Stored verbatim and dropped
/// after [`ALERT_VISIBLE_MS`]; it carries no semantics beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualAlert {
    pub member_id: String,
    pub message: String,
    /// Epoch milliseconds when issued.
    pub issued_at: i64,
}

impl ManualAlert {
    pub fn new(member_id: impl Into<String>, message: impl Into<String>, issued_at: i64) -> Self {
        Self {
            member_id: member_id.into(),
            message: message.into(),
            issued_at,
        }
    }

    /// Banner line shown on the command display.
    pub fn banner(&self) -> String {
        format!("ALERT SENT TO {}: {}", self.member_id, self.message)
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms - self.issued_at >= ALERT_VISIBLE_MS
    }
}
