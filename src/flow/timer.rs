use chrono::{DateTime, Utc};

/// Resend countdown, derived on demand from the server-issued expiry.
///
/// Holds no ticking state: every read is a pure function of
/// `(expires_at, now)`, so a driver samples it once a second and nothing
/// needs tearing down when the flow leaves the code-entry step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResendTimer {
    expires_at: Option<DateTime<Utc>>,
}

impl ResendTimer {
    pub fn new() -> Self {
        ResendTimer::default()
    }

    /// Arm the countdown from the expiry the send-code response carried.
    pub fn start(&mut self, expires_at: DateTime<Utc>) {
        self.expires_at = Some(expires_at);
    }

    pub fn clear(&mut self) {
        self.expires_at = None;
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whole seconds left, clamped to zero. An unarmed timer reads zero.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> i64 {
        match self.expires_at {
            Some(expires_at) => (expires_at - now).num_seconds().max(0),
            None => 0,
        }
    }

    /// `m:ss` rendering of the remaining time, seconds zero-padded.
    pub fn display_at(&self, now: DateTime<Utc>) -> String {
        let remaining = self.remaining_at(now);
        format!("{}:{:02}", remaining / 60, remaining % 60)
    }

    /// Resend unlocks when the countdown hits zero. Before any code has
    /// been issued there is nothing to wait out.
    pub fn can_resend_at(&self, now: DateTime<Utc>) -> bool {
        self.remaining_at(now) == 0
    }
}
