//! Per-session gate deciding when re-verification is due.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of the most recent successful TOTP verification for one
/// authentication session.
///
/// The session store owning this value is external; the gate only reads a
/// state it is handed and returns an updated one. The record starts empty
/// and dies with the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationState {
    pub last_verified_at: Option<DateTime<Utc>>,
}

impl VerificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a fresh challenge is due: nothing has been verified in this
    /// session yet, or the last success is older than `window_secs`.
    pub fn needs_challenge(&self, now: DateTime<Utc>, window_secs: u64) -> bool {
        let window = i64::try_from(window_secs).unwrap_or(i64::MAX);
        match self.last_verified_at {
            None => {
                tracing::info!("verification required: new session");
                true
            }
            Some(at) => {
                let age_secs = (now - at).num_seconds();
                if age_secs > window {
                    tracing::info!(age_secs, "verification required: last success outside window");
                    true
                } else {
                    tracing::info!(age_secs, "already verified within window");
                    false
                }
            }
        }
    }

    /// Returns the state with the verification timestamp advanced to `now`.
    ///
    /// Pure: the receiver is untouched and the caller persists the returned
    /// value against the owning session.
    #[must_use]
    pub fn record_success(&self, now: DateTime<Utc>) -> Self {
        Self {
            last_verified_at: Some(now),
        }
    }
}
