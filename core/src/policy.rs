//! Policy decision layer combining secret presence, enforcement, and the
//! session gate into one terminal outcome per authentication attempt.

use chrono::{DateTime, Utc};

use crate::config::FilterConfig;
use crate::gate::VerificationState;

/// Terminal outcome of one policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No secret configured and enforcement is off: proceed unchallenged.
    NoSecretAllowed,
    /// No secret configured while enforcement is on: the caller surfaces its
    /// "not configured" outcome (setup page, denial, ...).
    NoSecretDenied,
    /// A code must be collected from the user and checked with
    /// [`crate::totp::verify_encoded`]; on success, callers using a gate
    /// persist [`VerificationState::record_success`].
    ChallengeRequired,
    /// The gate shows a verification still inside the revalidation window.
    AlreadyVerified,
}

/// Decides whether this authentication attempt needs a TOTP challenge.
///
/// `secret` is the principal's stored encoded secret; an empty attribute
/// value counts as not configured. `gate` is `None` for the per-login
/// variant, which challenges on every authentication; the periodic variant
/// passes its session's [`VerificationState`].
///
/// A wrong submitted code never transitions state: the caller simply
/// re-prompts and evaluates again. There is deliberately no attempt counter
/// or lockout here.
pub fn evaluate(
    config: &FilterConfig,
    secret: Option<&str>,
    gate: Option<&VerificationState>,
    now: DateTime<Utc>,
) -> Decision {
    let configured = secret.map_or(false, |s| !s.is_empty());

    if !configured {
        if config.enforce {
            tracing::debug!("principal has no TOTP secret configured and enforcement is on");
            return Decision::NoSecretDenied;
        }
        tracing::debug!("principal has no TOTP secret configured, continuing unchallenged");
        return Decision::NoSecretAllowed;
    }

    match gate {
        Some(state) if !state.needs_challenge(now, config.revalidation_window_secs) => {
            Decision::AlreadyVerified
        }
        _ => Decision::ChallengeRequired,
    }
}
