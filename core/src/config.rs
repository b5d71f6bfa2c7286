use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_REVALIDATION_WINDOW_SECS: u64 = 3600;

/// Deployment-level settings for the verification filter.
///
/// Immutable once constructed; every operation receives it explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Deny principals that have no TOTP secret configured.
    pub enforce: bool,
    /// Seconds a successful verification stays fresh before the gate
    /// requires a new challenge.
    pub revalidation_window_secs: u64,
    /// Extra time steps accepted on either side of the current one. Zero
    /// keeps the strict single-window comparison; one tolerates roughly
    /// thirty seconds of client clock drift.
    pub allowed_skew: u8,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            enforce: false,
            revalidation_window_secs: DEFAULT_REVALIDATION_WINDOW_SECS,
            allowed_skew: 0,
        }
    }
}

impl FilterConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let enforce = match env::var("MFA_ENFORCE") {
            Ok(value) => value
                .parse()
                .map_err(|_| anyhow!("Invalid MFA_ENFORCE value: {}", value))?,
            Err(_) => false,
        };

        let revalidation_window_secs = env::var("MFA_REVALIDATION_WINDOW_SECS")
            .unwrap_or_else(|_| DEFAULT_REVALIDATION_WINDOW_SECS.to_string())
            .parse()
            .unwrap_or(DEFAULT_REVALIDATION_WINDOW_SECS);

        let allowed_skew = env::var("MFA_ALLOWED_SKEW")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .unwrap_or(0);

        Ok(FilterConfig {
            enforce,
            revalidation_window_secs,
            allowed_skew,
        })
    }
}
