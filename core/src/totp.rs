//! RFC 6238 one-time code derivation and comparison.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::base32;
use crate::error::OtpError;

type HmacSha1 = Hmac<Sha1>;

pub const STEP_SECONDS: i64 = 30;
pub const CODE_DIGITS: usize = 6;

const CODE_SPACE: u32 = 1_000_000;

/// Returns the 30-second time step for the given instant.
///
/// Instants before the unix epoch clamp to step zero.
pub fn time_step(now: DateTime<Utc>) -> u64 {
    (now.timestamp().max(0) / STEP_SECONDS) as u64
}

/// Derives the six-digit code for a secret at one time step.
///
/// The step is hashed as an 8-byte big-endian counter with HMAC-SHA1, then
/// dynamically truncated: the low four bits of the final digest byte select
/// an offset, four bytes from that offset are read as a big-endian 31-bit
/// integer, and the code is that value mod 10^6, zero-padded.
pub fn compute_code(secret: &[u8], step: u64) -> String {
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC can take a key of any size");
    mac.update(&step.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[19] & 0x0f) as usize;
    let value = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    format!("{:0width$}", value % CODE_SPACE, width = CODE_DIGITS)
}

/// Checks a submitted code against the codes for the current time step and
/// `allowed_skew` steps on either side.
///
/// A submission containing anything but decimal digits is rejected with
/// [`OtpError::MalformedCode`] before any code is derived. A well-formed but
/// wrong code is `Ok(false)`.
pub fn verify(
    secret: &[u8],
    submitted: &str,
    now: DateTime<Utc>,
    allowed_skew: u8,
) -> Result<bool, OtpError> {
    if submitted.is_empty() || !submitted.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OtpError::MalformedCode);
    }

    let current = time_step(now);
    for delta in -i64::from(allowed_skew)..=i64::from(allowed_skew) {
        let Some(step) = current.checked_add_signed(delta) else {
            continue;
        };
        if submitted == compute_code(secret, step) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Checks a submitted code against a stored base32-encoded secret.
///
/// Decode failures surface as [`OtpError::InvalidSecret`], the "secret
/// misconfigured" outcome; they never panic the verification path.
pub fn verify_encoded(
    secret: &str,
    submitted: &str,
    now: DateTime<Utc>,
    allowed_skew: u8,
) -> Result<bool, OtpError> {
    let secret_bytes = base32::decode(secret)?;
    verify(&secret_bytes, submitted, now, allowed_skew)
}
