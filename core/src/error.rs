//! Verification error types.

use thiserror::Error;

/// Failure to decode a stored base32 secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input carried a trailing `=` count outside {0, 1, 3, 4, 6}.
    #[error("{0} padding characters is not a valid base32 padding length")]
    InvalidPaddingLength(usize),

    /// A `=` appeared somewhere other than the tail of the input.
    #[error("padding characters are only allowed at the end of the input")]
    MisplacedPadding,

    /// A non-padding character outside `A-Z2-7`.
    #[error("character {0:?} is outside the base32 alphabet")]
    InvalidCharacter(char),
}

/// Errors surfaced by the verification path.
///
/// A wrong code is not an error; verification returns `Ok(false)` so the
/// caller can re-prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpError {
    /// The stored secret is not valid base32. Callers treat this as a
    /// misconfigured principal, not a failed guess.
    #[error("invalid TOTP secret: {0}")]
    InvalidSecret(#[from] DecodeError),

    /// The submitted code contained something other than decimal digits.
    #[error("a valid TOTP token consists of only numeric values")]
    MalformedCode,
}
