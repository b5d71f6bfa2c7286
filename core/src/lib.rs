//! TOTP second-factor verification core.
//!
//! Decodes stored base32 secrets, derives RFC 6238 one-time codes with
//! HMAC-SHA1, and decides per authentication attempt whether a fresh
//! challenge is required, combining the deployment policy with a per-session
//! re-verification gate. The surrounding authentication pipeline owns
//! session persistence and user interaction; everything in this crate is
//! synchronous, deterministic computation over the values it is handed.

pub mod base32;
pub mod config;
pub mod error;
pub mod gate;
pub mod policy;
pub mod provision;
pub mod totp;

pub use config::FilterConfig;
pub use error::{DecodeError, OtpError};
pub use gate::VerificationState;
pub use policy::{evaluate, Decision};
