//! One-off provisioning helpers: secret generation and the `otpauth://` URI
//! handed to authenticator apps. Not part of the verification path.

use anyhow::{anyhow, Result};
use rand::rngs::OsRng;
use rand::Rng;
use url::Url;

use crate::base32;

pub const DEFAULT_SECRET_LENGTH: usize = 16;

/// Generates a random base32-encoded secret suitable for RFC 6238 TOTP.
///
/// Symbols are drawn uniformly from the base32 alphabet, so the result never
/// carries padding.
pub fn generate_secret(length: usize) -> String {
    (0..length)
        .map(|_| char::from(base32::ALPHABET[OsRng.gen_range(0..base32::ALPHABET.len())]))
        .collect()
}

/// Formats an `otpauth://totp/<label>?secret=<secret>` URI that OTP clients
/// can import, percent-encoding the label.
pub fn provisioning_uri(label: &str, secret: &str) -> Result<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(anyhow!("Label must not be empty"));
    }

    let mut uri =
        Url::parse("otpauth://totp/").map_err(|e| anyhow!("otpauth base URI: {}", e))?;
    uri.path_segments_mut()
        .map_err(|_| anyhow!("otpauth base URI cannot carry a path"))?
        .pop_if_empty()
        .push(label);
    uri.query_pairs_mut().append_pair("secret", secret);

    Ok(uri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_secret_has_requested_length_and_alphabet() {
        let secret = generate_secret(DEFAULT_SECRET_LENGTH);
        assert_eq!(secret.len(), 16);
        assert!(secret.bytes().all(|b| base32::ALPHABET.contains(&b)));
    }

    #[test]
    fn generated_secret_decodes_to_whole_bytes() {
        // 16 symbols carry 80 bits, ten whole bytes.
        let raw = base32::decode(&generate_secret(16)).expect("valid secret");
        assert_eq!(raw.len(), 10);
    }

    #[test]
    fn consecutive_secrets_differ() {
        assert_ne!(generate_secret(16), generate_secret(16));
    }

    #[test]
    fn provisioning_uri_formats_label_and_secret() {
        let uri = provisioning_uri("example", "JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(uri, "otpauth://totp/example?secret=JBSWY3DPEHPK3PXP");
    }

    #[test]
    fn provisioning_uri_percent_encodes_the_label() {
        let uri = provisioning_uri("IdP 2fa-dev", "ABC234").unwrap();
        assert_eq!(uri, "otpauth://totp/IdP%202fa-dev?secret=ABC234");
    }

    #[test]
    fn provisioning_uri_rejects_empty_labels() {
        assert!(provisioning_uri("", "ABC234").is_err());
        assert!(provisioning_uri("   ", "ABC234").is_err());
    }
}
