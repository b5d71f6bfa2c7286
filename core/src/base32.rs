//! RFC 4648 base32 codec for shared TOTP secrets.

use crate::error::DecodeError;

pub(crate) const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const PADDING: u8 = b'=';

/// Padding lengths that can result from encoding a whole number of bytes.
const VALID_PADDING_LENGTHS: [usize; 5] = [0, 1, 3, 4, 6];

fn symbol_value(symbol: u8) -> Option<u8> {
    match symbol {
        b'A'..=b'Z' => Some(symbol - b'A'),
        b'2'..=b'7' => Some(symbol - b'2' + 26),
        _ => None,
    }
}

/// Decodes a padded, uppercase base32 string into raw secret bytes.
///
/// An empty input decodes to empty bytes. Eight symbols carry 40 bits and
/// pack into five bytes; a trailing partial group yields only as many whole
/// bytes as it carries, discarding leftover bits.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let bytes = encoded.as_bytes();
    let padding = bytes.iter().filter(|&&b| b == PADDING).count();
    if !VALID_PADDING_LENGTHS.contains(&padding) {
        return Err(DecodeError::InvalidPaddingLength(padding));
    }
    if bytes[bytes.len() - padding..].iter().any(|&b| b != PADDING) {
        return Err(DecodeError::MisplacedPadding);
    }

    let payload = &bytes[..bytes.len() - padding];
    let mut raw = Vec::with_capacity(payload.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0u32;
    for &symbol in payload {
        let value = symbol_value(symbol)
            .ok_or(DecodeError::InvalidCharacter(char::from(symbol)))?;
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            raw.push((buffer >> bits) as u8);
        }
    }

    Ok(raw)
}

/// Encodes raw bytes as uppercase base32, padded with `=` to a multiple of
/// eight characters.
pub fn encode(raw: &[u8]) -> String {
    let mut encoded = String::with_capacity(raw.len().div_ceil(5) * 8);
    for chunk in raw.chunks(5) {
        let mut buffer: u64 = 0;
        for (i, &byte) in chunk.iter().enumerate() {
            buffer |= u64::from(byte) << (8 * (4 - i));
        }
        // ceil(bits / 5) symbols carry the chunk's content
        let symbols = (chunk.len() * 8).div_ceil(5);
        for i in 0..symbols {
            let index = (buffer >> (35 - 5 * i)) & 0x1f;
            encoded.push(char::from(ALPHABET[index as usize]));
        }
        for _ in symbols..8 {
            encoded.push(char::from(PADDING));
        }
    }
    encoded
}
