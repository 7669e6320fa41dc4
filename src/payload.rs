//! Interpretation of a decoded watermark secret.
//!
//! Backends may hand back either text or the raw payload bits. Bit strings
//! are read as 7-bit ASCII, the encoding TrustMark uses for text payloads.

/// Bits per character in a text payload.
const BITS_PER_CHAR: usize = 7;

/// Turn a decoder secret into the identifier reported to the host.
///
/// A string made only of `0`/`1` with at least one full character is decoded
/// as 7-bit ASCII up to the first NUL. Anything else is returned unchanged.
#[must_use]
pub fn identifier_from_secret(secret: &str) -> String {
    bits_to_text(secret).unwrap_or_else(|| secret.to_string())
}

fn bits_to_text(bits: &str) -> Option<String> {
    if bits.len() < BITS_PER_CHAR || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let mut text = String::with_capacity(bits.len() / BITS_PER_CHAR);
    for chunk in bits.as_bytes().chunks_exact(BITS_PER_CHAR) {
        let value = chunk
            .iter()
            .fold(0u8, |acc, b| (acc << 1) | u8::from(*b == b'1'));
        if value == 0 {
            break;
        }
        text.push(char::from(value));
    }

    if text.is_empty() || text.chars().any(|c| c.is_ascii_control()) {
        return None;
    }
    Some(text)
}

/// The identifier itself when it is an `http://` or `https://` URL.
#[must_use]
pub fn manifest_url(identifier: &str) -> Option<String> {
    if identifier.starts_with("http://") || identifier.starts_with("https://") {
        Some(identifier.to_string())
    } else {
        None
    }
}
