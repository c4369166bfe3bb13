//! `data:` URI decoding.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::KitError;

/// Standard alphabet, padding optional, stray trailing bits ignored.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decoded payload of a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Decode `data:<mime>[;base64],<payload>` into its mime type and bytes.
///
/// Base64 payloads may omit padding and may contain ASCII whitespace,
/// which is skipped.
pub fn data_uri_to_blob(uri: &str) -> Result<Blob, KitError> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| KitError::InvalidDataUri("missing ',' separator".into()))?;

    let bytes = if header.contains("base64") {
        let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        LENIENT
            .decode(compact)
            .map_err(|e| KitError::InvalidDataUri(format!("bad base64 payload: {e}")))?
    } else {
        unescape(payload)
    };

    let mime_type = header
        .split_once(':')
        .map(|(_, rest)| rest.split(';').next().unwrap_or_default())
        .unwrap_or_default()
        .to_string();

    Ok(Blob { mime_type, bytes })
}

/// `%XX` unescaping. Malformed escapes are kept literally.
fn unescape(input: &str) -> Vec<u8> {
    let raw = input.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' && i + 2 < raw.len() {
            if let (Some(hi), Some(lo)) = (hex_value(raw[i + 1]), hex_value(raw[i + 2])) {
                out.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        out.push(raw[i]);
        i += 1;
    }
    out
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
