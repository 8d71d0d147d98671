//! Transfer decoding, text decoding, and data URI synthesis.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::Engine;
use thiserror::Error;

use crate::model::part::TransferEncoding;

/// Lenient decoder: ignores non-zero trailing bits, still requires correct padding.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Why a part body could not be transfer-decoded.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Result of transfer-decoding a part body.
///
/// A failed decode is not an error for the conversion: the raw body text is
/// used instead and the failure is carried along so the caller can report it.
#[derive(Debug)]
pub enum DecodeOutcome {
    /// The body was decoded (or needed no decoding).
    Decoded(Vec<u8>),
    /// Decoding failed; `bytes` is the raw body as UTF-8.
    Fallback { bytes: Vec<u8>, error: DecodeError },
}

impl DecodeOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Decoded(bytes) | Self::Fallback { bytes, .. } => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Decoded(bytes) | Self::Fallback { bytes, .. } => bytes,
        }
    }
}

/// Decode a part body according to its transfer encoding.
///
/// `7bit`, `8bit`, `binary` and unknown encodings pass the text through as UTF-8.
pub fn decode_body(encoding: &TransferEncoding, body: &str) -> DecodeOutcome {
    match encoding {
        TransferEncoding::Base64 => match decode_base64(body) {
            Ok(bytes) => DecodeOutcome::Decoded(bytes),
            Err(error) => DecodeOutcome::Fallback {
                bytes: body.as_bytes().to_vec(),
                error,
            },
        },
        TransferEncoding::QuotedPrintable => {
            DecodeOutcome::Decoded(decode_quoted_printable(body))
        }
        _ => DecodeOutcome::Decoded(body.as_bytes().to_vec()),
    }
}

/// Decode standard base64, skipping line breaks and any other non-alphabet characters.
pub fn decode_base64(body: &str) -> Result<Vec<u8>, DecodeError> {
    let cleaned: Vec<u8> = body
        .bytes()
        .filter(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
        .collect();
    Ok(LENIENT_BASE64.decode(cleaned)?)
}

/// Decode quoted-printable (RFC 2045).
///
/// `=XX` becomes a byte, `=` before a line break is a soft break, and any
/// other `=` is kept as-is.
pub fn decode_quoted_printable(body: &str) -> Vec<u8> {
    let bytes = body.as_bytes();
    let mut result = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'=' {
            result.push(bytes[i]);
            i += 1;
            continue;
        }

        match (bytes.get(i + 1), bytes.get(i + 2)) {
            (Some(b'\n'), _) => i += 2,
            (Some(b'\r'), Some(b'\n')) => i += 3,
            (Some(&hi), Some(&lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                result.push((hex_value(hi) << 4) | hex_value(lo));
                i += 3;
            }
            _ => {
                result.push(b'=');
                i += 1;
            }
        }
    }
    result
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// Decode HTML bytes to text: UTF-8 first, ISO-8859-1 (which accepts every byte) otherwise.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => encoding_rs::mem::decode_latin1(e.as_bytes()).into_owned(),
    }
}

/// Format `bytes` as `data:<content_type>;base64,<payload>`.
pub fn make_data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(bytes))
}
