//! Decode a single raw part and fold it into the conversion state.

use tracing::{debug, warn};

use crate::model::conversion::Conversion;
use crate::model::part::PartHeaders;
use crate::parser::decode::{self, DecodeOutcome};
use crate::parser::header;

/// How a part was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartKind {
    /// The part became the primary HTML document.
    PrimaryHtml,
    /// The part was turned into a data URI registered under these keys.
    /// Empty when the part has neither a location nor a content id.
    Resource { keys: Vec<String> },
    /// The part was blank and ignored.
    Empty,
}

/// Split a raw part into `(headers, body)` after normalizing line endings.
///
/// Leading blank lines are skipped and trailing whitespace is removed from the
/// body. A part without a blank-line separator has no headers: the whole
/// remainder is its body.
pub fn split_part(raw: &str) -> (String, String) {
    let normalized = raw.replace("\r\n", "\n");
    let content = normalized.trim_start();

    match content.split_once("\n\n") {
        Some((headers, body)) => (headers.to_string(), body.trim_end().to_string()),
        None => (String::new(), content.trim_end().to_string()),
    }
}

/// Decode one raw part and update `state`.
///
/// The first `text/html` part becomes the primary document; every other part
/// becomes a data URI registered under its `Content-Location` and/or `cid:` key.
/// Transfer-decoding failures are logged and the raw body is used instead.
pub fn decode_part(raw: &str, state: &mut Conversion) -> PartKind {
    if raw.trim().is_empty() {
        return PartKind::Empty;
    }

    let (header_block, body) = split_part(raw);
    let headers = header::extract_part_headers(&header_block);
    state.parts_seen += 1;

    let outcome = decode::decode_body(&headers.transfer_encoding, &body);
    if let DecodeOutcome::Fallback { ref error, .. } = outcome {
        warn!(
            encoding = %headers.transfer_encoding,
            location = headers.location.as_deref().unwrap_or(""),
            error = %error,
            "Decoding error, using raw body"
        );
        state.decode_fallbacks += 1;
    }
    let bytes = outcome.into_bytes();

    if headers.is_html() && !state.has_primary_html() {
        debug!(
            location = headers.location.as_deref().unwrap_or(""),
            bytes = bytes.len(),
            "Found primary HTML part"
        );
        state.set_primary_html(decode::decode_text(bytes));
        return PartKind::PrimaryHtml;
    }

    let keys = register_resource(&headers, &bytes, state);
    debug!(
        content_type = %headers.content_type,
        keys = ?keys,
        bytes = bytes.len(),
        "Registered resource"
    );
    PartKind::Resource { keys }
}

fn register_resource(headers: &PartHeaders, bytes: &[u8], state: &mut Conversion) -> Vec<String> {
    let data_uri = decode::make_data_uri(&headers.content_type, bytes);
    let keys: Vec<String> = headers
        .location
        .iter()
        .cloned()
        .chain(headers.cid_key())
        .collect();

    for key in &keys {
        if state.resources.insert(key.clone(), data_uri.clone()).is_some() {
            debug!(key = %key, "Resource key registered twice, keeping the later part");
        }
    }
    keys
}
