//! Per-part header extraction.
//!
//! Only `Content-Type`, `Content-Transfer-Encoding`, `Content-Location` and
//! `Content-ID` are looked up; lookup is independent of header order and case.

use crate::model::part::{PartHeaders, TransferEncoding, DEFAULT_CONTENT_TYPE};

/// Build [`PartHeaders`] from a part's header block.
///
/// Missing or empty headers fall back to their defaults.
pub fn extract_part_headers(block: &str) -> PartHeaders {
    let headers = unfold_headers(block);

    let content_type = get_header(&headers, "content-type")
        .map(|ct| ct.split(';').next().unwrap_or("").trim())
        .filter(|ct| !ct.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let transfer_encoding = get_header(&headers, "content-transfer-encoding")
        .filter(|v| !v.trim().is_empty())
        .map(TransferEncoding::parse)
        .unwrap_or_default();

    let location = get_header(&headers, "content-location")
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from);

    let content_id = get_header(&headers, "content-id")
        .map(strip_angle_brackets)
        .filter(|v| !v.is_empty())
        .map(String::from);

    PartHeaders {
        content_type,
        transfer_encoding,
        location,
        content_id,
    }
}

/// Unfold headers: join continuation lines (starting with space or tab) with the previous header.
///
/// Returns a list of `(lowercase_name, value)` pairs.
fn unfold_headers(text: &str) -> Vec<(String, String)> {
    let mut result: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(last) = result.last_mut() {
                last.1.push(' ');
                last.1.push_str(line.trim());
            }
        } else if let Some(colon_pos) = line.find(':') {
            let name = line[..colon_pos].trim().to_lowercase();
            let value = line[colon_pos + 1..].trim().to_string();
            result.push((name, value));
        }
    }

    result
}

/// Get the first value for a header name.
fn get_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// `<abc@example>` → `abc@example`. Values without brackets are returned trimmed.
fn strip_angle_brackets(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(start) = trimmed.find('<') {
        if let Some(end) = trimmed[start..].find('>') {
            return trimmed[start + 1..start + end].trim();
        }
    }
    trimmed
}
