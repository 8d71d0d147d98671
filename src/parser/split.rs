//! Split a multipart document into raw part blocks.

/// Split `document` on `--<boundary>` markers.
///
/// The preamble before the first marker and the epilogue after the last one
/// (normally the `--` of the closing marker) are dropped, as are segments that
/// contain only whitespace. Parts are returned in document order.
pub fn split_parts<'a>(document: &'a str, boundary: &str) -> Vec<&'a str> {
    let delimiter = format!("--{boundary}");
    let segments: Vec<&str> = document.split(delimiter.as_str()).collect();

    if segments.len() < 3 {
        return Vec::new();
    }

    segments[1..segments.len() - 1]
        .iter()
        .copied()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}
