//! Locate the multipart boundary in the top-level MIME headers.

use crate::error::{MhtmlError, Result};

/// Find the byte offset where the top-level headers end (the first blank line).
///
/// Accepts both `\n\n` and `\r\n\r\n`; whichever comes first wins.
pub fn find_header_end(text: &str) -> Option<usize> {
    match (text.find("\n\n"), text.find("\r\n\r\n")) {
        (Some(lf), Some(crlf)) => Some(lf.min(crlf)),
        (lf, crlf) => lf.or(crlf),
    }
}

/// Extract the value of the first non-empty `boundary="..."` parameter.
///
/// The parameter name is matched case-sensitively and the value must be quoted.
pub fn parse_boundary(headers: &str) -> Option<&str> {
    const PARAM: &str = "boundary=\"";

    let mut remaining = headers;
    while let Some(start) = remaining.find(PARAM) {
        let after = &remaining[start + PARAM.len()..];
        let end = after.find('"')?;
        if end > 0 {
            return Some(&after[..end]);
        }
        remaining = &after[end + 1..];
    }
    None
}

/// Resolve the boundary token of a whole MHTML document.
pub fn resolve_boundary(document: &str) -> Result<&str> {
    let header_end = find_header_end(document).ok_or(MhtmlError::MissingHeaderSeparator)?;
    parse_boundary(&document[..header_end]).ok_or(MhtmlError::MissingBoundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_header_end() {
        let text = "MIME-Version: 1.0\nContent-Type: multipart/related\n\nbody";
        assert_eq!(find_header_end(text), Some(49));
    }

    #[test]
    fn test_find_header_end_crlf() {
        let text = "MIME-Version: 1.0\r\n\r\nbody";
        assert_eq!(find_header_end(text), Some(17));
    }

    #[test]
    fn test_find_header_end_missing() {
        assert_eq!(find_header_end("Subject: x\nFrom: y\n"), None);
    }

    #[test]
    fn test_parse_boundary_folded_header() {
        let headers = "Content-Type: multipart/related;\n\ttype=\"text/html\";\n\tboundary=\"----MultipartBoundary--abc----\"";
        assert_eq!(
            parse_boundary(headers),
            Some("----MultipartBoundary--abc----")
        );
    }

    #[test]
    fn test_parse_boundary_is_case_sensitive() {
        assert_eq!(parse_boundary("Content-Type: multipart/related; Boundary=\"X\""), None);
    }

    #[test]
    fn test_parse_boundary_requires_quotes() {
        assert_eq!(parse_boundary("Content-Type: multipart/related; boundary=XYZ"), None);
    }

    #[test]
    fn test_parse_boundary_skips_empty_value() {
        assert_eq!(parse_boundary("a; boundary=\"\"; boundary=\"B2\""), Some("B2"));
    }

    #[test]
    fn test_resolve_boundary_only_looks_at_top_headers() {
        let doc = "Content-Type: multipart/related\n\nboundary=\"LATE\"\n";
        assert!(matches!(
            resolve_boundary(doc),
            Err(MhtmlError::MissingBoundary)
        ));
    }

    #[test]
    fn test_resolve_boundary_no_separator() {
        let doc = "Content-Type: multipart/related; boundary=\"XYZ\"";
        assert!(matches!(
            resolve_boundary(doc),
            Err(MhtmlError::MissingHeaderSeparator)
        ));
    }
}
