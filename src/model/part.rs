//! Per-part MIME headers relevant to decoding.

use std::fmt;

/// Content type assumed when a part has no `Content-Type` header.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content-Transfer-Encoding of a part body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TransferEncoding {
    #[default]
    SevenBit,
    EightBit,
    Binary,
    Base64,
    QuotedPrintable,
    /// Unrecognized token (lowercased). Treated as raw content.
    Other(String),
}

impl TransferEncoding {
    /// Parse a header value. Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(value: &str) -> Self {
        let token = value.trim().to_ascii_lowercase();
        match token.as_str() {
            "7bit" => Self::SevenBit,
            "8bit" => Self::EightBit,
            "binary" => Self::Binary,
            "base64" => Self::Base64,
            "quoted-printable" => Self::QuotedPrintable,
            _ => Self::Other(token),
        }
    }

    /// The canonical header token.
    pub fn as_str(&self) -> &str {
        match self {
            Self::SevenBit => "7bit",
            Self::EightBit => "8bit",
            Self::Binary => "binary",
            Self::Base64 => "base64",
            Self::QuotedPrintable => "quoted-printable",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for TransferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four headers that drive part decoding. Every other header is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartHeaders {
    /// Media type without parameters (e.g. `"image/png"`).
    pub content_type: String,

    /// Body transfer encoding.
    pub transfer_encoding: TransferEncoding,

    /// Original URL of the resource, from `Content-Location`.
    pub location: Option<String>,

    /// Bare identifier from `Content-ID`, without angle brackets.
    pub content_id: Option<String>,
}

impl Default for PartHeaders {
    fn default() -> Self {
        Self {
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            transfer_encoding: TransferEncoding::default(),
            location: None,
            content_id: None,
        }
    }
}

impl PartHeaders {
    /// `true` if the content type is `text/html` (prefix match, case-insensitive).
    pub fn is_html(&self) -> bool {
        self.content_type
            .get(..9)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("text/html"))
    }

    /// The `cid:` reference key for this part, if it has a Content-ID.
    pub fn cid_key(&self) -> Option<String> {
        self.content_id.as_ref().map(|id| format!("cid:{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transfer_encoding() {
        assert_eq!(TransferEncoding::parse("BASE64 "), TransferEncoding::Base64);
        assert_eq!(
            TransferEncoding::parse(" Quoted-Printable"),
            TransferEncoding::QuotedPrintable
        );
        assert_eq!(TransferEncoding::parse("8bit"), TransferEncoding::EightBit);
        assert_eq!(
            TransferEncoding::parse("x-uuencode"),
            TransferEncoding::Other("x-uuencode".to_string())
        );
    }

    #[test]
    fn test_default_headers() {
        let headers = PartHeaders::default();
        assert_eq!(headers.content_type, "application/octet-stream");
        assert_eq!(headers.transfer_encoding, TransferEncoding::SevenBit);
        assert!(headers.cid_key().is_none());
    }

    #[test]
    fn test_is_html_prefix() {
        let mut headers = PartHeaders::default();
        headers.content_type = "text/html".to_string();
        assert!(headers.is_html());
        headers.content_type = "TEXT/HTML".to_string();
        assert!(headers.is_html());
        headers.content_type = "text/htm".to_string();
        assert!(!headers.is_html());
        headers.content_type = "text/plain".to_string();
        assert!(!headers.is_html());
    }

    #[test]
    fn test_cid_key() {
        let headers = PartHeaders {
            content_id: Some("abc123".to_string()),
            ..PartHeaders::default()
        };
        assert_eq!(headers.cid_key().as_deref(), Some("cid:abc123"));
    }
}
