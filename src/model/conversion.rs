//! Pipeline state threaded through the part decoder.

use super::resource::ResourceMap;

/// State accumulated while decoding the parts of one archive.
///
/// Created fresh for every conversion run and consumed by the link rewriter.
#[derive(Debug, Default)]
pub struct Conversion {
    /// Decoded text of the first `text/html` part. Set at most once.
    pub primary_html: Option<String>,

    /// Inlineable resources keyed by location and/or `cid:` token.
    pub resources: ResourceMap,

    /// Number of parts that were decoded.
    pub parts_seen: usize,

    /// Number of parts whose transfer decoding failed and fell back to raw text.
    pub decode_fallbacks: usize,
}

impl Conversion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `html` as the primary document if none is set yet.
    ///
    /// Returns `false` (and drops `html`) when a primary document already exists.
    pub fn set_primary_html(&mut self, html: String) -> bool {
        if self.primary_html.is_some() {
            return false;
        }
        self.primary_html = Some(html);
        true
    }

    pub fn has_primary_html(&self) -> bool {
        self.primary_html.is_some()
    }
}
