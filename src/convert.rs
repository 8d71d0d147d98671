//! Whole-run orchestration: read an archive, decode its parts, inline
//! resources into the primary HTML, and write the result.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{MhtmlError, Result};
use crate::model::conversion::Conversion;
use crate::parser::{boundary, part, split};
use crate::rewrite;

/// The in-memory result of converting one archive.
#[derive(Debug, Clone)]
pub struct Converted {
    /// Final HTML with resources inlined.
    pub html: String,
    /// Number of distinct reference keys that were available for inlining.
    pub resources: usize,
    /// Number of non-empty parts decoded.
    pub parts: usize,
    /// Number of parts whose transfer decoding failed.
    pub decode_fallbacks: usize,
}

/// What [`convert_file`] wrote.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub bytes_written: u64,
    pub resources: usize,
    pub parts: usize,
    pub decode_fallbacks: usize,
}

/// Convert an MHTML document held in memory into self-contained HTML.
///
/// Fails with a structural error if the document has no header separator or
/// no boundary, and with [`MhtmlError::MissingPrimaryHtml`] if no part is `text/html`.
pub fn convert_str(document: &str) -> Result<Converted> {
    let boundary = boundary::resolve_boundary(document)?;
    debug!(boundary, "Resolved multipart boundary");

    let mut state = Conversion::new();
    for raw in split::split_parts(document, boundary) {
        part::decode_part(raw, &mut state);
    }

    let primary = state
        .primary_html
        .take()
        .ok_or(MhtmlError::MissingPrimaryHtml)?;

    Ok(Converted {
        html: rewrite::rewrite_links(&primary, &state.resources),
        resources: state.resources.len(),
        parts: state.parts_seen,
        decode_fallbacks: state.decode_fallbacks,
    })
}

/// Read a document as text, dropping byte sequences that are not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    let data = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MhtmlError::FileNotFound(path.to_path_buf())
        } else {
            MhtmlError::io(path, e)
        }
    })?;
    Ok(decode_lossy(&data))
}

/// UTF-8 decode that skips invalid sequences instead of replacing them.
fn decode_lossy(data: &[u8]) -> String {
    let data = data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data);

    let mut text = String::with_capacity(data.len());
    for chunk in data.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Convert the archive at `input` and write the HTML to `output`, replacing any existing file.
///
/// Nothing is written when the conversion fails.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionSummary> {
    let document = read_document(input)?;
    debug!(path = %input.display(), chars = document.len(), "Read MHTML document");

    let converted = convert_str(&document)?;

    std::fs::write(output, &converted.html).map_err(|e| MhtmlError::io(output, e))?;

    let bytes_written = converted.html.len() as u64;
    info!(
        path = %output.display(),
        size = %humansize::format_size(bytes_written, humansize::BINARY),
        resources = converted.resources,
        "Saved HTML to: {}",
        output.display()
    );

    Ok(ConversionSummary {
        output: output.to_path_buf(),
        bytes_written,
        resources: converted.resources,
        parts: converted.parts,
        decode_fallbacks: converted.decode_fallbacks,
    })
}
