//! `mhtml2html` — turn an MHTML web archive into one self-contained HTML file.
//!
//! The pipeline resolves the multipart boundary, splits the archive into
//! parts, decodes each part, and rewrites references in the primary HTML
//! document to inline `data:` URIs.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod parser;
pub mod rewrite;

pub use convert::{convert_file, convert_str, ConversionSummary, Converted};
pub use error::{MhtmlError, Result};
