//! Integration tests for the MHTML conversion pipeline.

use std::path::Path;

use mhtml2html::convert::read_document;
use mhtml2html::{convert_file, convert_str, MhtmlError};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn convert_fixture(name: &str) -> mhtml2html::Result<mhtml2html::Converted> {
    let document = read_document(&fixture(name)).unwrap();
    convert_str(&document)
}

// ─── Test 1: cid references are inlined everywhere ──────────────────

#[test]
fn test_cid_reference_inlined() {
    let converted = convert_fixture("cid.mhtml").unwrap();
    assert_eq!(
        converted.html,
        "<html><body><img src=\"data:image/png;base64,iVBORw0KGgo=\">\
         <p>again: data:image/png;base64,iVBORw0KGgo=</p></body></html>"
    );
    assert!(!converted.html.contains("cid:logo"));
    assert_eq!(converted.resources, 1);
}

// ─── Test 2: Chrome-style CRLF archive ──────────────────────────────

#[test]
fn test_chrome_archive() {
    let converted = convert_fixture("chrome.mhtml").unwrap();
    let html = &converted.html;

    assert_eq!(converted.parts, 5);
    assert_eq!(converted.resources, 4);
    assert_eq!(converted.decode_fallbacks, 0);

    assert!(html.starts_with("<!DOCTYPE html><html><head><meta charset=\"utf-8\">"));
    assert!(html.contains("<h1>Café</h1>"));
    assert!(html.contains(
        "href=\"data:text/css;base64,QGNoYXJzZXQgInV0Zi04IjsKCmgxIHsgY29sb3I6IHJlZDsgfQ==\""
    ));
    assert!(html.contains("<img src=\"data:image/png;base64,AAECAw==\">"));
    assert!(!html.contains('\r'));
}

// ─── Test 3: longest key first ──────────────────────────────────────

#[test]
fn test_longer_location_wins_over_prefix() {
    let converted = convert_fixture("chrome.mhtml").unwrap();
    let html = &converted.html;

    assert!(html.contains("<img src=\"data:image/gif;base64,R0lGODlh\">"));
    assert!(html.contains("<img src=\"data:image/png;base64,iVBORw0KGgo=\">"));
    assert!(!html.contains("?v=2"));
}

// ─── Test 4: unknown references untouched ───────────────────────────

#[test]
fn test_unregistered_links_untouched() {
    let converted = convert_fixture("chrome.mhtml").unwrap();
    // The primary part's own location is never registered as a resource.
    assert!(converted
        .html
        .contains("<a href=\"https://example.com/about\">About</a>"));
}

// ─── Test 5: first text/html wins ───────────────────────────────────

#[test]
fn test_first_html_wins_second_is_resource() {
    let converted = convert_fixture("two_html.mhtml").unwrap();
    assert_eq!(
        converted.html,
        "<html><body><iframe src=\"data:text/html;base64,PHA+aW5uZXI8L3A+\"></iframe></body></html>"
    );
}

// ─── Test 6: decode failure degrades gracefully ─────────────────────

#[test]
fn test_bad_base64_falls_back_to_raw_body() {
    let converted = convert_fixture("bad_base64.mhtml").unwrap();
    assert_eq!(converted.decode_fallbacks, 1);
    assert!(converted
        .html
        .contains("<img src=\"data:image/png;base64,bm90KnZhbGlkKmJhc2U2NA==\">"));
}

// ─── Test 7: structural errors ──────────────────────────────────────

#[test]
fn test_missing_boundary_is_structural() {
    let err = convert_fixture("no_boundary.mhtml").unwrap_err();
    assert!(matches!(err, MhtmlError::MissingBoundary));
    assert!(err.is_structural());
}

#[test]
fn test_missing_separator_is_structural() {
    let err = convert_str("Content-Type: multipart/related; boundary=\"B\"").unwrap_err();
    assert!(matches!(err, MhtmlError::MissingHeaderSeparator));
}

#[test]
fn test_missing_primary_html() {
    let err = convert_fixture("no_html.mhtml").unwrap_err();
    assert!(matches!(err, MhtmlError::MissingPrimaryHtml));
}

// ─── Test 8: HTML without references is returned verbatim ───────────

#[test]
fn test_html_without_references_unchanged() {
    let body = "<html>\n<body>\n<p>No resources here.</p>\n</body>\n</html>";
    let doc = format!(
        "MIME-Version: 1.0\nContent-Type: multipart/related; boundary=\"B\"\n\n--B\nContent-Type: text/html\n\n{body}\n--B--\n"
    );
    assert_eq!(convert_str(&doc).unwrap().html, body);
}

// ─── Test 9: later duplicate keys overwrite earlier ones ────────────

#[test]
fn test_duplicate_location_last_write_wins() {
    let doc = "Content-Type: multipart/related; boundary=\"B\"\n\n\
               --B\nContent-Type: text/html\n\n<img src=\"a.png\">\n\
               --B\nContent-Type: image/png\nContent-Location: a.png\n\nold\n\
               --B\nContent-Type: image/gif\nContent-Location: a.png\n\nnew\n\
               --B--\n";
    let converted = convert_str(doc).unwrap();
    assert_eq!(converted.html, "<img src=\"data:image/gif;base64,bmV3\">");
    assert_eq!(converted.resources, 1);
}

// ─── Test 10: file round trip ───────────────────────────────────────

#[test]
fn test_convert_file_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("page.html");
    std::fs::write(&output, "stale content that must be replaced").unwrap();

    let summary = convert_file(&fixture("cid.mhtml"), &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("data:image/png;base64,iVBORw0KGgo="));
    assert!(!written.contains("stale"));
    assert_eq!(summary.bytes_written, written.len() as u64);
    assert_eq!(summary.output, output);
}

#[test]
fn test_convert_file_no_output_on_error() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["no_boundary.mhtml", "no_html.mhtml"] {
        let output = dir.path().join(format!("{name}.html"));
        assert!(convert_file(&fixture(name), &output).is_err());
        assert!(!output.exists(), "{name} must not produce output");
    }
}

#[test]
fn test_convert_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(&dir.path().join("nope.mhtml"), &dir.path().join("out.html"))
        .unwrap_err();
    assert!(matches!(err, MhtmlError::FileNotFound(_)));
}
