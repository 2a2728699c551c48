//! Input format detection.

use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Recognized input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// UTF-8 text; form feeds separate pages
    PlainText,
    /// JSON array of page records
    PageJson,
    /// PDF binary (recognized, not readable by this crate)
    Pdf,
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputFormat::PlainText => "plain text",
            InputFormat::PageJson => "page JSON",
            InputFormat::Pdf => "PDF",
        };
        f.write_str(name)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SNIFF_LEN: usize = 512;

/// Detect the input format of a file from its leading bytes.
///
/// # Example
/// ```no_run
/// use docsect::detect::{detect_format_from_path, InputFormat};
///
/// let format = detect_format_from_path("pages.json").unwrap();
/// assert_eq!(format, InputFormat::PageJson);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    BufReader::new(file)
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the input format from leading bytes.
///
/// # Returns
/// * `Err(Error::UnknownFormat)` for empty or binary data
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    if data.is_empty() {
        return Err(Error::UnknownFormat);
    }

    if data.starts_with(PDF_MAGIC) {
        return Ok(InputFormat::Pdf);
    }

    if looks_binary(data) {
        return Err(Error::UnknownFormat);
    }

    let first = data.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'[') {
        return Ok(InputFormat::PageJson);
    }

    Ok(InputFormat::PlainText)
}

/// NUL bytes or invalid UTF-8 (ignoring a sequence cut at the end).
fn looks_binary(data: &[u8]) -> bool {
    if data.contains(&0) {
        return true;
    }
    match std::str::from_utf8(data) {
        Ok(_) => false,
        Err(e) => e.error_len().is_some(),
    }
}
