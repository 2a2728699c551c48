//! Document readers that turn files into page records.

use std::path::Path;

use crate::detect::{detect_format_from_bytes, InputFormat};
use crate::error::{Error, Result};
use crate::model::PageRecord;

/// Page separator in plain-text input (form feed, as emitted by `pdftotext`).
pub const PAGE_BREAK: char = '\u{000C}';

/// Produces the pages of one document.
pub trait DocumentReader: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Read all pages of the document at `path`, in page order.
    fn read(&self, path: &Path) -> Result<Vec<PageRecord>>;
}

/// Reads UTF-8 text, splitting pages at form feeds.
///
/// Pages carry no typographic data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextReader;

impl PlainTextReader {
    /// Split text into pages numbered from 1.
    pub fn parse_str(&self, text: &str) -> Vec<PageRecord> {
        text.split(PAGE_BREAK)
            .enumerate()
            .map(|(i, page)| PageRecord::new(i as u32 + 1, page))
            .collect()
    }
}

impl DocumentReader for PlainTextReader {
    fn name(&self) -> &str {
        "text"
    }

    fn read(&self, path: &Path) -> Result<Vec<PageRecord>> {
        let text = std::fs::read_to_string(path)?;
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(&text);
        Ok(self.parse_str(text))
    }
}

/// Reads a JSON array of page records, including font spans and alignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPageReader;

impl JsonPageReader {
    /// Parse a JSON array of page records.
    pub fn parse_str(&self, json: &str) -> Result<Vec<PageRecord>> {
        let pages: Vec<PageRecord> = serde_json::from_str(json)?;
        if let Some(page) = pages.iter().find(|p| p.page_number == 0) {
            return Err(Error::Reader(format!(
                "page numbers start at 1, found {}",
                page.page_number
            )));
        }
        Ok(pages)
    }
}

impl DocumentReader for JsonPageReader {
    fn name(&self) -> &str {
        "json"
    }

    fn read(&self, path: &Path) -> Result<Vec<PageRecord>> {
        let json = std::fs::read_to_string(path)?;
        self.parse_str(json.trim_start_matches('\u{FEFF}'))
    }
}

/// Picks a reader from the detected input format.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoReader {
    text: PlainTextReader,
    json: JsonPageReader,
}

impl AutoReader {
    /// Create an auto-detecting reader.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentReader for AutoReader {
    fn name(&self) -> &str {
        "auto"
    }

    fn read(&self, path: &Path) -> Result<Vec<PageRecord>> {
        let data = std::fs::read(path)?;
        if data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&data[..]).is_empty() {
            // no pages, like an empty page array
            return Ok(Vec::new());
        }
        match detect_format_from_bytes(&data)? {
            InputFormat::PlainText => {
                let text = String::from_utf8(data)
                    .map_err(|e| Error::Reader(format!("{}: {}", path.display(), e)))?;
                Ok(self.text.parse_str(text.trim_start_matches('\u{FEFF}')))
            }
            InputFormat::PageJson => {
                let json = String::from_utf8(data)
                    .map_err(|e| Error::Reader(format!("{}: {}", path.display(), e)))?;
                self.json.parse_str(json.trim_start_matches('\u{FEFF}'))
            }
            format => Err(Error::UnsupportedFormat(format!(
                "{} ({}); convert it to text or page JSON first",
                path.display(),
                format
            ))),
        }
    }
}
