//! Text extraction from résumé documents

use log::warn;
use pdf_extract::{ConvertToFmt, MediaBox, OutputDev, OutputError, PlainTextOutput, Transform};
use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::rc::Rc;

/// Pulls embedded text out of a document.
///
/// Implementations never fail: any problem yields an empty string, which
/// callers treat as "could not read document".
pub trait TextExtractor {
    fn extract_from_bytes(&self, bytes: &[u8]) -> String;

    fn extract(&self, path: &Path) -> String {
        match std::fs::read(path) {
            Ok(bytes) => self.extract_from_bytes(&bytes),
            Err(e) => {
                warn!("Failed to read '{}': {}", path.display(), e);
                String::new()
            }
        }
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    /// Text of all pages, in page order
    fn extract_from_bytes(&self, bytes: &[u8]) -> String {
        if bytes.is_empty() {
            warn!("PDF is empty");
            return String::new();
        }

        // pdf-extract panics on some malformed files
        let result = panic::catch_unwind(AssertUnwindSafe(|| extract_pages(bytes)));

        match result {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Failed to extract text from PDF: {}", e);
                String::new()
            }
            Err(_) => {
                warn!("PDF parser panicked while extracting text");
                String::new()
            }
        }
    }
}

/// Text of every page, each page terminated by a newline
fn extract_pages(bytes: &[u8]) -> Result<String, OutputError> {
    let document = lopdf::Document::load_mem(bytes)?;
    let buffer = PageBuffer::default();
    let mut output = PagedTextOutput::new(buffer.clone());
    pdf_extract::output_doc(&document, &mut output)?;
    Ok(buffer.text())
}

/// Text sink shared between the plain text writer and the page break handler
#[derive(Clone, Default)]
struct PageBuffer(Rc<RefCell<String>>);

impl PageBuffer {
    fn push_page_break(&self) {
        self.0.borrow_mut().push('\n');
    }

    fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl fmt::Write for PageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.borrow_mut().push_str(s);
        Ok(())
    }
}

impl ConvertToFmt for PageBuffer {
    type Writer = PageBuffer;

    fn convert(self) -> Self::Writer {
        self
    }
}

/// `PlainTextOutput` never separates pages, so words at the same height on
/// consecutive pages would otherwise be glued together.
struct PagedTextOutput {
    inner: PlainTextOutput<PageBuffer>,
    buffer: PageBuffer,
}

impl PagedTextOutput {
    fn new(buffer: PageBuffer) -> Self {
        Self {
            inner: PlainTextOutput::new(buffer.clone()),
            buffer,
        }
    }
}

impl OutputDev for PagedTextOutput {
    fn begin_page(
        &mut self,
        page_num: u32,
        media_box: &MediaBox,
        art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        self.inner.begin_page(page_num, media_box, art_box)
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        self.inner.end_page()?;
        self.buffer.push_page_break();
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        width: f64,
        spacing: f64,
        font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        self.inner.output_character(trm, width, spacing, font_size, char)
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        self.inner.begin_word()
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        self.inner.end_word()
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        self.inner.end_line()
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_from_bytes(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
