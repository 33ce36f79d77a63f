//! PDF text extraction.

mod extractor;

pub use extractor::{PdfExtractor, PdfTextExtractor};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF document access.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF, pages joined by a newline.
    fn extract_text(&self) -> Result<String>;
}

/// Capability that turns uploaded bytes into invoice text.
pub trait TextSource {
    /// Extract the text of every page in order.
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}

/// Extract text from PDF bytes with default settings.
pub fn extract_text(data: &[u8]) -> Result<String> {
    PdfTextExtractor::default().extract_text(data)
}
