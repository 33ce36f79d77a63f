//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use super::{PdfProcessor, Result, TextSource};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Magic bytes every PDF starts with.
const PDF_HEADER: &[u8] = b"%PDF-";

/// Loaded PDF document.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    try_empty_password: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            try_empty_password: true,
        }
    }

    /// Enable or disable the empty-password attempt on encrypted files.
    pub fn with_empty_password(mut self, enabled: bool) -> Self {
        self.try_empty_password = enabled;
        self
    }

    /// Text of every page, in page order.
    ///
    /// pdf-extract panics on some malformed documents; the panic is turned
    /// into [`PdfError::ExtractionFailed`].
    pub fn extract_pages(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(PdfError::ExtractionFailed("no document loaded".to_string()));
        }

        let data = &self.raw_data;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match result {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(PdfError::ExtractionFailed(e.to_string())),
            Err(_) => Err(PdfError::ExtractionFailed(
                "text extraction panicked (malformed document)".to_string(),
            )),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        if !data.starts_with(PDF_HEADER) {
            return Err(PdfError::UnsupportedFormat("missing %PDF header".to_string()));
        }

        let mut doc =
            Document::load_mem(data).map_err(|e| PdfError::ExtractionFailed(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.try_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data).map_err(|e| {
                PdfError::ExtractionFailed(format!("failed to save decrypted PDF: {}", e))
            })?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        Ok(self.extract_pages()?.join("\n"))
    }
}

/// Default [`TextSource`]: load with lopdf, read text with pdf-extract.
#[derive(Debug, Clone)]
pub struct PdfTextExtractor {
    config: PdfConfig,
}

impl PdfTextExtractor {
    pub fn new(config: PdfConfig) -> Self {
        Self { config }
    }
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new(PdfConfig::default())
    }
}

impl TextSource for PdfTextExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        let mut extractor = PdfExtractor::new().with_empty_password(self.config.try_empty_password);
        extractor.load(data)?;

        let text = PdfProcessor::extract_text(&extractor)?;
        let chars = text.trim().chars().count();
        if chars < self.config.min_text_length {
            // Near-empty text is not an error: the parser will find no items
            warn!(
                "PDF produced only {} characters of text across {} pages",
                chars,
                extractor.page_count()
            );
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = PdfTextExtractor::default()
            .extract_text(b"PLA Basic SKU: A00-K0-1.75-1000-SPL")
            .unwrap_err();
        assert!(matches!(err, PdfError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_pdf_fails_extraction() {
        let err = PdfTextExtractor::default()
            .extract_text(b"%PDF-1.7\nthis is not a real document")
            .unwrap_err();
        assert!(matches!(err, PdfError::ExtractionFailed(_) | PdfError::NoPages));
    }

    #[test]
    fn test_extract_without_document() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_pages(), Err(PdfError::ExtractionFailed(_))));
        assert!(matches!(PdfProcessor::extract_text(&extractor), Err(PdfError::ExtractionFailed(_))));
    }
}
