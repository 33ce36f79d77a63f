//! Error types for the spoolparse-core library.

use thiserror::Error;

/// Main error type for the spoolparse library.
#[derive(Error, Debug)]
pub enum SpoolError {
    /// PDF text extraction error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Caller input rejected before parsing.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning PDF bytes into text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The payload is not a PDF, or PDF support is unavailable.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PDF is malformed or its text could not be read.
    #[error("failed to extract text: {0}")]
    ExtractionFailed(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Caller-side precondition failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Pasted text is too short to hold a line item.
    #[error("invoice text is too short ({len} characters, minimum {min})")]
    TextTooShort { len: usize, min: usize },

    /// Uploaded file is smaller than any real invoice.
    #[error("file is too small ({size} bytes, minimum {min})")]
    PayloadTooSmall { size: usize, min: usize },

    /// Uploaded file exceeds the size limit.
    #[error("file is too large ({size} bytes, maximum {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// Uploaded file is not declared as a PDF.
    #[error("only PDF files are supported: {0}")]
    NotPdf(String),
}

/// Why a located line item produced no record.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No `Variant: <name> (<code>)` inside the segment.
    #[error("no variant")]
    NoVariant,

    /// No non-zero currency amount inside the segment.
    #[error("no price")]
    NoPrice,
}

/// Result type for the spoolparse library.
pub type Result<T> = std::result::Result<T, SpoolError>;
