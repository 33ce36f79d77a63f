//! Core library for filament invoice parsing.
//!
//! This crate provides:
//! - Invoice text normalization (PDF reflow repair)
//! - Filament line-item location and per-item field extraction
//! - Boundary validation for pasted text and PDF uploads
//! - PDF text extraction (behind the `pdf` feature)

pub mod error;
pub mod formats;
pub mod invoice;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod validation;

pub use error::{InputError, PdfError, Result, SkipReason, SpoolError};
pub use formats::{instructions, supported_formats, SupportedFormat};
pub use invoice::{
    extract, locate_items, normalize, parse_invoice, FilamentInvoiceParser, InvoiceParser,
    Segment,
};
pub use invoice::rules::{MaterialFamily, SkuSuffix};
pub use models::config::SpoolConfig;
pub use models::filament::ParsedFilament;
pub use models::report::{ParseReport, SkippedItem};
#[cfg(feature = "pdf")]
pub use pdf::{extract_text, PdfProcessor, PdfTextExtractor, TextSource};
