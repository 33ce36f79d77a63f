//! Filament line-item extraction.
//!
//! Pipeline: [`normalize`] → [`locate_items`] → [`extract`] per segment.

mod extract;
mod locator;
mod normalize;
mod parser;
pub mod rules;

pub use extract::{build_record, extract};
pub use locator::{locate_items, locate_items_with_lookahead, Segment};
pub use normalize::normalize;
pub use parser::{parse_invoice, FilamentInvoiceParser};

use crate::models::report::ParseReport;

/// Trait for invoice parsers.
pub trait InvoiceParser {
    /// Parse invoice text into a report. Never fails: unrecognized text gives
    /// an empty report.
    fn parse(&self, text: &str) -> ParseReport;
}
