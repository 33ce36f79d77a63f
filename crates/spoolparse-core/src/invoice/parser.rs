//! Filament invoice parser: the full normalize → locate → extract pipeline.

use tracing::{debug, info};

use super::extract::extract;
use super::locator::locate_items_with_lookahead;
use super::normalize::normalize;
use super::rules::normalize_sku;
use super::InvoiceParser;
use crate::models::config::ExtractionConfig;
use crate::models::filament::ParsedFilament;
use crate::models::report::{ParseReport, SkippedItem};

/// Extract every filament line item from invoice text.
///
/// Returns records in invoice order. Text with no recognizable item gives an
/// empty vector, never an error.
pub fn parse_invoice(text: &str) -> Vec<ParsedFilament> {
    FilamentInvoiceParser::new().extract_filaments(text).0
}

/// Parser for vendor invoices listing filament spools.
#[derive(Debug, Clone)]
pub struct FilamentInvoiceParser {
    /// Characters searched after the last marker.
    segment_lookahead: usize,
}

impl FilamentInvoiceParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            segment_lookahead: config.segment_lookahead,
        }
    }

    /// Set the lookahead cap for the last segment.
    pub fn with_segment_lookahead(mut self, lookahead: usize) -> Self {
        self.segment_lookahead = lookahead;
        self
    }

    pub fn segment_lookahead(&self) -> usize {
        self.segment_lookahead
    }

    /// Run the pipeline, keeping skipped items for diagnostics.
    pub fn extract_filaments(&self, text: &str) -> (Vec<ParsedFilament>, Vec<SkippedItem>) {
        let normalized = normalize(text);
        let mut filaments = Vec::new();
        let mut skipped = Vec::new();

        for segment in locate_items_with_lookahead(&normalized, self.segment_lookahead) {
            match extract(&segment) {
                Ok(filament) => {
                    debug!(
                        "Extracted {} ({} / {}) at {}",
                        filament.sku, filament.material, filament.color, filament.price
                    );
                    filaments.push(filament);
                }
                Err(reason) => {
                    let sku = normalize_sku(segment.raw_sku);
                    debug!(
                        "Skipping {} (segment {}..{}): {}",
                        sku, segment.span.0, segment.span.1, reason
                    );
                    skipped.push(SkippedItem { sku, reason });
                }
            }
        }

        (filaments, skipped)
    }
}

impl Default for FilamentInvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for FilamentInvoiceParser {
    fn parse(&self, text: &str) -> ParseReport {
        let stopwatch = Stopwatch::start();
        let (filaments, skipped) = self.extract_filaments(text);
        let processing_time_ms = stopwatch.elapsed_ms();

        info!(
            "Parsed invoice: {} filaments, {} skipped in {}ms",
            filaments.len(),
            skipped.len(),
            processing_time_ms
        );

        ParseReport::new(filaments, skipped, processing_time_ms)
    }
}

/// Wall-clock timer for reports.
///
/// `std::time::Instant` panics on `wasm32-unknown-unknown`, so browser builds
/// report zero.
struct Stopwatch {
    #[cfg(not(target_arch = "wasm32"))]
    started: std::time::Instant,
}

impl Stopwatch {
    fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            started: std::time::Instant::now(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    #[cfg(target_arch = "wasm32")]
    fn elapsed_ms(&self) -> u64 {
        0
    }
}
