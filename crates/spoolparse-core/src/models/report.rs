//! Parse report returned to callers.

use serde::{Deserialize, Serialize};

use super::filament::ParsedFilament;
use crate::error::SkipReason;

/// Message used when no filament line item was recognized.
pub const NO_FILAMENTS_MESSAGE: &str =
    "No filaments found in invoice. Make sure it's a Bambu Lab invoice with filament items.";

/// A located line item that produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    /// SKU of the skipped item, whitespace removed.
    pub sku: String,
    /// Why the item was dropped.
    pub reason: SkipReason,
}

/// Outcome of parsing one invoice.
///
/// `success`, `filaments` and `message` form the response envelope consumed
/// by the inventory client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    /// True when at least one filament was extracted.
    pub success: bool,

    /// Extracted filaments in invoice order.
    pub filaments: Vec<ParsedFilament>,

    /// Human readable summary.
    pub message: String,

    /// Line items that were located but dropped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedItem>,

    /// Processing time in milliseconds.
    #[serde(default)]
    pub processing_time_ms: u64,
}

impl ParseReport {
    /// Build a report; the envelope fields follow from `filaments`.
    pub fn new(
        filaments: Vec<ParsedFilament>,
        skipped: Vec<SkippedItem>,
        processing_time_ms: u64,
    ) -> Self {
        let success = !filaments.is_empty();
        let message = if success {
            format!("Found {} filament(s)", filaments.len())
        } else {
            NO_FILAMENTS_MESSAGE.to_string()
        };

        Self {
            success,
            filaments,
            message,
            skipped,
            processing_time_ms,
        }
    }
}
