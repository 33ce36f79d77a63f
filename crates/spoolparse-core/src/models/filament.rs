//! Filament purchase record extracted from an invoice line item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One filament line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilament {
    /// Vendor stock identifier, including its filament suffix.
    pub sku: String,

    /// SKU without the suffix; the catalog join key.
    pub article_number: String,

    /// Uppercase material label, e.g. `PLA BASIC`.
    pub material: String,

    /// Color name as printed on the invoice.
    pub color: String,

    /// Numeric color variant code.
    pub variant_code: String,

    /// Final charged amount for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Spool weight in grams.
    pub weight: u32,
}
