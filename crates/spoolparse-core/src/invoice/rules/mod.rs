//! Rule-based field extractors for filament invoices.

pub mod amounts;
pub mod material;
pub mod patterns;
pub mod sku;
pub mod variant;

pub use amounts::{parse_amount, select_price, AmountExtractor};
pub use material::MaterialFamily;
pub use patterns::*;
pub use sku::{article_number, extract_weight, normalize_sku, weight_or_default, SkuSuffix, DEFAULT_WEIGHT_GRAMS};
pub use variant::{Variant, VariantExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in text together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
