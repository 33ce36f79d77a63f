//! SKU handling: suffix markers, article numbers and spool weight.

use serde::{Deserialize, Serialize};

use super::patterns::WEIGHT_TOKEN;

/// Spool weight used when the SKU carries no weight field.
pub const DEFAULT_WEIGHT_GRAMS: u32 = 1000;

/// Suffix that marks a SKU as a filament product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkuSuffix {
    /// `-SPL`: filament on a spool.
    #[serde(rename = "-SPL")]
    Spool,
    /// `-SPLFREE`: refill without spool.
    #[serde(rename = "-SPLFREE")]
    SpoolFree,
}

impl SkuSuffix {
    /// Every known suffix, longest marker first.
    pub const ALL: [SkuSuffix; 2] = [Self::SpoolFree, Self::Spool];

    /// Marker text without the leading hyphen.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Spool => "SPL",
            Self::SpoolFree => "SPLFREE",
        }
    }

    /// Suffix as it appears at the end of a SKU.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spool => "-SPL",
            Self::SpoolFree => "-SPLFREE",
        }
    }

    /// Suffix the SKU ends with, if any.
    pub fn detect(sku: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|suffix| sku.ends_with(suffix.as_str()))
    }
}

/// Remove whitespace that PDF reflow injected inside a SKU token.
pub fn normalize_sku(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Catalog join key: the SKU without its trailing suffix marker.
pub fn article_number(sku: &str) -> &str {
    SkuSuffix::detect(sku)
        .and_then(|suffix| sku.strip_suffix(suffix.as_str()))
        .unwrap_or(sku)
}

/// Weight in grams from the first 3-4 digit field between two hyphens.
pub fn extract_weight(sku: &str) -> Option<u32> {
    WEIGHT_TOKEN
        .captures(sku)
        .and_then(|caps| caps[1].parse().ok())
}

/// [`extract_weight`] with the 1 kg fallback.
pub fn weight_or_default(sku: &str) -> u32 {
    extract_weight(sku).unwrap_or(DEFAULT_WEIGHT_GRAMS)
}
