//! Common regex patterns for filament invoice extraction.

use std::cmp::Reverse;

use lazy_static::lazy_static;
use regex::Regex;

use super::material::MaterialFamily;
use super::sku::SkuSuffix;

/// Label that introduces every product SKU, filament or not.
pub const SKU_LABEL: &str = "SKU:";

lazy_static! {
    // Filament line-item marker: material keyword, up to three qualifier
    // words, the SKU label and a SKU ending in a filament suffix.
    pub static ref ITEM_MARKER: Regex = Regex::new(&item_marker_pattern()).unwrap();

    // Variant name (letters and spaces) followed by a parenthesized code
    pub static ref VARIANT: Regex = Regex::new(
        r"Variant:\s*(\p{L}[\p{L} ]*?)\s*\((\d+)\)"
    ).unwrap();

    // Currency-tagged amount (€10.26, $ 1,234.56, -€3.00, €-3.00)
    pub static ref CURRENCY_AMOUNT: Regex = Regex::new(
        r"(?P<sign>-)?[€$]\s?(?P<inner_sign>-)?(?P<amount>\d(?:[\d.,]*\d)?)"
    ).unwrap();

    // Weight field of the SKU grammar (-1000-)
    pub static ref WEIGHT_TOKEN: Regex = Regex::new(
        r"-(\d{3,4})-"
    ).unwrap();
}

/// Build the item-marker pattern from the material and suffix enumerations.
///
/// Keywords are tried longest first so `PAHT` is never read as `PA`. A hyphen
/// between keyword and qualifier (`PLA-CF`) is accepted and dropped. The SKU
/// tolerates one space on either side of the suffix hyphen and must end at
/// whitespace or the end of text, so `-SPL-EU` is not read as `-SPL`.
pub fn item_marker_pattern() -> String {
    let mut keywords: Vec<&str> = MaterialFamily::ALL.iter().map(|f| f.keyword()).collect();
    keywords.sort_by_key(|k| Reverse(k.len()));

    let suffixes: Vec<&str> = SkuSuffix::ALL.iter().map(|s| s.marker()).collect();

    format!(
        r"(?i:\b(?P<family>{keywords})\b)(?:\s*-)?\s*(?P<qualifier>{word}(?:\s+{word}){{0,2}})?\s*{label}\s*(?P<sku>[A-Z0-9.\-]*[A-Z0-9.]\s?-\s?(?:{suffixes}))(?:\s|$)",
        keywords = keywords.join("|"),
        word = r"[\p{L}\p{N}+][\p{L}\p{N}+\-]*",
        label = regex::escape(SKU_LABEL),
        suffixes = suffixes.join("|"),
    )
}
