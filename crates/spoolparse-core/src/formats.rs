//! Supported invoice formats.

use serde::{Deserialize, Serialize};

/// An invoice layout the parser understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFormat {
    pub vendor: String,
    pub store: String,
    pub notes: String,
}

/// Formats recognized by [`crate::parse_invoice`].
pub fn supported_formats() -> Vec<SupportedFormat> {
    vec![SupportedFormat {
        vendor: "Bambu Lab".to_string(),
        store: "store.bambulab.com".to_string(),
        notes: "Copy invoice text or upload PDF".to_string(),
    }]
}

/// Usage instructions shown next to the format list.
pub fn instructions() -> &'static str {
    "Paste the invoice text in the parser. The system will extract filament SKUs and prices automatically."
}
