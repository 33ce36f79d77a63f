//! WASM bindings for filament invoice parsing.
//!
//! Lets the inventory web client parse pasted invoice text in the browser.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use spoolparse_core::invoice::rules::article_number as strip_suffix;
use spoolparse_core::models::config::{ExtractionConfig, LimitsConfig};
use spoolparse_core::validation::validate_text;
use spoolparse_core::{FilamentInvoiceParser, InvoiceParser, ParseReport};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn checked_report(parser: &FilamentInvoiceParser, text: &str) -> Result<ParseReport, JsValue> {
    validate_text(text, &LimitsConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(parser.parse(text))
}

/// Parse invoice text into `{ success, filaments, message, ... }`.
///
/// Throws when the text is too short to be an invoice.
#[wasm_bindgen(js_name = parseInvoice)]
pub fn parse_invoice(text: &str) -> Result<JsValue, JsValue> {
    let report = checked_report(&FilamentInvoiceParser::new(), text)?;
    to_js(&report)
}

/// Supported vendor formats and usage instructions.
#[wasm_bindgen(js_name = supportedFormats)]
pub fn supported_formats() -> Result<JsValue, JsValue> {
    #[derive(Serialize)]
    struct Formats {
        formats: Vec<spoolparse_core::SupportedFormat>,
        instructions: &'static str,
    }

    to_js(&Formats {
        formats: spoolparse_core::supported_formats(),
        instructions: spoolparse_core::instructions(),
    })
}

/// Catalog join key for a SKU (suffix removed).
#[wasm_bindgen(js_name = articleNumber)]
pub fn article_number(sku: &str) -> String {
    strip_suffix(sku.trim()).to_string()
}

/// Invoice parser class for browser use.
#[wasm_bindgen(js_name = InvoiceParser)]
pub struct InvoiceParserJs {
    parser: FilamentInvoiceParser,
}

#[wasm_bindgen(js_class = InvoiceParser)]
impl InvoiceParserJs {
    /// Create a parser with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: FilamentInvoiceParser::from_config(&ExtractionConfig::default()),
        }
    }

    /// Set how many characters are searched after the last item.
    #[wasm_bindgen(js_name = setSegmentLookahead)]
    pub fn set_segment_lookahead(&mut self, lookahead: usize) -> Result<(), JsValue> {
        if lookahead == 0 {
            return Err(JsValue::from_str("segment lookahead must be greater than zero"));
        }
        self.parser = self.parser.clone().with_segment_lookahead(lookahead);
        Ok(())
    }

    /// Current lookahead cap, in characters.
    #[wasm_bindgen(getter = segmentLookahead)]
    pub fn segment_lookahead(&self) -> usize {
        self.parser.segment_lookahead()
    }

    /// Parse invoice text.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        let report = checked_report(&self.parser, text)?;
        to_js(&report)
    }
}

impl Default for InvoiceParserJs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_article_number() {
        assert_eq!(article_number("A00-K0-1.75-1000-SPL"), "A00-K0-1.75-1000");
        assert_eq!(article_number("A01-Y2-1.75-1000-SPLFREE "), "A01-Y2-1.75-1000");
    }

    const INVOICE: &str =
        "PLA Basic SKU: A00-K0-1.75-1000-SPL Variant: Black (10101) €21.84 €10.26";

    #[wasm_bindgen_test]
    fn test_parse_invoice() {
        let value = parse_invoice(INVOICE).unwrap();
        let report: ParseReport = serde_wasm_bindgen::from_value(value).unwrap();

        assert!(report.success);
        assert_eq!(report.filaments.len(), 1);
        assert_eq!(report.filaments[0].article_number, "A00-K0-1.75-1000");
        assert_eq!(report.processing_time_ms, 0);
    }

    #[wasm_bindgen_test]
    fn test_parser_class_lookahead() {
        let mut parser = InvoiceParserJs::new();
        assert_eq!(parser.segment_lookahead(), 300);
        assert!(parser.set_segment_lookahead(0).is_err());

        parser.set_segment_lookahead(20).unwrap();
        assert_eq!(parser.segment_lookahead(), 20);

        let report: ParseReport = serde_wasm_bindgen::from_value(parser.parse(INVOICE).unwrap()).unwrap();
        assert!(report.filaments.is_empty());
        assert_eq!(report.skipped.len(), 1);
    }

    #[wasm_bindgen_test]
    fn test_parse_rejects_short_text() {
        assert!(parse_invoice("PLA").is_err());
    }
}
