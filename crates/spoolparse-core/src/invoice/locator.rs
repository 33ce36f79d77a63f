//! Line-item location: find filament markers and cut per-item segments.

use tracing::{debug, trace};

use super::rules::patterns::{ITEM_MARKER, SKU_LABEL};
use super::rules::MaterialFamily;
use crate::models::config::ExtractionConfig;

/// Text belonging to one filament line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Base material from the marker.
    pub family: MaterialFamily,
    /// Variant words between keyword and `SKU:` label (`Basic`, `Silk+`).
    pub qualifier: Option<&'a str>,
    /// SKU token as matched, possibly containing reflow whitespace.
    pub raw_sku: &'a str,
    /// Text after the marker, up to the next `SKU:` label or the lookahead cap.
    pub text: &'a str,
    /// Byte span of `text` within the located text.
    pub span: (usize, usize),
}

/// Locate items with the default lookahead.
pub fn locate_items(text: &str) -> Vec<Segment<'_>> {
    locate_items_with_lookahead(text, ExtractionConfig::default().segment_lookahead)
}

/// Locate every filament marker and cut its segment.
///
/// A segment ends at the next `SKU:` label of any product, so one item never
/// reads the amounts of the next. The final segment has no such label and is
/// capped at `lookahead` characters instead.
pub fn locate_items_with_lookahead(text: &str, lookahead: usize) -> Vec<Segment<'_>> {
    let segments: Vec<Segment<'_>> = ITEM_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let marker = caps.get(0)?;
            let family = MaterialFamily::from_keyword(caps.name("family")?.as_str())?;
            let sku = caps.name("sku")?;
            let qualifier = caps
                .name("qualifier")
                .map(|m| m.as_str().trim())
                .filter(|q| !q.is_empty());

            // The marker also consumes the whitespace that ends the SKU token
            let start = sku.end();
            let end = match text[start..].find(SKU_LABEL) {
                Some(offset) => start + offset,
                None => cap_at_chars(text, start, lookahead),
            };

            trace!("Marker {:?} at {}..{}, segment {}..{}", sku.as_str(), marker.start(), marker.end(), start, end);

            Some(Segment {
                family,
                qualifier,
                raw_sku: sku.as_str(),
                text: &text[start..end],
                span: (start, end),
            })
        })
        .collect();

    debug!("Located {} filament line items", segments.len());
    segments
}

/// Byte offset `limit` characters after `start`, or the end of `text`.
fn cap_at_chars(text: &str, start: usize, limit: usize) -> usize {
    text[start..]
        .char_indices()
        .nth(limit)
        .map(|(offset, _)| start + offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locates_single_item() {
        let text = "PLA Basic SKU: A00-K0-1.75-1000-SPL Variant: Black (10101) €10.26";
        let segments = locate_items(text);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].family, MaterialFamily::Pla);
        assert_eq!(segments[0].qualifier, Some("Basic"));
        assert_eq!(segments[0].raw_sku, "A00-K0-1.75-1000-SPL");
        assert_eq!(segments[0].text, " Variant: Black (10101) €10.26");
    }

    #[test]
    fn test_segment_ends_at_next_sku_label() {
        let text = "PLA Basic SKU: A00-K0-1.75-1000-SPL Variant: Black (10101) €10.26 \
                    Hotend SKU: FAA010 €30.00";
        let segments = locate_items(text);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, " Variant: Black (10101) €10.26 Hotend ");
        assert!(!segments[0].text.contains("30.00"));
    }

    #[test]
    fn test_back_to_back_items() {
        let text = "PLA Basic SKU: A00-K0-1.75-1000-SPL Variant: Black (10101) €10.26 \
                    PETG HF SKU: G02-W0-1.75-1000-SPLFREE Variant: White (33100) €12.99";
        let segments = locate_items(text);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].raw_sku, "A00-K0-1.75-1000-SPL");
        assert!(segments[0].text.ends_with("PETG HF "));
        assert_eq!(segments[1].family, MaterialFamily::Petg);
        assert_eq!(segments[1].raw_sku, "G02-W0-1.75-1000-SPLFREE");
        assert_eq!(segments[1].text, " Variant: White (33100) €12.99");
    }

    #[test]
    fn test_last_segment_capped_in_characters() {
        let tail = "é".repeat(400);
        let text = format!("PLA SKU: A00-K0-1.75-1000-SPL {}", tail);

        let segments = locate_items_with_lookahead(&text, 300);
        assert_eq!(segments[0].text.chars().count(), 300);

        let segments = locate_items_with_lookahead(&text, 1000);
        assert_eq!(segments[0].text.chars().count(), 401);
    }

    #[test]
    fn test_sku_running_past_suffix_is_not_an_item() {
        assert!(locate_items("PLA Basic SKU: A00-K0-1.75-1000-SPL-EU Variant: Black (10101) €10.26").is_empty());
        assert!(locate_items("PLA Basic SKU: A00-K0-1.75-1000-SPLX Variant: Black (10101) €10.26").is_empty());

        let segments = locate_items("PLA Basic SKU: A00-K0-1.75-1000-SPLFREE");
        assert_eq!(segments[0].raw_sku, "A00-K0-1.75-1000-SPLFREE");
        assert_eq!(segments[0].text, "");
    }

    #[test]
    fn test_no_markers() {
        assert!(locate_items("Thank you for your order. Shipping: €4.99").is_empty());
        assert!(locate_items("").is_empty());
    }
}
