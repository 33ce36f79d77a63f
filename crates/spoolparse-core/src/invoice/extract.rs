//! Per-segment field extraction and record building.

use rust_decimal::Decimal;

use super::locator::Segment;
use super::rules::{
    article_number, normalize_sku, select_price, weight_or_default, FieldExtractor, Variant,
    VariantExtractor,
};
use crate::error::SkipReason;
use crate::models::filament::ParsedFilament;

/// Extract a filament record from one segment.
///
/// A segment without a variant or without a non-zero price is skipped rather
/// than failing the whole invoice.
pub fn extract(segment: &Segment<'_>) -> Result<ParsedFilament, SkipReason> {
    let variant = VariantExtractor::new()
        .extract(segment.text)
        .ok_or(SkipReason::NoVariant)?
        .value;
    let price = select_price(segment.text).ok_or(SkipReason::NoPrice)?;

    Ok(build_record(segment, variant, price))
}

/// Assemble the record; SKU-derived fields are computed here.
pub fn build_record(segment: &Segment<'_>, variant: Variant, price: Decimal) -> ParsedFilament {
    let sku = normalize_sku(segment.raw_sku);

    ParsedFilament {
        article_number: article_number(&sku).to_string(),
        weight: weight_or_default(&sku),
        material: segment.family.material_name(segment.qualifier),
        color: variant.color,
        variant_code: variant.code,
        price,
        sku,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::rules::MaterialFamily;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn segment<'a>(raw_sku: &'a str, text: &'a str) -> Segment<'a> {
        Segment {
            family: MaterialFamily::Pla,
            qualifier: Some("Matte"),
            raw_sku,
            text,
            span: (0, text.len()),
        }
    }

    #[test]
    fn test_extract_full_record() {
        let seg = segment(
            "A01-Y2-1.75-1000- SPLFREE",
            " €19.99 €15.99 €0.00 €15.99 Variant: Rojo caramelo (20202)",
        );
        let filament = extract(&seg).unwrap();

        assert_eq!(filament.sku, "A01-Y2-1.75-1000-SPLFREE");
        assert_eq!(filament.article_number, "A01-Y2-1.75-1000");
        assert_eq!(filament.material, "PLA MATTE");
        assert_eq!(filament.color, "Rojo caramelo");
        assert_eq!(filament.variant_code, "20202");
        assert_eq!(filament.price, Decimal::from_str("15.99").unwrap());
        assert_eq!(filament.weight, 1000);
    }

    #[test]
    fn test_skip_without_variant() {
        let seg = segment("A00-K0-1.75-1000-SPL", " €21.84 €10.26");
        assert_eq!(extract(&seg), Err(SkipReason::NoVariant));
    }

    #[test]
    fn test_skip_without_price() {
        let seg = segment("A00-K0-1.75-1000-SPL", " Variant: Black (10101) €0.00");
        assert_eq!(extract(&seg), Err(SkipReason::NoPrice));
    }

    #[test]
    fn test_weight_from_sku() {
        let seg = segment("A50-K0-1.75-500-SPL", " Variant: Black (10101) €7.99");
        assert_eq!(extract(&seg).unwrap().weight, 500);
    }
}
