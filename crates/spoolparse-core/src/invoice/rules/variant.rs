//! Color variant extraction (`Variant: Black (10101)`).

use serde::{Deserialize, Serialize};

use super::patterns::VARIANT;
use super::{ExtractionMatch, FieldExtractor};

/// Color name and numeric variant code of a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub color: String,
    pub code: String,
}

/// Variant field extractor.
pub struct VariantExtractor;

impl VariantExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VariantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VariantExtractor {
    type Output = ExtractionMatch<Variant>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        VARIANT
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let color = caps[1].trim().to_string();
                if color.is_empty() {
                    return None;
                }
                let variant = Variant {
                    color,
                    code: caps[2].to_string(),
                };
                Some(
                    ExtractionMatch::new(variant, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_variant() {
        let extractor = VariantExtractor::new();
        let found = extractor
            .extract("A00-K0-1.75-1000-SPL Variant: Black (10101) stuff €21.84")
            .unwrap();

        assert_eq!(found.value.color, "Black");
        assert_eq!(found.value.code, "10101");
        assert_eq!(found.source, "Variant: Black (10101)");
    }

    #[test]
    fn test_extract_accented_multi_word_variant() {
        let extractor = VariantExtractor::new();
        let found = extractor.extract("€1.00 Variant: Verde Menta Pálido (11501)").unwrap();

        assert_eq!(found.value.color, "Verde Menta Pálido");
        assert_eq!(found.value.code, "11501");
    }

    #[test]
    fn test_missing_code_is_not_a_variant() {
        let extractor = VariantExtractor::new();
        assert!(extractor.extract("Variant: Black").is_none());
        assert!(extractor.extract("Variant: (10101)").is_none());
        assert!(extractor.extract("Black (10101)").is_none());
    }
}
