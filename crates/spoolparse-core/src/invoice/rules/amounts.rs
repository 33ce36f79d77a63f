//! Currency amount extraction and line-item price selection.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::CURRENCY_AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Extractor for `€`/`$` tagged amounts, in text order.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in CURRENCY_AMOUNT.captures_iter(text) {
            let Some(full_match) = caps.get(0) else {
                continue;
            };
            let negative = caps.name("sign").is_some() || caps.name("inner_sign").is_some();
            if let Some(amount) = parse_amount(&caps["amount"]) {
                let amount = if negative { -amount } else { amount };
                results.push(
                    ExtractionMatch::new(amount, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Pick the charged price of a line item.
///
/// Invoices list per-item amounts as gross, discounted, tax and net, and a
/// tax-exempt order prints the tax as zero. The net charge is therefore the
/// last non-zero amount. Negative amounts are credits, never the charge.
pub fn select_price(text: &str) -> Option<Decimal> {
    AmountExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .filter(|amount| *amount > Decimal::ZERO)
        .last()
}

/// Parse an amount written with `.` or `,` as decimal separator.
///
/// Handles thousands grouping in either style ("1.234,56", "1,234.56").
/// Prices carry two decimals, so a lone separator followed by exactly three
/// digits ("1,234", "1.234") is grouping.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        // Both present: whichever comes last is the decimal separator
        (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        // Repeated separator can only be grouping
        (Some(_), None) if cleaned.matches(',').count() > 1 => cleaned.replace(',', ""),
        (Some(c), None) if cleaned.len() - c == 4 => cleaned.replace(',', ""),
        (Some(_), None) => cleaned.replace(',', "."),
        (None, Some(d)) if cleaned.matches('.').count() > 1 || cleaned.len() - d == 4 => {
            cleaned.replace('.', "")
        }
        _ => cleaned,
    };

    Decimal::from_str(&normalized).ok()
}
