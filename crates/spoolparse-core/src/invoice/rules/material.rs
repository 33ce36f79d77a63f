//! Filament material families recognized on vendor invoices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base material of a filament spool.
///
/// The item-marker pattern is generated from [`MaterialFamily::ALL`], so a new
/// material only needs a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaterialFamily {
    Pla,
    Petg,
    Abs,
    Asa,
    Tpu,
    Pa,
    Pc,
    Pva,
    Paht,
    Pctg,
}

impl MaterialFamily {
    /// Every known family.
    pub const ALL: [MaterialFamily; 10] = [
        Self::Pla,
        Self::Petg,
        Self::Abs,
        Self::Asa,
        Self::Tpu,
        Self::Pa,
        Self::Pc,
        Self::Pva,
        Self::Paht,
        Self::Pctg,
    ];

    /// Keyword as printed on invoices (uppercase).
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Pla => "PLA",
            Self::Petg => "PETG",
            Self::Abs => "ABS",
            Self::Asa => "ASA",
            Self::Tpu => "TPU",
            Self::Pa => "PA",
            Self::Pc => "PC",
            Self::Pva => "PVA",
            Self::Paht => "PAHT",
            Self::Pctg => "PCTG",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Material label: keyword plus the optional uppercased qualifier.
    ///
    /// `PLA` + `Basic` gives `PLA BASIC`; a blank qualifier gives `PLA`.
    pub fn material_name(self, qualifier: Option<&str>) -> String {
        match qualifier.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => format!("{} {}", self.keyword(), q.to_uppercase()),
            None => self.keyword().to_string(),
        }
    }
}

impl fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for MaterialFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s.trim()).ok_or_else(|| format!("unknown material: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_keyword_ignores_case() {
        assert_eq!(MaterialFamily::from_keyword("petg"), Some(MaterialFamily::Petg));
        assert_eq!(MaterialFamily::from_keyword("Paht"), Some(MaterialFamily::Paht));
        assert_eq!(MaterialFamily::from_keyword("PLA+"), None);
    }

    #[test]
    fn test_material_name() {
        assert_eq!(MaterialFamily::Pla.material_name(Some("Basic")), "PLA BASIC");
        assert_eq!(MaterialFamily::Pla.material_name(Some(" Silk+ ")), "PLA SILK+");
        assert_eq!(MaterialFamily::Tpu.material_name(Some("for AMS")), "TPU FOR AMS");
        assert_eq!(MaterialFamily::Petg.material_name(Some("  ")), "PETG");
        assert_eq!(MaterialFamily::Asa.material_name(None), "ASA");
    }

    #[test]
    fn test_serializes_as_keyword() {
        let json = serde_json::to_string(&MaterialFamily::Pctg).unwrap();
        assert_eq!(json, "\"PCTG\"");
        assert_eq!("pva".parse::<MaterialFamily>(), Ok(MaterialFamily::Pva));
    }
}
