//! Data models for parsed filaments, parse reports and configuration.

pub mod config;
pub mod filament;
pub mod report;

pub use config::{ExtractionConfig, LimitsConfig, PdfConfig, SpoolConfig};
pub use filament::ParsedFilament;
pub use report::{ParseReport, SkippedItem};
