//! CLI subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod formats;
pub mod parse;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use spoolparse_core::pdf::{PdfTextExtractor, TextSource};
use spoolparse_core::validation::{validate_text, validate_upload};
use spoolparse_core::{ParseReport, SpoolConfig};

/// Output format for parse results.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// CSV, one row per filament
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Default config file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("spoolparse")
        .join("config.json")
}

/// Load the configuration named on the command line, else the default file,
/// else built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SpoolConfig> {
    if let Some(path) = config_path {
        return Ok(SpoolConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(SpoolConfig::from_file(&default_path)?)
    } else {
        Ok(SpoolConfig::default())
    }
}

/// Whether the path names a PDF upload.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Read invoice text from a text file, a PDF, or stdin (`-`).
///
/// Boundary checks run here: PDF uploads are checked for size, pasted text
/// for length.
pub fn read_invoice_text(input: &Path, config: &SpoolConfig) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        validate_text(&text, &config.limits)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    if is_pdf(input) {
        let data = fs::read(input)?;
        let filename = input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        validate_upload(filename, None, &data, &config.limits)?;

        let text = PdfTextExtractor::new(config.pdf.clone()).extract_text(&data)?;
        debug!("Extracted {} characters from {}", text.len(), input.display());
        Ok(text)
    } else {
        let text = fs::read_to_string(input)?;
        validate_text(&text, &config.limits)?;
        Ok(text)
    }
}

/// Render a report in the requested format.
pub fn format_report(report: &ParseReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

const CSV_HEADER: [&str; 7] = [
    "sku",
    "article_number",
    "material",
    "color",
    "variant_code",
    "price",
    "weight",
];

fn format_csv(report: &ParseReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    for filament in &report.filaments {
        wtr.write_record([
            &filament.sku,
            &filament.article_number,
            &filament.material,
            &filament.color,
            &filament.variant_code,
            &filament.price.to_string(),
            &filament.weight.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ParseReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", report.message));

    for filament in &report.filaments {
        output.push('\n');
        output.push_str(&format!("{} {} ({})\n", filament.material, filament.color, filament.variant_code));
        output.push_str(&format!("  SKU:     {}\n", filament.sku));
        output.push_str(&format!("  Article: {}\n", filament.article_number));
        output.push_str(&format!("  Price:   {:.2}\n", filament.price));
        output.push_str(&format!("  Weight:  {} g\n", filament.weight));
    }

    if !report.skipped.is_empty() {
        output.push_str("\nSkipped:\n");
        for item in &report.skipped {
            output.push_str(&format!("  - {}: {}\n", item.sku, item.reason));
        }
    }

    output
}
