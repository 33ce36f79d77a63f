//! Parse command - extract filaments from a single invoice.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use spoolparse_core::{FilamentInvoiceParser, InvoiceParser};

use super::{format_report, load_config, read_invoice_text, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (.pdf or text), or "-" to read text from stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override the lookahead cap for the last line item
    #[arg(long)]
    lookahead: Option<usize>,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(lookahead) = args.lookahead {
        config.extraction.segment_lookahead = lookahead;
        config.validate()?;
    }

    info!("Processing input: {}", args.input.display());

    let input = args.input.clone();
    let read_config = config.clone();
    let text = tokio::task::spawn_blocking(move || read_invoice_text(&input, &read_config)).await??;

    let parser = FilamentInvoiceParser::from_config(&config.extraction);
    let report = parser.parse(&text);

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !report.success {
        eprintln!("{} {}", style("ℹ").blue(), report.message);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
