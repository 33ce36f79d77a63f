//! Formats command - list supported invoice formats.

use clap::Args;
use console::style;

use spoolparse_core::{instructions, supported_formats};

/// Arguments for the formats command.
#[derive(Args)]
pub struct FormatsArgs {
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: FormatsArgs) -> anyhow::Result<()> {
    let formats = supported_formats();

    if args.json {
        let value = serde_json::json!({
            "formats": formats,
            "instructions": instructions(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for format in &formats {
        println!("{} {} ({})", style("•").green(), style(&format.vendor).bold(), format.store);
        println!("  {}", format.notes);
    }
    println!();
    println!("{}", instructions());

    Ok(())
}
