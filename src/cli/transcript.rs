use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::matching::transcript::match_transcript;
use crate::parsing;

#[derive(Args)]
pub struct TranscriptArgs {
    /// Packing list: plain text, a JSON array of names, or an exported
    /// list object (whose packed state is honored)
    #[arg(required = true)]
    pub list: PathBuf,

    /// The spoken transcript. Use '-' to read it from stdin.
    #[arg(required = true)]
    pub text: String,
}

/// Execute the transcript subcommand
///
/// # Errors
///
/// Returns an error if the list cannot be read or parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TranscriptArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let mut list = parsing::parse_list_file(&args.list)
        .with_context(|| format!("failed to read packing list from {}", args.list.display()))?;

    let text = if args.text == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text.clone()
    };

    if verbose {
        eprintln!(
            "Matching transcript ({} chars) against {} items ({} already packed)",
            text.len(),
            list.items.len(),
            list.packed_count()
        );
    }

    let newly_packed = match_transcript(&mut list.items, &text);

    match format {
        OutputFormat::Text => {
            if newly_packed.is_empty() {
                println!("No new items matched.");
            } else {
                println!("Newly packed:");
                for name in &newly_packed {
                    println!("  [x] {name}");
                }
            }
            println!(
                "{} of {} items packed ({}%)",
                list.packed_count(),
                list.items.len(),
                list.progress_percent()
            );
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "newly_packed": newly_packed,
                "packed_count": list.packed_count(),
                "total_items": list.items.len(),
                "progress_percent": list.progress_percent(),
                "items": list.items,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("item\tpacked\tnewly_matched");
            for item in &list.items {
                let newly = newly_packed.iter().any(|n| n == &item.name);
                println!("{}\t{}\t{}", item.name, item.packed, newly);
            }
        }
    }

    Ok(())
}
