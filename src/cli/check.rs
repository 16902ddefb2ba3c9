use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::cli::OutputFormat;
use crate::core::detection::Detection;
use crate::core::item::PackingList;
use crate::core::types::MatchStrength;
use crate::matching::engine::{
    MatchConfig, MatchEngine, MatchReport, DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_SIMILARITY_THRESHOLD,
};
use crate::matching::filter::{drop_generic_labels, top_by_confidence};
use crate::parsing;

#[derive(Args)]
pub struct CheckArgs {
    /// Packing list: plain text (one item per line), a JSON array of names,
    /// or an exported list object. Use '-' for stdin.
    #[arg(required = true)]
    pub list: PathBuf,

    /// Detections file: a vision-API response object or a JSON array.
    /// Use '-' for stdin.
    #[arg(short, long, required = true)]
    pub detections: PathBuf,

    /// Minimum detection confidence (inclusive)
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_THRESHOLD)]
    pub confidence_threshold: f64,

    /// Minimum similarity for accepting a match (strict)
    #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
    pub similarity_threshold: f64,

    /// Consume a detection once matched, so later list items cannot claim it
    #[arg(long)]
    pub exclusive: bool,

    /// Keep generic labels ("plastic", "container", ...) instead of
    /// dropping them before matching
    #[arg(long)]
    pub keep_generic: bool,

    /// Keep only the N highest-confidence detections before matching
    #[arg(long, value_name = "N")]
    pub max_detections: Option<usize>,
}

/// Execute the check subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be read or parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let list = read_list(&args.list)?;
    let mut detections = read_detections(&args.detections)?;

    if verbose {
        eprintln!(
            "Parsed {} list items and {} detections",
            list.items.len(),
            detections.len()
        );
    }

    if !args.keep_generic {
        let before = detections.len();
        detections = drop_generic_labels(&detections);
        if verbose && detections.len() < before {
            eprintln!("Dropped {} generic labels", before - detections.len());
        }
    }

    if let Some(limit) = args.max_detections {
        detections = top_by_confidence(&detections, limit);
    }

    let engine = MatchEngine::with_config(MatchConfig {
        confidence_threshold: args.confidence_threshold,
        similarity_threshold: args.similarity_threshold,
        exclusive: args.exclusive,
    });
    let report = engine.reconcile(&list.item_names(), &detections);

    match format {
        OutputFormat::Text => print_text_report(&report, &list),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn read_list(path: &Path) -> anyhow::Result<PackingList> {
    if path.to_string_lossy() == "-" {
        let content = read_stdin()?;
        return Ok(parsing::parse_list_str(&content)?);
    }
    parsing::parse_list_file(path)
        .with_context(|| format!("failed to read packing list from {}", path.display()))
}

fn read_detections(path: &Path) -> anyhow::Result<Vec<Detection>> {
    if path.to_string_lossy() == "-" {
        let content = read_stdin()?;
        return Ok(parsing::parse_detections_json(&content)?);
    }
    parsing::parse_detections_file(path)
        .with_context(|| format!("failed to read detections from {}", path.display()))
}

fn read_stdin() -> anyhow::Result<String> {
    use std::io::Read;
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_text_report(report: &MatchReport, list: &PackingList) {
    if let Some(title) = &list.title {
        println!("List: {title}");
    }
    if let Some(created) = list.created_at_utc() {
        println!("Created: {}", created.format("%Y-%m-%d %H:%M UTC"));
    }

    let total = report.found.len() + report.missing.len();
    println!("Found {} of {total} items", report.found.len());

    for item in &report.found {
        // Find the detection recording this item; in non-exclusive mode a
        // later item may have overwritten the slot, so fall back gracefully.
        let matched = report
            .detections
            .iter()
            .find(|d| d.matched_item.as_deref() == Some(item.as_str()));

        match matched {
            Some(d) => {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // 0-100
                let pct = (d.similarity * 100.0).round() as u32;
                println!(
                    "  [x] {item}  <-  {} ({}, {pct}%, {})",
                    d.name,
                    d.kind,
                    MatchStrength::from_score(d.similarity)
                );
            }
            None => println!("  [x] {item}"),
        }
    }

    if !report.missing.is_empty() {
        println!("Missing:");
        for item in &report.missing {
            println!("  [ ] {item}");
        }
    }

    let unmatched: Vec<_> = report.detections.iter().filter(|d| !d.in_list).collect();
    if !unmatched.is_empty() {
        println!("Detections not on the list:");
        for d in unmatched {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // 0-100
            let pct = (d.confidence * 100.0).round() as u32;
            println!("  - {} ({pct}%)", d.name);
        }
    }
}

fn print_json_report(report: &MatchReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &MatchReport) {
    println!("item\tstatus\tdetection\tkind\tsimilarity");
    for item in &report.found {
        let matched = report
            .detections
            .iter()
            .find(|d| d.matched_item.as_deref() == Some(item.as_str()));
        match matched {
            Some(d) => println!(
                "{item}\tfound\t{}\t{}\t{:.3}",
                d.name, d.kind, d.similarity
            ),
            None => println!("{item}\tfound\t\t\t"),
        }
    }
    for item in &report.missing {
        println!("{item}\tmissing\t\t\t");
    }
}
