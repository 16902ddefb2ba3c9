use clap::Args;

use crate::cli::OutputFormat;
use crate::core::types::MatchStrength;
use crate::matching::similarity::similarity_detailed;

#[derive(Args)]
pub struct ScoreArgs {
    /// First item name
    #[arg(required = true)]
    pub a: String,

    /// Second item name
    #[arg(required = true)]
    pub b: String,
}

/// Execute the score subcommand
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScoreArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let sim = similarity_detailed(&args.a, &args.b);
    let strength = MatchStrength::from_score(sim.score);

    match format {
        OutputFormat::Text => {
            println!("{:.3} ({}, {strength})", sim.score, sim.kind);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "a": args.a,
                "b": args.b,
                "score": sim.score,
                "kind": sim.kind,
                "strength": strength,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("a\tb\tscore\tkind");
            println!("{}\t{}\t{:.3}\t{}", args.a, args.b, sim.score, sim.kind);
        }
    }

    Ok(())
}
