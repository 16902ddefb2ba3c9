//! Command-line interface for packmatch.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **check**: Reconcile a detections file against a packing list
//! - **transcript**: Mark list items mentioned in a spoken transcript
//! - **score**: Compute the similarity between two item names
//!
//! ## Usage
//!
//! ```text
//! # Check detected objects against a list
//! packmatch check list.txt --detections objects.json
//!
//! # Pipe a vision response from stdin
//! curl ... | packmatch check list.txt --detections -
//!
//! # JSON output for scripting
//! packmatch check list.txt --detections objects.json --format json
//!
//! # Voice check-off
//! packmatch transcript trip.json "passport and sunscreen are packed"
//!
//! # Inspect one similarity score
//! packmatch score sunglasses glasses
//! ```

use clap::{Parser, Subcommand};

pub mod check;
pub mod score;
pub mod transcript;

#[derive(Parser)]
#[command(name = "packmatch")]
#[command(version)]
#[command(about = "Match camera-detected objects and voice transcripts against packing lists")]
#[command(
    long_about = "packmatch decides which items of a packing list were observed and which are still missing.\n\nIt reconciles object labels from a photo-analysis backend (or a spoken transcript) against the free-text item names of a list, using case-insensitive exact, containment, and word-overlap matching with configurable thresholds."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check detected objects against a packing list
    Check(check::CheckArgs),

    /// Mark list items mentioned in a voice transcript as packed
    Transcript(transcript::TranscriptArgs),

    /// Compute the similarity score between two item names
    Score(score::ScoreArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
