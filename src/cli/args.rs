//! Command line argument parsing for the distractor CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Distractor - picks wrong-answer options for fill-in-the-blank exercises
#[derive(Parser, Debug, Clone)]
#[command(name = "distractor")]
#[command(about = "Select distinct distractor words from ranked model candidates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DistractorArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "DISTRACTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DistractorArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Select distractors from ranked candidates
    Select(SelectArgs),

    /// Run many selection requests from a JSONL file
    Batch(BatchArgs),

    /// Build a multiple-choice exercise from a masked sentence
    Exercise(ExerciseArgs),

    /// Show the stems of words
    Stem(StemArgs),

    /// Compare two words with the similarity policy
    Similarity(SimilarityArgs),
}

/// Arguments for selecting distractors
#[derive(Parser, Debug, Clone)]
pub struct SelectArgs {
    /// The correct answer of the exercise
    #[arg(long, value_name = "WORD")]
    pub correct: String,

    /// Ranked candidates, best first
    #[arg(value_name = "CANDIDATE")]
    pub candidates: Vec<String>,

    /// JSON file with ranked candidates (words or predictions)
    #[arg(long, value_name = "FILE")]
    pub candidates_file: Option<PathBuf>,
}

/// Arguments for batch selection
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSONL file; each line is {"candidates": [...], "correct": "..."}
    #[arg(value_name = "REQUESTS_FILE")]
    pub requests_file: PathBuf,
}

/// Arguments for building an exercise
#[derive(Parser, Debug, Clone)]
pub struct ExerciseArgs {
    /// Sentence with a <mask> marker at the blank
    #[arg(long, value_name = "TEXT")]
    pub sentence: String,

    /// The correct answer of the exercise
    #[arg(long, value_name = "WORD")]
    pub correct: String,

    /// JSON file with ranked candidates (words or predictions)
    #[arg(long, value_name = "FILE")]
    pub candidates_file: PathBuf,

    /// Seed for shuffling the options
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for stemming
#[derive(Parser, Debug, Clone)]
pub struct StemArgs {
    /// Words to stem
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Arguments for comparing two words
#[derive(Parser, Debug, Clone)]
pub struct SimilarityArgs {
    /// First word
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Second word
    #[arg(value_name = "RIGHT")]
    pub right: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
