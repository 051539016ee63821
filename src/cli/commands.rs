//! Command implementations for the distractor CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DistractorConfig;
use crate::error::{DistractorError, Result};
use crate::prediction::{DistractorService, StaticCandidateSource, load_candidates};
use crate::selection::{
    DistractorSelector, ExerciseBuilder, SelectionOutcome, SelectionRequest, SimilarityPolicy,
    select_batch,
};

/// Execute a CLI command.
pub fn execute_command(args: DistractorArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Select(select_args) => select(select_args, &config, &args),
        Command::Batch(batch_args) => batch(batch_args, &config, &args),
        Command::Exercise(exercise_args) => exercise(exercise_args, &config, &args),
        Command::Stem(stem_args) => stem(stem_args, &config, &args),
        Command::Similarity(similarity_args) => similarity(similarity_args, &config, &args),
    }
}

/// Load the configuration file, or fall back to defaults.
fn load_config(args: &DistractorArgs) -> Result<DistractorConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            DistractorConfig::from_file(path)
        }
        None => Ok(DistractorConfig::default()),
    }
}

/// Select distractors from candidates given inline and/or in a file.
fn select(args: &SelectArgs, config: &DistractorConfig, cli_args: &DistractorArgs) -> Result<()> {
    let mut candidates = args.candidates.clone();
    if let Some(path) = &args.candidates_file {
        let entries = load_candidates(path)?;
        info!("Loaded {} candidates from {}", entries.len(), path.display());
        candidates.extend(entries.iter().map(|entry| entry.token().to_string()));
    }

    let selector = DistractorSelector::from_config(&config.selector)?;
    let distractors = selector.select(&candidates, &args.correct)?;

    output_result(
        "Selected distractors",
        &SelectionResult {
            correct: args.correct.clone(),
            distractors: distractors.into_words(),
        },
        cli_args,
    )
}

/// Run every request of a JSONL file and print one outcome per line.
fn batch(args: &BatchArgs, config: &DistractorConfig, cli_args: &DistractorArgs) -> Result<()> {
    let start_time = Instant::now();
    let file = File::open(&args.requests_file)?;
    let reader = BufReader::new(file);

    let mut entries: Vec<std::result::Result<SelectionRequest, String>> = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SelectionRequest>(&line) {
            Ok(request) => entries.push(Ok(request)),
            Err(e) => {
                warn!("Error parsing request on line {}: {}", line_num + 1, e);
                entries.push(Err(format!("Invalid request on line {}: {}", line_num + 1, e)));
            }
        }
    }

    let requests: Vec<SelectionRequest> = entries
        .iter()
        .filter_map(|entry| entry.as_ref().ok().cloned())
        .collect();
    let selector = DistractorSelector::from_config(&config.selector)?;
    let mut selected = select_batch(&selector, &requests).into_iter();

    for (i, entry) in entries.iter().enumerate() {
        let outcome = match entry {
            Ok(_) => selected.next().unwrap_or(SelectionOutcome {
                words: None,
                error: Some("missing outcome".to_string()),
            }),
            Err(message) => SelectionOutcome {
                words: None,
                error: Some(message.clone()),
            },
        };
        output_result(&format!("Request {}", i + 1), &outcome, cli_args)?;
    }

    info!(
        "Processed {} requests in {} ms",
        entries.len(),
        start_time.elapsed().as_millis()
    );
    Ok(())
}

/// Build a multiple-choice exercise from a masked sentence.
fn exercise(
    args: &ExerciseArgs,
    config: &DistractorConfig,
    cli_args: &DistractorArgs,
) -> Result<()> {
    let source = StaticCandidateSource::from_file(&args.candidates_file)
        .map_err(|e| DistractorError::invalid_argument(format!("{e:#}")))?;
    let service = DistractorService::with_config(source, config)?;

    let mut builder = ExerciseBuilder::new();
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }

    let exercise = service.generate_exercise(&args.sentence, &args.correct, &builder)?;
    output_result("Exercise", &exercise, cli_args)
}

/// Show the stem of each word.
fn stem(args: &StemArgs, config: &DistractorConfig, cli_args: &DistractorArgs) -> Result<()> {
    let policy = SimilarityPolicy::from_config(&config.selector);
    let stems: Vec<StemResult> = args
        .words
        .iter()
        .map(|word| {
            let word = word.trim().to_lowercase();
            let stem = policy.stem(&word);
            StemResult { word, stem }
        })
        .collect();

    output_result("Stems", &stems, cli_args)
}

/// Compare two words and report stems, ratio and verdict.
fn similarity(
    args: &SimilarityArgs,
    config: &DistractorConfig,
    cli_args: &DistractorArgs,
) -> Result<()> {
    let policy = SimilarityPolicy::from_config(&config.selector);
    let report = policy.compare(
        &args.left.trim().to_lowercase(),
        &args.right.trim().to_lowercase(),
    );

    let message = if report.is_similar() {
        "Similar"
    } else {
        "Distinct"
    };
    output_result(message, &report, cli_args)
}
