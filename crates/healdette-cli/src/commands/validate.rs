use crate::cli::ValidateArgs;
use crate::config::load_population_config;
use crate::error::{CliError, Result};
use crate::input::{self, Candidate};
use crate::output::write_results;
use crate::utils::progress::CliProgressHandler;
use healdette::core::config::models::PopulationConfig;
use healdette::engine::config::{BatchConfig, BatchConfigBuilder, ScoringConfig};
use healdette::engine::error::EngineError;
use healdette::engine::progress::ProgressReporter;
use healdette::engine::result::ValidationResult;
use healdette::workflows::batch::validate_batch;
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: ValidateArgs, threads: Option<usize>, show_progress: bool) -> Result<()> {
    let config = load_population_config(&args.config)?;

    let mut candidates = match &args.source.input {
        Some(path) => {
            info!("Reading candidate sequences from {:?}", path);
            input::read_candidates(path)?
        }
        None => input::from_arguments(&args.source.sequences),
    };
    if let Some(count) = args.count {
        candidates.truncate(count);
    }
    if candidates.is_empty() {
        warn!("No candidate sequences to validate.");
    }

    let mut builder = BatchConfigBuilder::new().scoring(ScoringConfig::default());
    if let Some(workers) = threads {
        builder = builder.workers(workers);
    }
    let batch = builder.build().map_err(EngineError::from)?;
    info!(
        "Validating {} candidate(s) on {} worker(s).",
        candidates.len(),
        batch.workers
    );

    let results = if show_progress {
        let progress_handler = CliProgressHandler::new();
        let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
        validate_candidates(&candidates, &config, &batch, &reporter)?
    } else {
        validate_candidates(&candidates, &config, &batch, &ProgressReporter::new())?
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path)?;
            write_results(BufWriter::new(file), &candidates, &results, args.format)?;
            info!("Results written to {:?}", path);
        }
        None => write_results(io::stdout().lock(), &candidates, &results, args.format)?,
    }

    let accepted = results.iter().filter(|r| r.valid).count();
    eprintln!(
        "Validated {} sequence(s): {} accepted, {} rejected.",
        results.len(),
        accepted,
        results.len() - accepted
    );
    Ok(())
}

fn validate_candidates(
    candidates: &[Candidate],
    config: &PopulationConfig,
    batch: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<ValidationResult>> {
    let sequences: Vec<&str> = candidates.iter().map(|c| c.sequence.as_str()).collect();
    validate_batch(&sequences, config, batch, reporter).map_err(CliError::from)
}
