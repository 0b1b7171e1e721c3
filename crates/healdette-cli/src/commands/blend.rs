use crate::cli::BlendArgs;
use crate::config::load_population_config;
use crate::error::{CliError, Result};
use healdette::core::config::models::PopulationConfig;
use healdette::engine::blend::{BlendedRanges, PopulationParameterBlender};
use healdette::engine::config::DEFAULT_WEIGHT_TOLERANCE;
use healdette::engine::error::EngineError;
use tracing::warn;

pub fn run(args: BlendArgs) -> Result<()> {
    let config = load_population_config(&args.config)?;
    let blended = blend(&config)?;

    let json = serde_json::to_string_pretty(&blended).map_err(|e| CliError::Output(e.into()))?;
    println!("{json}");
    Ok(())
}

pub fn blend(config: &PopulationConfig) -> Result<BlendedRanges> {
    let blended = PopulationParameterBlender::new(DEFAULT_WEIGHT_TOLERANCE)
        .blend(config)
        .map_err(EngineError::from)?;
    if blended.renormalized {
        warn!(
            "Ancestry weights sum to {:.4}; effective weights were renormalized.",
            blended.total_weight
        );
    }
    Ok(blended)
}
