use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_weight_overrides;
use healdette::core::config::{loader, models::PopulationConfig};
use healdette::engine::error::EngineError;
use std::path::Path;
use tracing::{debug, info};

/// Loads the population configuration and applies any `--weight` overrides.
pub fn load_population_config(args: &ConfigArgs) -> Result<PopulationConfig> {
    load_with_overrides(&args.config, &args.weights)
}

pub fn load_with_overrides(path: &Path, weights: &[String]) -> Result<PopulationConfig> {
    info!("Loading population configuration from {:?}", path);
    let config = loader::load(path)?;

    let overrides = parse_weight_overrides(weights)?;
    if overrides.is_empty() {
        return Ok(config);
    }

    debug!(?overrides, "Applying ancestry weight overrides.");
    config
        .with_ancestry_weights(&overrides)
        .map_err(|errors| CliError::Engine(EngineError::from(errors)))
}
