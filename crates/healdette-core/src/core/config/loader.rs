use super::error::{ConfigError, ConfigErrors, ConfigLoadError};
use super::models::PopulationConfig;
use super::validator::ConfigValidator;
use serde_json::Value;
use std::path::Path;
use tracing::{info, instrument};

/// Document formats a population configuration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

/// Parses `content` into an untyped document without validating its schema.
pub fn parse_document(content: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| ConfigError::MalformedInput {
            reason: e.to_string(),
        }),
        ConfigFormat::Toml => {
            let table: toml::Value =
                toml::from_str(content).map_err(|e| ConfigError::MalformedInput {
                    reason: e.to_string(),
                })?;
            serde_json::to_value(table).map_err(|e| ConfigError::MalformedInput {
                reason: e.to_string(),
            })
        }
    }
}

pub fn from_str(content: &str, format: ConfigFormat) -> Result<PopulationConfig, ConfigErrors> {
    let document = parse_document(content, format)?;
    ConfigValidator::default().validate(&document)
}

/// Reads the file once and validates it, returning an immutable configuration.
#[instrument(skip_all, name = "config_load", fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<PopulationConfig, ConfigLoadError> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy().to_string();

    let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
        path: path_str.clone(),
        source: e,
    })?;

    let config = from_str(&content, ConfigFormat::from_path(path)).map_err(|errors| {
        ConfigLoadError::Invalid {
            path: path_str.clone(),
            errors,
        }
    })?;

    info!(
        populations = config.populations().len(),
        total_weight = config.total_weight(),
        "Loaded population configuration."
    );
    Ok(config)
}
