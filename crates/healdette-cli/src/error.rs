use crate::utils::parser::ParseError;
use healdette::core::config::error::ConfigLoadError;
use healdette::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    ConfigLoad(#[from] ConfigLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read sequences from '{path}': {source}", path = path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write results: {0}")]
    Output(#[source] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(#[from] ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Configuration failures abort before any sequence is processed.
    pub fn is_config_failure(&self) -> bool {
        matches!(
            self,
            Self::ConfigLoad(_)
                | Self::Config(_)
                | Self::Engine(EngineError::Config { .. })
                | Self::Engine(EngineError::Blend { .. })
        )
    }
}
