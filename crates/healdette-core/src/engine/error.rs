use super::blend::BlendError;
use super::config::ParameterError;
use crate::core::config::error::ConfigErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid population configuration: {source}")]
    Config {
        #[from]
        source: ConfigErrors,
    },

    #[error("Invalid engine parameter: {source}")]
    Parameter {
        #[from]
        source: ParameterError,
    },

    #[error("Parameter blending failed: {source}")]
    Blend {
        #[from]
        source: BlendError,
    },
}
