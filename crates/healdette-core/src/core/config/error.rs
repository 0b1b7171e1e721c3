use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Malformed configuration document: {reason}")]
    MalformedInput { reason: String },

    #[error("Schema violation at '{path}': {message}")]
    SchemaViolation { path: String, message: String },

    #[error("Invalid range at '{path}': min {min} is greater than max {max}")]
    InvalidRange { path: String, min: f64, max: f64 },

    #[error("Invalid binding motif {motif:?} at '{path}': expected two uppercase amino-acid codes")]
    InvalidMotif { path: String, motif: String },

    #[error("Ancestry weight {weight} at '{path}' is outside [0, 1]")]
    WeightOutOfRange { path: String, weight: f64 },
}

impl ConfigError {
    /// The offending field path, when the error is tied to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { .. } => None,
            Self::SchemaViolation { path, .. }
            | Self::InvalidRange { path, .. }
            | Self::InvalidMotif { path, .. }
            | Self::WeightOutOfRange { path, .. } => Some(path),
        }
    }

    pub(crate) fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Every problem found in a configuration document, in the order it was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    pub(crate) fn new(errors: Vec<ConfigError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.0.iter()
    }
}

impl From<ConfigError> for ConfigErrors {
    fn from(error: ConfigError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ConfigErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid configuration '{path}': {errors}")]
    Invalid { path: String, errors: ConfigErrors },
}

impl ConfigLoadError {
    pub fn errors(&self) -> Option<&ConfigErrors> {
        match self {
            Self::Invalid { errors, .. } => Some(errors),
            Self::Io { .. } => None,
        }
    }
}
