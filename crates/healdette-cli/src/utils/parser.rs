use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Invalid weight override '{0}'. Expected 'NAME=WEIGHT' (e.g., 'finnish=0.4').")]
    InvalidWeightFormat(String),

    #[error("Population name cannot be empty in weight override '{0}'.")]
    EmptyPopulationName(String),

    #[error("Weight '{value}' for population '{name}' is not a number.")]
    InvalidWeightValue { name: String, value: String },

    #[error("Population '{0}' is overridden more than once.")]
    DuplicateOverride(String),
}

pub fn parse_weight_override(raw: &str) -> Result<(String, f64), ParseError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidWeightFormat(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ParseError::EmptyPopulationName(raw.to_string()));
    }
    let value = value.trim();
    let weight = value
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidWeightValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
    Ok((name.to_string(), weight))
}

pub fn parse_weight_overrides(raw: &[String]) -> Result<BTreeMap<String, f64>, ParseError> {
    let mut overrides = BTreeMap::new();
    for entry in raw {
        let (name, weight) = parse_weight_override(entry)?;
        if overrides.insert(name.clone(), weight).is_some() {
            return Err(ParseError::DuplicateOverride(name));
        }
    }
    Ok(overrides)
}
