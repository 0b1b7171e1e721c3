use super::error::{ConfigError, ConfigErrors};
use super::models::{
    BiophysicalParams, GlobalParams, HlaFrequencies, LengthRange, Population, PopulationConfig,
    StructuralParams, ValueRange,
};
use crate::core::models::residue::AminoAcid;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

pub const MAX_NESTING_DEPTH: usize = 10;
pub const MAX_POPULATIONS: usize = 64;

const ROOT_PATH: &str = "$";

/// Outcome of a non-consuming configuration check.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigReport {
    pub valid: bool,
    pub errors: Vec<ConfigError>,
}

/// Turns an untyped configuration document into a [`PopulationConfig`].
///
/// The validator walks the whole document and records every violation it finds with the
/// dotted path of the offending field, instead of stopping at the first one.
#[derive(Debug, Clone, Copy)]
pub struct ConfigValidator {
    max_depth: usize,
    max_populations: usize,
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            max_populations: MAX_POPULATIONS,
        }
    }
}

impl ConfigValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_depth: usize, max_populations: usize) -> Self {
        Self {
            max_depth,
            max_populations,
        }
    }

    pub fn validate_str(&self, json: &str) -> Result<PopulationConfig, ConfigErrors> {
        let document: Value = serde_json::from_str(json).map_err(|e| ConfigError::MalformedInput {
            reason: e.to_string(),
        })?;
        self.validate(&document)
    }

    pub fn validate(&self, document: &Value) -> Result<PopulationConfig, ConfigErrors> {
        if exceeds_depth(document, self.max_depth) {
            return Err(ConfigError::MalformedInput {
                reason: format!("nesting depth exceeds the limit of {}", self.max_depth),
            }
            .into());
        }

        let mut walker = Walker {
            errors: Vec::new(),
            max_populations: self.max_populations,
        };
        let config = walker.document(document);

        match config {
            Some(config) if walker.errors.is_empty() => {
                debug!(
                    populations = config.populations().len(),
                    "Configuration document validated."
                );
                Ok(config)
            }
            _ => Err(ConfigErrors::new(walker.errors)),
        }
    }

    pub fn check(&self, document: &Value) -> ConfigReport {
        match self.validate(document) {
            Ok(_) => ConfigReport {
                valid: true,
                errors: Vec::new(),
            },
            Err(errors) => ConfigReport {
                valid: false,
                errors: errors.into_iter().collect(),
            },
        }
    }
}

impl PopulationConfig {
    /// Returns a copy of this configuration with the given ancestry weights replaced.
    ///
    /// The patched document goes back through the validator, so an override outside [0, 1]
    /// or naming an unknown population is reported like any other configuration error.
    pub fn with_ancestry_weights(
        &self,
        overrides: &BTreeMap<String, f64>,
    ) -> Result<PopulationConfig, ConfigErrors> {
        let mut document = serde_json::to_value(self).map_err(|e| ConfigError::MalformedInput {
            reason: e.to_string(),
        })?;

        let mut errors = Vec::new();
        for (name, &weight) in overrides {
            let path = format!("populations.{name}");
            let slot = document
                .get_mut("populations")
                .and_then(|p| p.get_mut(name))
                .and_then(Value::as_object_mut);
            match (slot, serde_json::Number::from_f64(weight)) {
                (Some(population), Some(number)) => {
                    population.insert("ancestry_weight".to_string(), Value::Number(number));
                }
                (None, _) => errors.push(ConfigError::schema(path, "unknown population")),
                (Some(_), None) => errors.push(ConfigError::WeightOutOfRange {
                    path: format!("{path}.ancestry_weight"),
                    weight,
                }),
            }
        }
        if !errors.is_empty() {
            return Err(ConfigErrors::new(errors));
        }

        ConfigValidator::default().validate(&document)
    }
}

fn exceeds_depth(value: &Value, remaining: usize) -> bool {
    match value {
        Value::Array(items) => remaining == 0 || items.iter().any(|v| exceeds_depth(v, remaining - 1)),
        Value::Object(map) => remaining == 0 || map.values().any(|v| exceeds_depth(v, remaining - 1)),
        _ => false,
    }
}

fn join(path: &str, key: &str) -> String {
    if path == ROOT_PATH {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn is_valid_motif(motif: &str) -> bool {
    motif.chars().count() == 2 && motif.chars().all(|c| AminoAcid::from_code(c).is_some())
}

struct Walker {
    errors: Vec<ConfigError>,
    max_populations: usize,
}

impl Walker {
    fn document(&mut self, value: &Value) -> Option<PopulationConfig> {
        let root = self.object(value, ROOT_PATH)?;
        self.deny_unknown(root, &["global_params", "populations"], ROOT_PATH);

        let global = self
            .required(root, "global_params", ROOT_PATH)
            .and_then(|v| self.global_params(v, "global_params"));
        let populations = self
            .required(root, "populations", ROOT_PATH)
            .and_then(|v| self.populations(v, "populations"));

        Some(PopulationConfig::new(global?, populations?))
    }

    fn global_params(&mut self, value: &Value, path: &str) -> Option<GlobalParams> {
        let obj = self.object(value, path)?;
        self.deny_unknown(
            obj,
            &["sequence_length", "structural_params", "homopolymer_threshold"],
            path,
        );

        let sequence_length = self
            .required(obj, "sequence_length", path)
            .and_then(|v| self.length_range(v, &join(path, "sequence_length")));
        let structural_params = self
            .required(obj, "structural_params", path)
            .and_then(|v| self.structural_params(v, &join(path, "structural_params")));
        let threshold_path = join(path, "homopolymer_threshold");
        let homopolymer_threshold = self
            .required(obj, "homopolymer_threshold", path)
            .and_then(|v| self.unsigned(v, &threshold_path))
            .and_then(|t| {
                if t >= 1 {
                    Some(t)
                } else {
                    self.errors
                        .push(ConfigError::schema(threshold_path.as_str(), "must be at least 1"));
                    None
                }
            });

        Some(GlobalParams {
            sequence_length: sequence_length?,
            structural_params: structural_params?,
            homopolymer_threshold: homopolymer_threshold?,
        })
    }

    fn structural_params(&mut self, value: &Value, path: &str) -> Option<StructuralParams> {
        let obj = self.object(value, path)?;
        self.deny_unknown(obj, &["helix_propensity", "sheet_propensity"], path);

        let helix = self
            .required(obj, "helix_propensity", path)
            .and_then(|v| self.range(v, &join(path, "helix_propensity")));
        let sheet = self
            .required(obj, "sheet_propensity", path)
            .and_then(|v| self.range(v, &join(path, "sheet_propensity")));

        Some(StructuralParams {
            helix_propensity: helix?,
            sheet_propensity: sheet?,
        })
    }

    fn populations(&mut self, value: &Value, path: &str) -> Option<BTreeMap<String, Population>> {
        let obj = self.object(value, path)?;
        if obj.len() > self.max_populations {
            self.errors.push(ConfigError::schema(
                path,
                format!(
                    "{} populations declared, at most {} are allowed",
                    obj.len(),
                    self.max_populations
                ),
            ));
            return None;
        }

        let mut populations = BTreeMap::new();
        let mut complete = true;
        for (name, entry) in obj {
            let entry_path = join(path, name);
            if name.trim().is_empty() {
                self.errors
                    .push(ConfigError::schema(entry_path, "population name must not be empty"));
                complete = false;
                continue;
            }
            match self.population(entry, &entry_path) {
                Some(population) => {
                    populations.insert(name.clone(), population);
                }
                None => complete = false,
            }
        }
        complete.then_some(populations)
    }

    fn population(&mut self, value: &Value, path: &str) -> Option<Population> {
        let obj = self.object(value, path)?;
        self.deny_unknown(
            obj,
            &[
                "ancestry_weight",
                "binding_motifs",
                "biophysical_params",
                "hla_frequencies",
                "notes",
            ],
            path,
        );

        let weight_path = join(path, "ancestry_weight");
        let ancestry_weight = self
            .required(obj, "ancestry_weight", path)
            .and_then(|v| self.number(v, &weight_path))
            .and_then(|weight| {
                if (0.0..=1.0).contains(&weight) {
                    Some(weight)
                } else {
                    self.errors.push(ConfigError::WeightOutOfRange {
                        path: weight_path.clone(),
                        weight,
                    });
                    None
                }
            });
        let binding_motifs = self
            .required(obj, "binding_motifs", path)
            .and_then(|v| self.motifs(v, &join(path, "binding_motifs")));
        let biophysical_params = self
            .required(obj, "biophysical_params", path)
            .and_then(|v| self.biophysical_params(v, &join(path, "biophysical_params")));
        let hla_frequencies = match obj.get("hla_frequencies") {
            Some(v) => self.hla_frequencies(v, &join(path, "hla_frequencies")),
            None => Some(HlaFrequencies::new()),
        };
        let notes = match obj.get("notes") {
            Some(Value::String(s)) => Some(Some(s.clone())),
            Some(other) => {
                self.errors.push(ConfigError::schema(
                    join(path, "notes"),
                    format!("expected a string, found {}", describe(other)),
                ));
                None
            }
            None => Some(None),
        };

        Some(Population {
            ancestry_weight: ancestry_weight?,
            binding_motifs: binding_motifs?,
            biophysical_params: biophysical_params?,
            hla_frequencies: hla_frequencies?,
            notes: notes?,
        })
    }

    fn motifs(&mut self, value: &Value, path: &str) -> Option<Vec<String>> {
        let Some(items) = value.as_array() else {
            self.errors.push(ConfigError::schema(
                path,
                format!("expected an array, found {}", describe(value)),
            ));
            return None;
        };

        let mut motifs = Vec::with_capacity(items.len());
        let mut complete = true;
        for (i, item) in items.iter().enumerate() {
            let item_path = format!("{path}[{i}]");
            match item {
                Value::String(motif) if is_valid_motif(motif) => motifs.push(motif.clone()),
                Value::String(motif) => {
                    self.errors.push(ConfigError::InvalidMotif {
                        path: item_path,
                        motif: motif.clone(),
                    });
                    complete = false;
                }
                other => {
                    self.errors.push(ConfigError::schema(
                        item_path,
                        format!("expected a string, found {}", describe(other)),
                    ));
                    complete = false;
                }
            }
        }
        complete.then_some(motifs)
    }

    fn biophysical_params(&mut self, value: &Value, path: &str) -> Option<BiophysicalParams> {
        let obj = self.object(value, path)?;
        self.deny_unknown(
            obj,
            &["aromatic_content", "hydrophobic_content", "net_charge"],
            path,
        );

        let aromatic = self
            .required(obj, "aromatic_content", path)
            .and_then(|v| self.range(v, &join(path, "aromatic_content")));
        let hydrophobic = self
            .required(obj, "hydrophobic_content", path)
            .and_then(|v| self.range(v, &join(path, "hydrophobic_content")));
        let net_charge = self
            .required(obj, "net_charge", path)
            .and_then(|v| self.range(v, &join(path, "net_charge")));

        Some(BiophysicalParams {
            aromatic_content: aromatic?,
            hydrophobic_content: hydrophobic?,
            net_charge: net_charge?,
        })
    }

    fn hla_frequencies(&mut self, value: &Value, path: &str) -> Option<HlaFrequencies> {
        let loci = self.object(value, path)?;
        let mut frequencies = HlaFrequencies::new();
        let mut complete = true;

        for (locus, alleles) in loci {
            let locus_path = join(path, locus);
            let Some(alleles) = self.object(alleles, &locus_path) else {
                complete = false;
                continue;
            };
            let mut table = BTreeMap::new();
            for (allele, frequency) in alleles {
                let allele_path = join(&locus_path, allele);
                match self.number(frequency, &allele_path) {
                    Some(f) if (0.0..=1.0).contains(&f) => {
                        table.insert(allele.clone(), f);
                    }
                    Some(f) => {
                        self.errors.push(ConfigError::schema(
                            allele_path,
                            format!("allele frequency {f} is outside [0, 1]"),
                        ));
                        complete = false;
                    }
                    None => complete = false,
                }
            }
            frequencies.insert(locus.clone(), table);
        }
        complete.then_some(frequencies)
    }

    fn range(&mut self, value: &Value, path: &str) -> Option<ValueRange> {
        let obj = self.object(value, path)?;
        self.deny_unknown(obj, &["min", "max"], path);

        let min = self
            .required(obj, "min", path)
            .and_then(|v| self.number(v, &join(path, "min")));
        let max = self
            .required(obj, "max", path)
            .and_then(|v| self.number(v, &join(path, "max")));
        let (min, max) = (min?, max?);

        if min > max {
            self.errors.push(ConfigError::InvalidRange {
                path: path.to_string(),
                min,
                max,
            });
            return None;
        }
        Some(ValueRange::new(min, max))
    }

    fn length_range(&mut self, value: &Value, path: &str) -> Option<LengthRange> {
        let obj = self.object(value, path)?;
        self.deny_unknown(obj, &["min", "max"], path);

        let min = self
            .required(obj, "min", path)
            .and_then(|v| self.unsigned(v, &join(path, "min")));
        let max = self
            .required(obj, "max", path)
            .and_then(|v| self.unsigned(v, &join(path, "max")));
        let (min, max) = (min?, max?);

        if min > max {
            self.errors.push(ConfigError::InvalidRange {
                path: path.to_string(),
                min: min as f64,
                max: max as f64,
            });
            return None;
        }
        Some(LengthRange { min, max })
    }

    fn object<'v>(&mut self, value: &'v Value, path: &str) -> Option<&'v Map<String, Value>> {
        let obj = value.as_object();
        if obj.is_none() {
            self.errors.push(ConfigError::schema(
                path,
                format!("expected an object, found {}", describe(value)),
            ));
        }
        obj
    }

    fn required<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<&'v Value> {
        let value = obj.get(key);
        if value.is_none() {
            self.errors
                .push(ConfigError::schema(join(path, key), "missing required field"));
        }
        value
    }

    fn deny_unknown(&mut self, obj: &Map<String, Value>, allowed: &[&str], path: &str) {
        for key in obj.keys().filter(|k| !allowed.contains(&k.as_str())) {
            self.errors
                .push(ConfigError::schema(join(path, key), "unknown field"));
        }
    }

    fn number(&mut self, value: &Value, path: &str) -> Option<f64> {
        let number = value.as_f64();
        if number.is_none() {
            self.errors.push(ConfigError::schema(
                path,
                format!("expected a number, found {}", describe(value)),
            ));
        }
        number
    }

    fn unsigned(&mut self, value: &Value, path: &str) -> Option<usize> {
        let number = value.as_u64().and_then(|n| usize::try_from(n).ok());
        if number.is_none() {
            self.errors.push(ConfigError::schema(
                path,
                format!("expected a non-negative integer, found {}", describe(value)),
            ));
        }
        number
    }
}
