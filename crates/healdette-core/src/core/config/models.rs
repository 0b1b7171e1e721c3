use crate::core::biophysics::analyzer::BiophysicalMetric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Distance from `value` to the nearest bound when outside the range, zero inside it.
    pub fn distance_outside(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralParams {
    pub helix_propensity: ValueRange,
    pub sheet_propensity: ValueRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalParams {
    pub sequence_length: LengthRange,
    pub structural_params: StructuralParams,
    /// Runs of identical residues at least this long fail the hard check.
    pub homopolymer_threshold: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiophysicalParams {
    pub aromatic_content: ValueRange,
    pub hydrophobic_content: ValueRange,
    pub net_charge: ValueRange,
}

impl BiophysicalParams {
    pub fn range(&self, metric: BiophysicalMetric) -> ValueRange {
        match metric {
            BiophysicalMetric::AromaticContent => self.aromatic_content,
            BiophysicalMetric::HydrophobicContent => self.hydrophobic_content,
            BiophysicalMetric::NetCharge => self.net_charge,
        }
    }
}

pub type HlaFrequencies = BTreeMap<String, BTreeMap<String, f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Population {
    pub ancestry_weight: f64,
    pub binding_motifs: Vec<String>,
    pub biophysical_params: BiophysicalParams,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub hla_frequencies: HlaFrequencies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Population {
    /// Summed allele frequency per HLA locus, capped at 1.
    pub fn hla_coverage(&self) -> BTreeMap<String, f64> {
        self.hla_frequencies
            .iter()
            .map(|(locus, alleles)| {
                let covered: f64 = alleles.values().sum();
                (locus.clone(), covered.min(1.0))
            })
            .collect()
    }
}

/// A fully validated population configuration.
///
/// Instances only come out of [`super::validator::ConfigValidator`], which either returns a
/// complete configuration or the list of everything wrong with the document. The populations
/// are kept in a `BTreeMap`, so iteration (and therefore every derived report) is ordered by
/// population name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationConfig {
    global_params: GlobalParams,
    populations: BTreeMap<String, Population>,
}

impl PopulationConfig {
    pub(crate) fn new(
        global_params: GlobalParams,
        populations: BTreeMap<String, Population>,
    ) -> Self {
        Self {
            global_params,
            populations,
        }
    }

    pub fn global_params(&self) -> &GlobalParams {
        &self.global_params
    }

    pub fn populations(&self) -> &BTreeMap<String, Population> {
        &self.populations
    }

    pub fn population(&self, name: &str) -> Option<&Population> {
        self.populations.get(name)
    }

    /// Populations that contribute to scoring, in name order.
    pub fn weighted_populations(&self) -> impl Iterator<Item = (&str, &Population)> {
        self.populations
            .iter()
            .filter(|(_, p)| p.ancestry_weight > 0.0)
            .map(|(name, p)| (name.as_str(), p))
    }

    pub fn total_weight(&self) -> f64 {
        self.weighted_populations()
            .map(|(_, p)| p.ancestry_weight)
            .sum()
    }
}
