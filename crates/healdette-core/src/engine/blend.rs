use crate::core::biophysics::analyzer::BiophysicalMetric;
use crate::core::config::models::{Population, PopulationConfig, ValueRange};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlendError {
    #[error("No population with a positive ancestry weight to blend")]
    NoPopulations,
}

/// Ancestry-weighted acceptance ranges for every biophysical metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlendedRanges {
    pub aromatic_content: ValueRange,
    pub hydrophobic_content: ValueRange,
    pub net_charge: ValueRange,
    /// Sum of the raw ancestry weights that took part in the blend.
    pub total_weight: f64,
    pub renormalized: bool,
    pub effective_weights: BTreeMap<String, f64>,
}

impl BlendedRanges {
    pub fn range(&self, metric: BiophysicalMetric) -> ValueRange {
        match metric {
            BiophysicalMetric::AromaticContent => self.aromatic_content,
            BiophysicalMetric::HydrophobicContent => self.hydrophobic_content,
            BiophysicalMetric::NetCharge => self.net_charge,
        }
    }

    pub fn effective_weight(&self, population: &str) -> f64 {
        self.effective_weights
            .get(population)
            .copied()
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct RangeSum {
    min: f64,
    max: f64,
}

impl RangeSum {
    fn add(self, weight: f64, range: ValueRange) -> Self {
        Self {
            min: self.min + weight * range.min,
            max: self.max + weight * range.max,
        }
    }

    fn mean(self, total_weight: f64) -> ValueRange {
        ValueRange::new(self.min / total_weight, self.max / total_weight)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    weight: f64,
    ranges: [RangeSum; 3],
}

impl Accumulator {
    fn add(mut self, population: &Population) -> Self {
        let weight = population.ancestry_weight;
        for (slot, metric) in self.ranges.iter_mut().zip(BiophysicalMetric::ALL) {
            *slot = slot.add(weight, population.biophysical_params.range(metric));
        }
        self.weight += weight;
        self
    }
}

/// Blends per-population acceptance ranges into one weighted-mean range per metric.
#[derive(Debug, Clone, Copy)]
pub struct PopulationParameterBlender {
    weight_tolerance: f64,
}

impl PopulationParameterBlender {
    pub fn new(weight_tolerance: f64) -> Self {
        Self { weight_tolerance }
    }

    pub fn blend(&self, config: &PopulationConfig) -> Result<BlendedRanges, BlendError> {
        self.blend_populations(config.weighted_populations())
    }

    /// Populations with a zero weight contribute nothing and are left out of the result.
    pub fn blend_populations<'a, I>(&self, populations: I) -> Result<BlendedRanges, BlendError>
    where
        I: IntoIterator<Item = (&'a str, &'a Population)>,
    {
        let weighted: Vec<(&str, &Population)> = populations
            .into_iter()
            .filter(|(_, p)| p.ancestry_weight > 0.0)
            .collect();

        let acc = weighted
            .iter()
            .fold(Accumulator::default(), |acc, (_, p)| acc.add(p));
        if weighted.is_empty() || acc.weight <= 0.0 {
            return Err(BlendError::NoPopulations);
        }

        let total = acc.weight;
        let renormalized = (total - 1.0).abs() > self.weight_tolerance;
        if renormalized {
            warn!(
                total_weight = total,
                "Ancestry weights do not sum to 1.0; renormalizing."
            );
        }

        let effective_weights = weighted
            .iter()
            .map(|(name, p)| {
                let w = if renormalized {
                    p.ancestry_weight / total
                } else {
                    p.ancestry_weight
                };
                (name.to_string(), w)
            })
            .collect();

        let [aromatic, hydrophobic, charge] = acc.ranges;
        let blended = BlendedRanges {
            aromatic_content: aromatic.mean(total),
            hydrophobic_content: hydrophobic.mean(total),
            net_charge: charge.mean(total),
            total_weight: total,
            renormalized,
            effective_weights,
        };
        debug!(?blended, "Blended population parameters.");
        Ok(blended)
    }
}
