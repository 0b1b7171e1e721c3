use crate::core::biophysics::analyzer::{AnalysisError, BiophysicalMetric, Metrics, analyze_sequence};
use crate::core::config::models::PopulationConfig;
use crate::core::models::sequence::Sequence;
use crate::engine::blend::{BlendError, BlendedRanges, PopulationParameterBlender};
use crate::engine::config::ScoringConfig;
use crate::engine::fitness::biophysical_fit;
use crate::engine::motif::BindingMotifScorer;
use crate::engine::result::{
    PopulationScore, StructuralProperty, ValidationResult, Violation, Warning,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Validates candidate sequences against one population configuration.
///
/// The blended ranges depend only on the configuration, so they are computed once when the
/// validator is built. After that the validator is read-only and may be shared across threads.
#[derive(Debug, Clone)]
pub struct WeightedSequenceValidator<'a> {
    config: &'a PopulationConfig,
    scoring: ScoringConfig,
    blended: BlendedRanges,
}

impl<'a> WeightedSequenceValidator<'a> {
    pub fn new(config: &'a PopulationConfig, scoring: ScoringConfig) -> Result<Self, BlendError> {
        let blended = PopulationParameterBlender::new(scoring.weight_tolerance).blend(config)?;
        Ok(Self {
            config,
            scoring,
            blended,
        })
    }

    pub fn blended_ranges(&self) -> &BlendedRanges {
        &self.blended
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    #[instrument(skip_all, name = "sequence_validation", fields(length = raw.len()))]
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let mut warnings = Vec::new();
        if self.blended.renormalized {
            warnings.push(Warning::AncestryWeightRenormalized {
                total_weight: self.blended.total_weight,
            });
        }

        let sequence = match Sequence::parse(raw) {
            Ok(sequence) => sequence,
            Err(e) => {
                let mut errors = Vec::new();
                let is_empty = e == AnalysisError::EmptySequence;
                errors.push(Violation::Analysis(e));
                if !is_empty {
                    if let Some(violation) = self.check_length(raw.chars().count()) {
                        errors.push(violation);
                    }
                }
                debug!(?errors, "Sequence rejected before analysis.");
                return ValidationResult::unanalyzable(warnings, errors, self.blended.clone());
            }
        };

        let metrics = analyze_sequence(&sequence);
        let errors = self.hard_checks(&metrics);

        let mut population_scores = BTreeMap::new();
        for (name, population) in self.config.weighted_populations() {
            let fit = biophysical_fit(&metrics, &population.biophysical_params);
            let motif = BindingMotifScorer::score(&sequence, &population.binding_motifs);
            if motif.no_motifs_configured {
                warnings.push(Warning::NoMotifsConfigured {
                    population: name.to_string(),
                });
            }
            let score = self.scoring.biophysical_weight * fit + self.scoring.motif_weight() * motif.score;
            population_scores.insert(
                name.to_string(),
                PopulationScore {
                    score,
                    weight: population.ancestry_weight,
                    effective_weight: self.blended.effective_weight(name),
                    biophysical_fit: fit,
                    motif_score: motif.score,
                    matched_motifs: motif.matched_motifs,
                    hla_coverage: population.hla_coverage(),
                },
            );
        }

        let weighted_sum: f64 = population_scores
            .values()
            .map(|s| s.score * s.weight)
            .sum();
        let aggregate_score = weighted_sum / self.blended.total_weight;

        warnings.extend(self.soft_checks(&metrics));

        let valid = errors.is_empty() && aggregate_score >= self.scoring.acceptance_threshold;
        debug!(valid, aggregate_score, "Sequence validated.");

        ValidationResult {
            valid,
            warnings,
            errors,
            metrics: Some(metrics),
            population_scores,
            aggregate_score,
            blended_ranges: self.blended.clone(),
        }
    }

    fn check_length(&self, length: usize) -> Option<Violation> {
        let range = self.config.global_params().sequence_length;
        (!range.contains(length)).then_some(Violation::LengthOutOfRange {
            length,
            min: range.min,
            max: range.max,
        })
    }

    fn hard_checks(&self, metrics: &Metrics) -> Vec<Violation> {
        let threshold = self.config.global_params().homopolymer_threshold;
        let mut errors: Vec<Violation> = self.check_length(metrics.length).into_iter().collect();
        if metrics.homopolymer_max_run >= threshold {
            errors.push(Violation::HomopolymerRun {
                residue: metrics.homopolymer_residue,
                run: metrics.homopolymer_max_run,
                threshold,
            });
        }
        errors
    }

    fn soft_checks(&self, metrics: &Metrics) -> Vec<Warning> {
        let blended = BiophysicalMetric::ALL.into_iter().filter_map(|metric| {
            let value = metrics.value(metric);
            let range = self.blended.range(metric);
            (!range.contains(value)).then_some(Warning::OutsideBlendedRange {
                metric,
                value,
                range,
            })
        });

        let structural = &self.config.global_params().structural_params;
        let propensities = [
            (
                StructuralProperty::HelixPropensity,
                metrics.helix_propensity,
                structural.helix_propensity,
            ),
            (
                StructuralProperty::SheetPropensity,
                metrics.sheet_propensity,
                structural.sheet_propensity,
            ),
        ]
        .into_iter()
        .filter(|(_, value, range)| !range.contains(*value))
        .map(|(property, value, range)| Warning::OutsideStructuralRange {
            property,
            value,
            range,
        });

        blended.chain(propensities).collect()
    }
}

/// One-shot validation of a single sequence with the default scoring constants.
pub fn validate(sequence: &str, config: &PopulationConfig) -> Result<ValidationResult, BlendError> {
    Ok(WeightedSequenceValidator::new(config, ScoringConfig::default())?.validate(sequence))
}
