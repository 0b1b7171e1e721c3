use super::blend::BlendedRanges;
use crate::core::biophysics::analyzer::{AnalysisError, BiophysicalMetric, Metrics};
use crate::core::config::models::ValueRange;
use crate::core::models::residue::AminoAcid;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralProperty {
    HelixPropensity,
    SheetPropensity,
}

impl fmt::Display for StructuralProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HelixPropensity => f.write_str("helix_propensity"),
            Self::SheetPropensity => f.write_str("sheet_propensity"),
        }
    }
}

/// Annotations that never change the verdict on their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    AncestryWeightRenormalized {
        total_weight: f64,
    },
    NoMotifsConfigured {
        population: String,
    },
    OutsideBlendedRange {
        metric: BiophysicalMetric,
        value: f64,
        range: ValueRange,
    },
    OutsideStructuralRange {
        property: StructuralProperty,
        value: f64,
        range: ValueRange,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AncestryWeightRenormalized { total_weight } => write!(
                f,
                "AncestryWeightRenormalized: ancestry weights sum to {total_weight:.4}, renormalized to 1.0"
            ),
            Self::NoMotifsConfigured { population } => write!(
                f,
                "NoMotifsConfigured: population '{population}' declares no binding motifs"
            ),
            Self::OutsideBlendedRange {
                metric,
                value,
                range,
            } => write!(
                f,
                "{metric} {value:.2} outside blended range [{:.2}, {:.2}]",
                range.min, range.max
            ),
            Self::OutsideStructuralRange {
                property,
                value,
                range,
            } => write!(
                f,
                "{property} {value:.3} outside structural range [{:.3}, {:.3}]",
                range.min, range.max
            ),
        }
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hard-check failures; any of them forces the verdict to invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Analysis(AnalysisError),
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
    HomopolymerRun {
        residue: AminoAcid,
        run: usize,
        threshold: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "{e}"),
            Self::LengthOutOfRange { length, min, max } => {
                write!(f, "Sequence length {length} outside allowed range [{min}, {max}]")
            }
            Self::HomopolymerRun {
                residue,
                run,
                threshold,
            } => write!(
                f,
                "Homopolymer run of {run} '{residue}' residues reaches the threshold of {threshold}"
            ),
        }
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopulationScore {
    pub score: f64,
    /// Configured ancestry weight.
    pub weight: f64,
    pub effective_weight: f64,
    pub biophysical_fit: f64,
    pub motif_score: f64,
    pub matched_motifs: Vec<String>,
    /// Summed HLA allele frequency per locus for this population.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub hla_coverage: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub warnings: Vec<Warning>,
    pub errors: Vec<Violation>,
    /// Absent when the sequence could not be analyzed at all.
    pub metrics: Option<Metrics>,
    pub population_scores: BTreeMap<String, PopulationScore>,
    pub aggregate_score: f64,
    pub blended_ranges: BlendedRanges,
}

impl ValidationResult {
    pub(crate) fn unanalyzable(
        warnings: Vec<Warning>,
        errors: Vec<Violation>,
        blended_ranges: BlendedRanges,
    ) -> Self {
        Self {
            valid: false,
            warnings,
            errors,
            metrics: None,
            population_scores: BTreeMap::new(),
            aggregate_score: 0.0,
            blended_ranges,
        }
    }

    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_serialize_as_messages() {
        let warning = Warning::NoMotifsConfigured {
            population: "finnish".into(),
        };
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(
            json,
            serde_json::json!("NoMotifsConfigured: population 'finnish' declares no binding motifs")
        );
    }

    #[test]
    fn renormalization_warning_names_itself() {
        let warning = Warning::AncestryWeightRenormalized { total_weight: 0.6 };
        assert!(warning.to_string().starts_with("AncestryWeightRenormalized"));
    }

    #[test]
    fn violations_render_their_details() {
        let violation = Violation::HomopolymerRun {
            residue: AminoAcid::Alanine,
            run: 4,
            threshold: 4,
        };
        assert_eq!(
            violation.to_string(),
            "Homopolymer run of 4 'A' residues reaches the threshold of 4"
        );

        let violation = Violation::Analysis(AnalysisError::InvalidResidue {
            residue: 'X',
            position: 3,
        });
        assert_eq!(violation.to_string(), "Invalid residue 'X' at position 3");
    }

    #[test]
    fn soft_range_warning_mentions_metric_and_bounds() {
        let warning = Warning::OutsideBlendedRange {
            metric: BiophysicalMetric::AromaticContent,
            value: 50.0,
            range: ValueRange::new(15.0, 25.0),
        };
        assert_eq!(
            warning.to_string(),
            "aromatic_content 50.00 outside blended range [15.00, 25.00]"
        );
    }
}
