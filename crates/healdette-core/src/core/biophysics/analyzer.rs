use super::charge::isoelectric_point;
use super::tables::{
    HISTIDINE_PARTIAL_CHARGE, helix_propensity, hydropathy, is_aromatic, is_hydrophobic,
    is_negative, is_positive, sheet_propensity,
};
use crate::core::models::residue::AminoAcid;
use crate::core::models::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Sequence is empty")]
    EmptySequence,

    #[error("Invalid residue '{residue}' at position {position}")]
    InvalidResidue { residue: char, position: usize },
}

/// The composition metrics that populations declare acceptance ranges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiophysicalMetric {
    AromaticContent,
    HydrophobicContent,
    NetCharge,
}

impl BiophysicalMetric {
    pub const ALL: [BiophysicalMetric; 3] = [
        BiophysicalMetric::AromaticContent,
        BiophysicalMetric::HydrophobicContent,
        BiophysicalMetric::NetCharge,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::AromaticContent => "aromatic_content",
            Self::HydrophobicContent => "hydrophobic_content",
            Self::NetCharge => "net_charge",
        }
    }
}

impl fmt::Display for BiophysicalMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub length: usize,
    /// Percentage of F, W and Y residues.
    pub aromatic_content: f64,
    /// Percentage of residues in the hydrophobic set.
    pub hydrophobic_content: f64,
    pub net_charge: f64,
    pub gravy: f64,
    pub isoelectric_point: f64,
    pub homopolymer_max_run: usize,
    pub homopolymer_residue: AminoAcid,
    pub helix_propensity: f64,
    pub sheet_propensity: f64,
}

impl Metrics {
    pub fn value(&self, metric: BiophysicalMetric) -> f64 {
        match metric {
            BiophysicalMetric::AromaticContent => self.aromatic_content,
            BiophysicalMetric::HydrophobicContent => self.hydrophobic_content,
            BiophysicalMetric::NetCharge => self.net_charge,
        }
    }
}

/// Parses `raw` and computes its [`Metrics`].
pub fn analyze(raw: &str) -> Result<Metrics, AnalysisError> {
    let sequence = Sequence::parse(raw)?;
    Ok(analyze_sequence(&sequence))
}

pub fn analyze_sequence(sequence: &Sequence) -> Metrics {
    let residues = sequence.residues();
    let length = residues.len();
    let len = length as f64;

    let count = |pred: fn(AminoAcid) -> bool| residues.iter().filter(|&&aa| pred(aa)).count();
    let aromatic = count(is_aromatic);
    let hydrophobic = count(is_hydrophobic);
    let positive = count(is_positive);
    let negative = count(is_negative);
    let histidine = count(|aa| aa == AminoAcid::Histidine);

    let mean = |scale: fn(AminoAcid) -> f64| residues.iter().map(|&aa| scale(aa)).sum::<f64>() / len;
    let (homopolymer_residue, homopolymer_max_run) = longest_run(residues);

    Metrics {
        length,
        aromatic_content: 100.0 * aromatic as f64 / len,
        hydrophobic_content: 100.0 * hydrophobic as f64 / len,
        net_charge: positive as f64 + HISTIDINE_PARTIAL_CHARGE * histidine as f64
            - negative as f64,
        gravy: mean(hydropathy),
        isoelectric_point: isoelectric_point(residues),
        homopolymer_max_run,
        homopolymer_residue,
        helix_propensity: mean(helix_propensity),
        sheet_propensity: mean(sheet_propensity),
    }
}

/// Residue and length of the longest run of identical neighbours; the first run wins ties.
fn longest_run(residues: &[AminoAcid]) -> (AminoAcid, usize) {
    let mut best = (residues[0], 1);
    let mut current = (residues[0], 1);

    for &aa in &residues[1..] {
        if aa == current.0 {
            current.1 += 1;
        } else {
            current = (aa, 1);
        }
        if current.1 > best.1 {
            best = current;
        }
    }
    best
}
