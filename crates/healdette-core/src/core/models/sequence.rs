use super::residue::AminoAcid;
use crate::core::biophysics::analyzer::AnalysisError;
use std::fmt;

/// A non-empty amino-acid sequence whose every position is a standard residue.
///
/// Construction is the only place residues are checked; everything downstream
/// (analysis, motif scanning) can rely on the alphabet invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    text: String,
    residues: Vec<AminoAcid>,
}

impl Sequence {
    pub fn parse(raw: &str) -> Result<Self, AnalysisError> {
        if raw.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }
        let residues = raw
            .chars()
            .enumerate()
            .map(|(position, c)| {
                AminoAcid::from_code(c).ok_or(AnalysisError::InvalidResidue {
                    residue: c,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: raw.to_string(),
            residues,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Never true for a parsed sequence.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Overlapping two-residue windows, stride one. Yields `len - 1` items.
    pub fn pairs(&self) -> impl Iterator<Item = &str> + '_ {
        // ASCII-only by construction, so byte offsets are char offsets.
        (0..self.text.len().saturating_sub(1)).map(move |i| &self.text[i..i + 2])
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<&str> for Sequence {
    type Error = AnalysisError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}
