use crate::core::models::sequence::Sequence;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotifScore {
    /// Matched distinct windows over total windows, in [0, 1].
    pub score: f64,
    pub windows: usize,
    pub matched_windows: usize,
    /// Configured motifs that occur in the sequence, in configuration order.
    pub matched_motifs: Vec<String>,
    pub no_motifs_configured: bool,
}

/// Scores a sequence against a population's two-residue binding motifs.
///
/// Every overlapping window of the sequence is compared against the motif set. A window
/// substring counts once no matter how often it recurs, so the score only reflects which
/// motifs are present.
pub struct BindingMotifScorer;

impl BindingMotifScorer {
    pub fn score<S: AsRef<str>>(sequence: &Sequence, motifs: &[S]) -> MotifScore {
        let windows = sequence.len().saturating_sub(1);
        if motifs.is_empty() {
            return MotifScore {
                score: 0.0,
                windows,
                matched_windows: 0,
                matched_motifs: Vec::new(),
                no_motifs_configured: true,
            };
        }

        let motif_set: BTreeSet<&str> = motifs.iter().map(AsRef::as_ref).collect();
        let present: BTreeSet<&str> = sequence
            .pairs()
            .filter(|pair| motif_set.contains(pair))
            .collect();

        let mut reported = BTreeSet::new();
        let matched_motifs = motifs
            .iter()
            .map(AsRef::as_ref)
            .filter(|m| present.contains(m) && reported.insert(*m))
            .map(str::to_string)
            .collect();

        let score = if windows == 0 {
            0.0
        } else {
            present.len() as f64 / windows as f64
        };

        MotifScore {
            score,
            windows,
            matched_windows: present.len(),
            matched_motifs,
            no_motifs_configured: false,
        }
    }
}
