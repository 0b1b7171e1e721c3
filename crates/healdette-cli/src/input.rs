use crate::error::{CliError, Result};
use std::path::Path;

/// A candidate sequence with the identifier it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: String,
    pub sequence: String,
}

/// Parses candidate sequences from plain text.
///
/// Text containing a `>` header line is read as FASTA, where each record's sequence lines are
/// concatenated and the first word of the header becomes the id. Otherwise every line is one
/// sequence, numbered from 1. Blank lines and `#` comments are skipped in both forms, and
/// residue letters are upper-cased.
pub fn parse_candidates(text: &str) -> Vec<Candidate> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    if text.lines().any(|line| line.trim_start().starts_with('>')) {
        parse_fasta(lines)
    } else {
        lines
            .enumerate()
            .map(|(i, line)| Candidate {
                id: format!("seq_{}", i + 1),
                sequence: line.to_ascii_uppercase(),
            })
            .collect()
    }
}

fn parse_fasta<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for line in lines {
        if let Some(header) = line.strip_prefix('>') {
            let id = header
                .split_whitespace()
                .next()
                .map(str::to_string)
                .unwrap_or_else(|| format!("seq_{}", candidates.len() + 1));
            candidates.push(Candidate {
                id,
                sequence: String::new(),
            });
        } else if let Some(current) = candidates.last_mut() {
            current.sequence.push_str(&line.to_ascii_uppercase());
        } else {
            // Sequence data before the first header gets its own record.
            candidates.push(Candidate {
                id: format!("seq_{}", candidates.len() + 1),
                sequence: line.to_ascii_uppercase(),
            });
        }
    }
    candidates
}

pub fn read_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::Input {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_candidates(&text))
}

pub fn from_arguments(sequences: &[String]) -> Vec<Candidate> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, s)| Candidate {
            id: format!("seq_{}", i + 1),
            sequence: s.trim().to_ascii_uppercase(),
        })
        .collect()
}
