use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AminoAcid {
    // --- Aliphatic, Nonpolar ---
    Alanine,    // A
    Glycine,    // G
    Isoleucine, // I
    Leucine,    // L
    Proline,    // P
    Valine,     // V

    // --- Aromatic ---
    Phenylalanine, // F
    Tryptophan,    // W
    Tyrosine,      // Y

    // --- Polar, Uncharged ---
    Asparagine, // N
    Cysteine,   // C
    Glutamine,  // Q
    Serine,     // S
    Threonine,  // T
    Methionine, // M

    // --- Positively Charged (Basic) ---
    Arginine,  // R
    Lysine,    // K
    Histidine, // H

    // --- Negatively Charged (Acidic) ---
    AsparticAcid, // D
    GlutamicAcid, // E
}

pub const ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not one of the 20 standard amino-acid codes")]
pub struct ParseAminoAcidError(pub String);

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Alanine,
        AminoAcid::Cysteine,
        AminoAcid::AsparticAcid,
        AminoAcid::GlutamicAcid,
        AminoAcid::Phenylalanine,
        AminoAcid::Glycine,
        AminoAcid::Histidine,
        AminoAcid::Isoleucine,
        AminoAcid::Lysine,
        AminoAcid::Leucine,
        AminoAcid::Methionine,
        AminoAcid::Asparagine,
        AminoAcid::Proline,
        AminoAcid::Glutamine,
        AminoAcid::Arginine,
        AminoAcid::Serine,
        AminoAcid::Threonine,
        AminoAcid::Valine,
        AminoAcid::Tryptophan,
        AminoAcid::Tyrosine,
    ];

    /// Maps an uppercase one-letter code to its residue. Lowercase codes are rejected.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'A' => Some(Self::Alanine),
            'C' => Some(Self::Cysteine),
            'D' => Some(Self::AsparticAcid),
            'E' => Some(Self::GlutamicAcid),
            'F' => Some(Self::Phenylalanine),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'K' => Some(Self::Lysine),
            'L' => Some(Self::Leucine),
            'M' => Some(Self::Methionine),
            'N' => Some(Self::Asparagine),
            'P' => Some(Self::Proline),
            'Q' => Some(Self::Glutamine),
            'R' => Some(Self::Arginine),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'V' => Some(Self::Valine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
        }
    }

    pub fn to_three_letter(self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Cysteine => "CYS",
            Self::AsparticAcid => "ASP",
            Self::GlutamicAcid => "GLU",
            Self::Phenylalanine => "PHE",
            Self::Glycine => "GLY",
            Self::Histidine => "HIS",
            Self::Isoleucine => "ILE",
            Self::Lysine => "LYS",
            Self::Leucine => "LEU",
            Self::Methionine => "MET",
            Self::Asparagine => "ASN",
            Self::Proline => "PRO",
            Self::Glutamine => "GLN",
            Self::Arginine => "ARG",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Valine => "VAL",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ParseAminoAcidError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| ParseAminoAcidError(code.to_string()))
    }
}

impl FromStr for AminoAcid {
    type Err = ParseAminoAcidError;

    /// Accepts either a one-letter code or a three-letter name (case-insensitive for the latter).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::try_from(c);
        }
        let upper = trimmed.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|aa| aa.to_three_letter() == upper)
            .ok_or_else(|| ParseAminoAcidError(s.to_string()))
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_alphabet_code_round_trips_through_the_enum() {
        for code in ALPHABET.chars() {
            let aa = AminoAcid::from_code(code).unwrap();
            assert_eq!(aa.code(), code);
        }
    }

    #[test]
    fn all_contains_each_residue_exactly_once() {
        let unique: HashSet<_> = AminoAcid::ALL.iter().collect();
        assert_eq!(unique.len(), 20);
        let codes: String = AminoAcid::ALL.iter().map(|aa| aa.code()).collect();
        assert_eq!(codes, ALPHABET);
    }

    #[test]
    fn from_code_rejects_lowercase_and_nonstandard_codes() {
        assert_eq!(AminoAcid::from_code('a'), None);
        assert_eq!(AminoAcid::from_code('X'), None);
        assert_eq!(AminoAcid::from_code('B'), None);
        assert_eq!(AminoAcid::from_code('*'), None);
    }

    #[test]
    fn from_str_accepts_one_and_three_letter_forms() {
        assert_eq!("W".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!("trp".parse::<AminoAcid>(), Ok(AminoAcid::Tryptophan));
        assert_eq!(" HIS ".parse::<AminoAcid>(), Ok(AminoAcid::Histidine));
        assert!("XYZ".parse::<AminoAcid>().is_err());
        assert!("".parse::<AminoAcid>().is_err());
    }

    #[test]
    fn display_uses_one_letter_code() {
        assert_eq!(AminoAcid::GlutamicAcid.to_string(), "E");
    }
}
