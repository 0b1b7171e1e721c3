use crate::core::models::residue::AminoAcid;
use phf::{Map, Set, phf_map, phf_set};

pub static AROMATIC_RESIDUES: Set<char> = phf_set! { 'F', 'W', 'Y' };

pub static HYDROPHOBIC_RESIDUES: Set<char> = phf_set! {
    'A', 'I', 'L', 'M', 'F', 'W', 'Y', 'V',
};

pub static POSITIVE_RESIDUES: Set<char> = phf_set! { 'K', 'R' };

pub static NEGATIVE_RESIDUES: Set<char> = phf_set! { 'D', 'E' };

/// Fractional charge credited to each histidine when counting net charge at neutral pH.
pub const HISTIDINE_PARTIAL_CHARGE: f64 = 0.1;

// Kyte & Doolittle (1982).
static HYDROPATHY: Map<char, f64> = phf_map! {
    'A' => 1.8, 'C' => 2.5, 'D' => -3.5, 'E' => -3.5, 'F' => 2.8,
    'G' => -0.4, 'H' => -3.2, 'I' => 4.5, 'K' => -3.9, 'L' => 3.8,
    'M' => 1.9, 'N' => -3.5, 'P' => -1.6, 'Q' => -3.5, 'R' => -4.5,
    'S' => -0.8, 'T' => -0.7, 'V' => 4.2, 'W' => -0.9, 'Y' => -1.3,
};

// Chou & Fasman (1978) conformational parameters, P(alpha) and P(beta).
static HELIX_PROPENSITY: Map<char, f64> = phf_map! {
    'A' => 1.42, 'C' => 0.70, 'D' => 1.01, 'E' => 1.51, 'F' => 1.13,
    'G' => 0.57, 'H' => 1.00, 'I' => 1.08, 'K' => 1.16, 'L' => 1.21,
    'M' => 1.45, 'N' => 0.67, 'P' => 0.57, 'Q' => 1.11, 'R' => 0.98,
    'S' => 0.77, 'T' => 0.83, 'V' => 1.06, 'W' => 1.08, 'Y' => 0.69,
};

static SHEET_PROPENSITY: Map<char, f64> = phf_map! {
    'A' => 0.83, 'C' => 1.19, 'D' => 0.54, 'E' => 0.37, 'F' => 1.38,
    'G' => 0.75, 'H' => 0.87, 'I' => 1.60, 'K' => 0.74, 'L' => 1.30,
    'M' => 1.05, 'N' => 0.89, 'P' => 0.55, 'Q' => 1.10, 'R' => 0.93,
    'S' => 0.75, 'T' => 1.19, 'V' => 1.70, 'W' => 1.37, 'Y' => 1.47,
};

pub const PKA_N_TERMINUS: f64 = 8.0;
pub const PKA_C_TERMINUS: f64 = 3.1;

/// Side chains that carry +1 when protonated.
pub static BASIC_PKA: Map<char, f64> = phf_map! {
    'K' => 10.0, 'R' => 12.0, 'H' => 6.0,
};

/// Side chains that carry -1 when deprotonated.
pub static ACIDIC_PKA: Map<char, f64> = phf_map! {
    'D' => 4.0, 'E' => 4.4, 'C' => 8.5, 'Y' => 10.0,
};

pub fn is_aromatic(aa: AminoAcid) -> bool {
    AROMATIC_RESIDUES.contains(&aa.code())
}

pub fn is_hydrophobic(aa: AminoAcid) -> bool {
    HYDROPHOBIC_RESIDUES.contains(&aa.code())
}

pub fn hydropathy(aa: AminoAcid) -> f64 {
    HYDROPATHY.get(&aa.code()).copied().unwrap_or(0.0)
}

pub fn helix_propensity(aa: AminoAcid) -> f64 {
    HELIX_PROPENSITY.get(&aa.code()).copied().unwrap_or(1.0)
}

pub fn sheet_propensity(aa: AminoAcid) -> f64 {
    SHEET_PROPENSITY.get(&aa.code()).copied().unwrap_or(1.0)
}

pub fn is_positive(aa: AminoAcid) -> bool {
    POSITIVE_RESIDUES.contains(&aa.code())
}

pub fn is_negative(aa: AminoAcid) -> bool {
    NEGATIVE_RESIDUES.contains(&aa.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ALPHABET;

    #[test]
    fn per_residue_tables_cover_the_whole_alphabet() {
        for code in ALPHABET.chars() {
            assert!(HYDROPATHY.contains_key(&code), "hydropathy missing {code}");
            assert!(HELIX_PROPENSITY.contains_key(&code), "helix missing {code}");
            assert!(SHEET_PROPENSITY.contains_key(&code), "sheet missing {code}");
        }
        assert_eq!(HYDROPATHY.len(), 20);
        assert_eq!(HELIX_PROPENSITY.len(), 20);
        assert_eq!(SHEET_PROPENSITY.len(), 20);
    }

    #[test]
    fn classification_sets_only_contain_valid_codes() {
        for set in [
            &AROMATIC_RESIDUES,
            &HYDROPHOBIC_RESIDUES,
            &POSITIVE_RESIDUES,
            &NEGATIVE_RESIDUES,
        ] {
            for code in set.iter() {
                assert!(ALPHABET.contains(*code));
            }
        }
    }

    #[test]
    fn aromatic_residues_are_also_hydrophobic() {
        for code in AROMATIC_RESIDUES.iter() {
            assert!(HYDROPHOBIC_RESIDUES.contains(code));
        }
    }

    #[test]
    fn hydropathy_matches_kyte_doolittle_extremes() {
        assert_eq!(hydropathy(AminoAcid::Isoleucine), 4.5);
        assert_eq!(hydropathy(AminoAcid::Arginine), -4.5);
    }

    #[test]
    fn charge_classification_excludes_histidine() {
        assert!(is_positive(AminoAcid::Lysine));
        assert!(is_positive(AminoAcid::Arginine));
        assert!(!is_positive(AminoAcid::Histidine));
        assert!(is_negative(AminoAcid::AsparticAcid));
        assert!(is_negative(AminoAcid::GlutamicAcid));
        assert!(!is_negative(AminoAcid::Cysteine));
    }
}
