use super::tables::{ACIDIC_PKA, BASIC_PKA, PKA_C_TERMINUS, PKA_N_TERMINUS};
use crate::core::models::residue::AminoAcid;

pub const PH_MIN: f64 = 0.0;
pub const PH_MAX: f64 = 14.0;

/// Absolute net charge at which the isoelectric search accepts its current pH.
pub const PI_CHARGE_TOLERANCE: f64 = 0.001;
pub const PI_MAX_ITERATIONS: usize = 50;

#[inline]
fn protonated_fraction(pka: f64, ph: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(ph - pka))
}

#[inline]
fn deprotonated_fraction(pka: f64, ph: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(pka - ph))
}

/// Henderson-Hasselbalch net charge of a peptide at the given pH, termini included.
pub fn charge_at_ph(residues: &[AminoAcid], ph: f64) -> f64 {
    let termini = protonated_fraction(PKA_N_TERMINUS, ph) - deprotonated_fraction(PKA_C_TERMINUS, ph);

    residues.iter().fold(termini, |charge, aa| {
        let code = aa.code();
        if let Some(&pka) = BASIC_PKA.get(&code) {
            charge + protonated_fraction(pka, ph)
        } else if let Some(&pka) = ACIDIC_PKA.get(&code) {
            charge - deprotonated_fraction(pka, ph)
        } else {
            charge
        }
    })
}

/// Bisects [`PH_MIN`, `PH_MAX`] for the pH of zero net charge.
///
/// The charge model is strictly decreasing in pH and changes sign inside the interval for
/// any peptide (the termini alone guarantee it), so the search always brackets the root.
/// It stops once the charge is within [`PI_CHARGE_TOLERANCE`] or after
/// [`PI_MAX_ITERATIONS`] halvings.
pub fn isoelectric_point(residues: &[AminoAcid]) -> f64 {
    let mut lo = PH_MIN;
    let mut hi = PH_MAX;
    let mut mid = (lo + hi) / 2.0;

    for _ in 0..PI_MAX_ITERATIONS {
        mid = (lo + hi) / 2.0;
        let charge = charge_at_ph(residues, mid);
        if charge.abs() < PI_CHARGE_TOLERANCE {
            return mid;
        }
        if charge > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    mid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;

    fn residues(s: &str) -> Vec<AminoAcid> {
        Sequence::parse(s).unwrap().residues().to_vec()
    }

    #[test]
    fn charge_decreases_with_ph() {
        let seq = residues("KRHDEACY");
        let mut previous = f64::INFINITY;
        for step in 0..=28 {
            let ph = step as f64 * 0.5;
            let charge = charge_at_ph(&seq, ph);
            assert!(charge < previous, "charge not decreasing at pH {ph}");
            previous = charge;
        }
    }

    #[test]
    fn termini_only_peptide_is_neutral_between_terminal_pkas() {
        let pi = isoelectric_point(&residues("GGGG"));
        assert!(pi > PKA_C_TERMINUS && pi < PKA_N_TERMINUS, "pI was {pi}");
    }

    #[test]
    fn acidic_peptide_has_low_pi() {
        let pi = isoelectric_point(&residues("DDDEEEDDDEEE"));
        assert!(pi < 4.0, "pI was {pi}");
    }

    #[test]
    fn basic_peptide_has_high_pi() {
        let pi = isoelectric_point(&residues("KKKRRRKKK"));
        assert!(pi > 10.0, "pI was {pi}");
    }

    #[test]
    fn charge_at_computed_pi_is_within_tolerance() {
        for s in ["WYRFKWYF", "ACDEFGHIKLMNPQRSTVWY", "HHHHHH", "CCCYYY", "G"] {
            let seq = residues(s);
            let pi = isoelectric_point(&seq);
            assert!(
                charge_at_ph(&seq, pi).abs() < PI_CHARGE_TOLERANCE,
                "{s}: charge {} at pI {pi}",
                charge_at_ph(&seq, pi)
            );
        }
    }

    #[test]
    fn isoelectric_point_is_deterministic() {
        let seq = residues("WYRKFGKHWFRYKHFWYRFKHWFYKHFRWYKFHWYKHFWYRFKHWYRKHFW");
        assert_eq!(
            isoelectric_point(&seq).to_bits(),
            isoelectric_point(&seq).to_bits()
        );
    }
}
