//! Codon to amino-acid translation.
//!
//! A single fixed table: the standard genetic code over the 64 DNA codons.
//! Indexing normalizes to DNA notation first, so RNA input (including Ψ)
//! lands on the same entries and translation never needs a conversion pass.

use crate::alphabet::Base;

/// Bases per codon.
pub const CODON_LEN: usize = 3;

/// Translation of the three stop codons (TAA, TAG, TGA).
pub const STOP_AMINO: char = '*';

/// Fallback for groups that are not a complete three-base codon.
pub const UNKNOWN_AMINO: char = '?';

/// The standard genetic code, indexed by `b1 * 16 + b2 * 4 + b3` with
/// A = 0, C = 1, G = 2, T = 3.
const CODON_TABLE: [char; 64] = [
    'K', 'N', 'K', 'N', // AAA AAC AAG AAT
    'T', 'T', 'T', 'T', // ACA ACC ACG ACT
    'R', 'S', 'R', 'S', // AGA AGC AGG AGT
    'I', 'I', 'M', 'I', // ATA ATC ATG ATT
    'Q', 'H', 'Q', 'H', // CAA CAC CAG CAT
    'P', 'P', 'P', 'P', // CCA CCC CCG CCT
    'R', 'R', 'R', 'R', // CGA CGC CGG CGT
    'L', 'L', 'L', 'L', // CTA CTC CTG CTT
    'E', 'D', 'E', 'D', // GAA GAC GAG GAT
    'A', 'A', 'A', 'A', // GCA GCC GCG GCT
    'G', 'G', 'G', 'G', // GGA GGC GGG GGT
    'V', 'V', 'V', 'V', // GTA GTC GTG GTT
    '*', 'Y', '*', 'Y', // TAA TAC TAG TAT
    'S', 'S', 'S', 'S', // TCA TCC TCG TCT
    '*', 'C', 'W', 'C', // TGA TGC TGG TGT
    'L', 'F', 'L', 'F', // TTA TTC TTG TTT
];

/// Table index of a base. U and Ψ share T's slot, which is exactly the
/// DNA normalization translation requires.
fn dna_index(base: Base) -> usize {
    match base {
        Base::A => 0,
        Base::C => 1,
        Base::G => 2,
        Base::T | Base::U | Base::Psi => 3,
    }
}

/// Translates one codon group to its amino-acid symbol.
///
/// Total over any input: complete codons hit the fixed table (stop codons
/// map to [`STOP_AMINO`]), while incomplete groups degrade to
/// [`UNKNOWN_AMINO`] instead of failing.
///
/// # Examples
///
/// ```
/// use genediff::alphabet::Base;
/// use genediff::codon::translate;
///
/// assert_eq!(translate(&[Base::A, Base::T, Base::G]), 'M');
/// assert_eq!(translate(&[Base::A, Base::U, Base::G]), 'M');
/// assert_eq!(translate(&[Base::T, Base::A]), '?');
/// ```
pub fn translate(codon: &[Base]) -> char {
    if codon.len() != CODON_LEN {
        return UNKNOWN_AMINO;
    }
    CODON_TABLE[dna_index(codon[0]) * 16 + dna_index(codon[1]) * 4 + dna_index(codon[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::parse_sequence;

    fn translate_str(codon: &str) -> char {
        translate(&parse_sequence(codon).unwrap())
    }

    #[test]
    fn test_start_codon() {
        assert_eq!(translate_str("ATG"), 'M');
    }

    #[test]
    fn test_stop_codons() {
        assert_eq!(translate_str("TAA"), STOP_AMINO);
        assert_eq!(translate_str("TAG"), STOP_AMINO);
        assert_eq!(translate_str("TGA"), STOP_AMINO);
    }

    #[test]
    fn test_common_codons() {
        assert_eq!(translate_str("AAA"), 'K');
        assert_eq!(translate_str("ATC"), 'I');
        assert_eq!(translate_str("TGG"), 'W');
        assert_eq!(translate_str("GCT"), 'A');
        assert_eq!(translate_str("CGA"), 'R');
        assert_eq!(translate_str("TTT"), 'F');
    }

    #[test]
    fn test_rna_codons_translate_like_dna() {
        assert_eq!(translate_str("AUG"), 'M');
        assert_eq!(translate_str("UAA"), STOP_AMINO);
        assert_eq!(translate_str("UUU"), 'F');
    }

    #[test]
    fn test_pseudouridine_translates_like_uracil() {
        assert_eq!(translate_str("AΨG"), 'M');
        assert_eq!(translate_str("UGΨ"), 'C');
        assert_eq!(translate_str("ΨΨΨ"), 'F');
    }

    #[test]
    fn test_incomplete_codons_are_unknown() {
        assert_eq!(translate(&[]), UNKNOWN_AMINO);
        assert_eq!(translate_str("A"), UNKNOWN_AMINO);
        assert_eq!(translate_str("AT"), UNKNOWN_AMINO);
        assert_eq!(translate_str("ATGA"), UNKNOWN_AMINO);
    }

    #[test]
    fn test_translation_is_total_over_complete_codons() {
        const BASES: [Base; 6] = [Base::A, Base::C, Base::G, Base::T, Base::U, Base::Psi];
        for b1 in BASES {
            for b2 in BASES {
                for b3 in BASES {
                    let amino = translate(&[b1, b2, b3]);
                    assert!(
                        amino == STOP_AMINO || amino.is_ascii_uppercase(),
                        "unexpected translation {:?} for {}{}{}",
                        amino,
                        b1,
                        b2,
                        b3
                    );
                    assert_ne!(amino, UNKNOWN_AMINO);
                }
            }
        }
    }
}
