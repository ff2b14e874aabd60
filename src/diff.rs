//! Positional diff passes over parallel sequences.
//!
//! Two independent layers feed the comparison view:
//! - base-level: positions whose bases differ after RNA-normalizing both
//!   operands, so T/U/Ψ notation differences are never flagged
//! - codon-level: codon indices whose translated amino acids differ
//!
//! The layers are deliberately not derived from each other. A silent
//! mutation changes a base without changing the protein, and shows up in
//! the base layer only.

use thiserror::Error;

use crate::alphabet::{Base, Convert};

/// Two equal-length operands were required but not supplied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Sequence lengths differ: {left} vs {right}")]
pub struct LengthMismatchError {
    pub left: usize,
    pub right: usize,
}

/// Mismatch indices between the active ranges of two genes, one list per
/// diff layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneDiff {
    /// Positions (relative to the active range) whose bases differ after
    /// RNA normalization.
    pub bases: Vec<usize>,
    /// Codon indices whose translated amino acids differ.
    pub aminos: Vec<usize>,
}

/// Ascending indices at which two equal-length slices differ.
pub fn diff_indices<T: PartialEq>(a: &[T], b: &[T]) -> Result<Vec<usize>, LengthMismatchError> {
    if a.len() != b.len() {
        return Err(LengthMismatchError {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut idxs = Vec::new();
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        if x != y {
            idxs.push(i);
        }
    }
    Ok(idxs)
}

/// Base-level diff: canonicalizes both operands to RNA notation, then
/// compares position by position.
pub fn diff_bases(a: &[Base], b: &[Base]) -> Result<Vec<usize>, LengthMismatchError> {
    let a: Vec<Base> = a.iter().map(|base| base.convert(Convert::ToRna)).collect();
    let b: Vec<Base> = b.iter().map(|base| base.convert(Convert::ToRna)).collect();
    diff_indices(&a, &b)
}

/// Codon-level diff: compares translated amino acids position by position.
pub fn diff_aminos(a: &[char], b: &[char]) -> Result<Vec<usize>, LengthMismatchError> {
    diff_indices(a, b)
}
