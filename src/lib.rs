//! # genediff - Terminal Codon Viewer and Sequence Diff
//!
//! A terminal-based viewer and visual diff for DNA/RNA sequences: codon
//! grouping, amino-acid translation, and position-aligned comparison with
//! ANSI highlighting.
//!
//! ## Architecture
//!
//! The pipeline runs from sequence to codons to styled tokens to aligned rows:
//! - `alphabet`: base symbols and DNA/RNA conversion
//! - `codon`: the fixed codon to amino-acid table
//! - `gene`: the gene model, scoped reading frames and derived tracks
//! - `diff`: positional base-level and codon-level diff passes
//! - `render`: styled tokens and row-aligned block layout
//! - `ansi`: the SGR escape primitives the renderer emits
//!
//! ## Comparison Semantics
//!
//! Comparison is strictly positional, never an alignment. Both operands are
//! RNA-normalized first so notation differences (T vs U vs Ψ) are never
//! flagged, and the base-level and codon-level passes are independent: a
//! silent mutation highlights a base without flagging its amino acid.
//!
//! ```
//! use genediff::gene::Gene;
//!
//! let query = Gene::new("CTT").unwrap();
//! let reference = Gene::new("CTC").unwrap();
//!
//! let diff = query.diff_positions(&reference).unwrap();
//! assert_eq!(diff.bases, vec![2]);
//! assert_eq!(diff.aminos, vec![]);
//! ```

pub mod alphabet;
pub mod ansi;
pub mod codon;
pub mod diff;
pub mod gene;
pub mod render;
