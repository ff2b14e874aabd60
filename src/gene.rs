//! The gene model: a nucleotide sequence with a selectable reading frame.
//!
//! A [`Gene`] owns its base sequence; what varies is the active reading
//! frame, a `[start, end)` window over it. The codon grouping and
//! amino-acid translation are derived state, recomputed whenever the frame
//! moves, so they can never drift out of sync with the window.
//!
//! Frames move only through [`Gene::with_reading_frame`], which restores
//! the full-sequence frame on every exit path (success, error, or panic).
//! Outside such a scope a gene is always in its canonical full-range state.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::alphabet::{parse_sequence, Base, Convert, InvalidBaseError};
use crate::codon::{self, CODON_LEN};
use crate::diff::{self, GeneDiff, LengthMismatchError};
use crate::render;

/// Errors from gene construction, reading-frame selection, and comparison.
#[derive(Error, Debug)]
pub enum GeneError {
    #[error("{0}")]
    InvalidBase(#[from] InvalidBaseError),

    #[error("Invalid reading frame [{start}:{end}] for a sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{0}")]
    LengthMismatch(#[from] LengthMismatchError),

    #[error("Failed to read sequence file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gene operations.
pub type GeneResult<T> = Result<T, GeneError>;

/// Options for [`Gene::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Print the translated amino-acid line above the codon line.
    pub show_aminos: bool,
    /// Separate codons with single spaces instead of concatenating them.
    pub split_codons: bool,
    /// Alphabet conversion applied to the displayed bases. Translation
    /// always works from the stored sequence, so this is display-only.
    pub convert: Convert,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            show_aminos: false,
            split_codons: true,
            convert: Convert::None,
        }
    }
}

/// A nucleotide sequence with an active reading frame and the codon and
/// amino-acid decomposition derived from it.
#[derive(Debug, Clone)]
pub struct Gene {
    sequence: Vec<Base>,
    start: usize,
    end: usize,
    codons: Vec<Vec<Base>>,
    aminos: Vec<char>,
}

impl Gene {
    /// Builds a gene from bare sequence text (case-insensitive).
    ///
    /// Empty input is valid and yields an empty gene. Any symbol outside
    /// the base alphabet is rejected here, which keeps every later
    /// operation total.
    ///
    /// # Examples
    ///
    /// ```
    /// use genediff::gene::Gene;
    ///
    /// let gene = Gene::new("ATCUGΨ").unwrap();
    /// assert_eq!(gene.aminos(), &['I', 'C']);
    /// ```
    pub fn new(text: &str) -> GeneResult<Gene> {
        let sequence = parse_sequence(text)?;
        let end = sequence.len();
        let mut gene = Gene {
            sequence,
            start: 0,
            end,
            codons: Vec::new(),
            aminos: Vec::new(),
        };
        gene.derive();
        Ok(gene)
    }

    /// Builds a gene from annotated source text, stripping ASCII digits and
    /// whitespace first. This accepts numbered layouts such as GenBank
    /// ORIGIN blocks as they are copied out of a record.
    pub fn from_source_text(text: &str) -> GeneResult<Gene> {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
            .collect();
        Gene::new(&cleaned)
    }

    /// Loads a gene from a text file via [`Gene::from_source_text`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> GeneResult<Gene> {
        let text = fs::read_to_string(path)?;
        Gene::from_source_text(&text)
    }

    /// Recomputes the codon and amino tracks from the active frame.
    fn derive(&mut self) {
        self.codons.clear();
        self.aminos.clear();
        for chunk in self.sequence[self.start..self.end].chunks(CODON_LEN) {
            self.codons.push(chunk.to_vec());
            self.aminos.push(codon::translate(chunk));
        }
    }

    /// Number of bases in the full sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// True if the full sequence holds no bases.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Start offset of the active reading frame.
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive) of the active reading frame.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The bases inside the active reading frame.
    pub fn active_range(&self) -> &[Base] {
        &self.sequence[self.start..self.end]
    }

    /// Codon groups of the active frame. The final group may hold fewer
    /// than three bases.
    pub fn codons(&self) -> &[Vec<Base>] {
        &self.codons
    }

    /// Translated amino acids of the active frame, one per codon group.
    pub fn aminos(&self) -> &[char] {
        &self.aminos
    }

    /// Runs `body` with the reading frame set to `[start, end)`.
    ///
    /// Bounds are validated before anything changes: an invalid window
    /// fails with [`GeneError::InvalidRange`] and leaves the gene exactly
    /// as it was. Once the body runs, the full-sequence frame is restored
    /// no matter how the scope exits, so an `Err` from the body (or a
    /// panic unwinding through it) never leaks a partial frame.
    pub fn with_reading_frame<T, F>(&mut self, start: usize, end: usize, body: F) -> GeneResult<T>
    where
        F: FnOnce(&mut Gene) -> GeneResult<T>,
    {
        if start > end || end > self.sequence.len() {
            return Err(GeneError::InvalidRange {
                start,
                end,
                len: self.sequence.len(),
            });
        }

        self.start = start;
        self.end = end;
        self.derive();

        let guard = FrameGuard { gene: self };
        let result = body(&mut *guard.gene);
        drop(guard);
        result
    }

    /// Renders the active frame as styled terminal text.
    ///
    /// Produces the codon line, preceded by the aligned amino-acid line
    /// when `options.show_aminos` is set.
    pub fn render(&self, options: &RenderOptions) -> String {
        let styled = render::format_bases(self.active_range(), &[], options.convert);
        let delim = if options.split_codons { " " } else { "" };
        let codon_line = render::codon_tokens(&styled).join(delim);

        if options.show_aminos {
            let amino_line = render::amino_tokens(&self.aminos, &[]).join(delim);
            format!("{}\n{}", amino_line, codon_line)
        } else {
            codon_line
        }
    }

    /// Renders a temporary reading frame, restoring the full frame after.
    pub fn render_frame(
        &mut self,
        start: usize,
        end: usize,
        options: &RenderOptions,
    ) -> GeneResult<String> {
        self.with_reading_frame(start, end, |gene| Ok(gene.render(options)))
    }

    /// Base-level and codon-level mismatches between the active frames of
    /// two genes.
    ///
    /// The two layers are computed independently, so a silent mutation
    /// reports a base mismatch without flagging its codon. Both frames
    /// must have equal length.
    ///
    /// # Examples
    ///
    /// ```
    /// use genediff::gene::Gene;
    ///
    /// let query = Gene::new("CTT").unwrap();
    /// let reference = Gene::new("CTC").unwrap();
    /// let diff = query.diff_positions(&reference).unwrap();
    /// assert_eq!(diff.bases, vec![2]); // third base differs...
    /// assert_eq!(diff.aminos, vec![]); // ...but both codons encode leucine
    /// ```
    pub fn diff_positions(&self, other: &Gene) -> GeneResult<GeneDiff> {
        let bases = diff::diff_bases(self.active_range(), other.active_range())?;
        let aminos = diff::diff_aminos(&self.aminos, &other.aminos)?;
        Ok(GeneDiff { bases, aminos })
    }

    /// Renders a side-by-side comparison of two genes over `[start, end)`,
    /// where `end` defaults to this gene's full length.
    ///
    /// Both genes are scoped to the same frame (and restored afterwards).
    /// Bases are displayed in RNA notation with mismatching positions
    /// highlighted, and each amino track highlights the codons whose
    /// translation differs. The four tracks (query aminos, query codons,
    /// reference codons, reference aminos) are laid out in row-aligned
    /// blocks of `width` codons below a one-line header.
    pub fn visual_compare(
        &mut self,
        other: &mut Gene,
        start: usize,
        end: Option<usize>,
        width: usize,
    ) -> GeneResult<String> {
        let end = end.unwrap_or(self.sequence.len());

        self.with_reading_frame(start, end, |query| {
            other.with_reading_frame(start, end, |reference| {
                let diff = query.diff_positions(reference)?;

                let (query_codons, query_aminos) = compare_tracks(query, &diff);
                let (reference_codons, reference_aminos) = compare_tracks(reference, &diff);

                let tracks = [query_aminos, query_codons, reference_codons, reference_aminos];
                let rows = render::layout_rows(&tracks, width);

                let mut out = format!("Comparing sequences between offsets [{}:{}]\n", start, end);
                out.push_str(&render::render_blocks(&rows));
                Ok(out)
            })
        })
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&RenderOptions::default()))
    }
}

/// Codon and amino token tracks for one side of a comparison, highlighted
/// per the shared diff and displayed in RNA notation.
fn compare_tracks(gene: &Gene, diff: &GeneDiff) -> (Vec<String>, Vec<String>) {
    let styled = render::format_bases(gene.active_range(), &diff.bases, Convert::ToRna);
    let codons = render::codon_tokens(&styled);
    let aminos = render::amino_tokens(gene.aminos(), &diff.aminos);
    (codons, aminos)
}

/// Restores a gene's canonical full-range frame when dropped, even if the
/// scoped body panicked.
struct FrameGuard<'a> {
    gene: &'a mut Gene,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        self.gene.start = 0;
        self.gene.end = self.gene.sequence.len();
        self.gene.derive();
    }
}
