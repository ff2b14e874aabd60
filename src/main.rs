//! genediff - Terminal Codon Viewer and Sequence Diff
//!
//! Renders a nucleotide sequence as colorized codons, optionally annotated
//! with translated amino acids, or compares two sequences position by
//! position with mismatches highlighted.
//!
//! ## Usage
//!
//! ```bash
//! genediff gene.txt -a              # View with amino-acid annotation
//! genediff gene.txt variant.txt     # Side-by-side visual comparison
//! genediff -l ATGCCCTAA -a          # Inline sequence text
//! genediff gene.txt -s 3 -e 36      # Restrict to a reading frame
//! ```
//!
//! Input files hold sequence text interleaved with digits and whitespace
//! (e.g. a numbered GenBank ORIGIN block); both are stripped on load.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use genediff::alphabet::Convert;
use genediff::gene::{Gene, RenderOptions};

/// Display alphabet specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConvertArg {
    /// Show bases as written
    None,
    /// DNA notation (U and Ψ shown as T)
    Dna,
    /// RNA notation (T and Ψ shown as U)
    Rna,
}

impl From<ConvertArg> for Convert {
    fn from(arg: ConvertArg) -> Self {
        match arg {
            ConvertArg::None => Convert::None,
            ConvertArg::Dna => Convert::ToDna,
            ConvertArg::Rna => Convert::ToRna,
        }
    }
}

/// genediff - A terminal codon viewer and visual diff for DNA/RNA sequences
///
/// With one input, renders it as colorized codons. With two inputs, compares
/// them position by position and highlights mismatching bases and codons
/// whose translated amino acids differ.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Query sequence: a file path, or inline text with --literal
    query: String,

    /// Reference sequence to compare the query against
    reference: Option<String>,

    /// Treat the inputs as inline sequence text instead of file paths
    #[arg(short = 'l', long = "literal")]
    literal: bool,

    /// Reading-frame start offset
    #[arg(short = 's', long = "start", default_value_t = 0)]
    start: usize,

    /// Reading-frame end offset (default: query length)
    #[arg(short = 'e', long = "end")]
    end: Option<usize>,

    /// Print the translated amino-acid line above the codon line
    #[arg(short = 'a', long = "aminos")]
    aminos: bool,

    /// Concatenate codons instead of separating them with spaces
    #[arg(long = "no-split")]
    no_split: bool,

    /// Display alphabet for the rendered bases
    #[arg(short = 'c', long = "convert", value_enum, default_value = "none")]
    convert: ConvertArg,

    /// Codons per comparison block (default: fit the terminal width)
    #[arg(short = 'w', long = "width")]
    width: Option<usize>,
}

/// Reads an input as a file path, or parses it directly in literal mode.
fn load_gene(input: &str, literal: bool) -> Result<Gene> {
    let gene = if literal {
        Gene::new(input)?
    } else {
        Gene::from_path(input)?
    };
    Ok(gene)
}

/// Codons per block that fit the current terminal, at four columns per
/// codon token (three bases plus the separating space). Falls back to 24
/// when the terminal geometry is unavailable (e.g. piped output).
fn default_block_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) => (cols as usize / 4).max(1),
        Err(_) => 24,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut query = load_gene(&args.query, args.literal)?;

    if let Some(reference) = &args.reference {
        // Compare mode
        let mut reference = load_gene(reference, args.literal)?;
        let width = args.width.unwrap_or_else(default_block_width);
        if width == 0 {
            anyhow::bail!("Block width must be at least 1 codon");
        }
        let out = query.visual_compare(&mut reference, args.start, args.end, width)?;
        println!("{}", out);
    } else {
        // View mode
        let options = RenderOptions {
            show_aminos: args.aminos,
            split_codons: !args.no_split,
            convert: args.convert.into(),
        };
        let out = match (args.start, args.end) {
            (0, None) => query.render(&options),
            (start, end) => {
                let end = end.unwrap_or(query.len());
                query.render_frame(start, end, &options)?
            }
        };
        println!("{}", out);
    }

    Ok(())
}
