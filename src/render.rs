//! Styled terminal tokens and row-aligned block layout.
//!
//! Every base renders as a single colored symbol from a fixed palette
//! (A green, C blue, G yellow, T/U/Ψ magenta), and every amino acid renders
//! as a three-column ` X ` cell so an amino line sits exactly over its codon
//! line. Highlighting marks diff positions: a base keeps its color but moves
//! it into the background under bold + underline, an amino cell goes
//! bold + underline + reverse.
//!
//! Layout arranges parallel token tracks into fixed-width blocks so long
//! sequences stay comparable side by side: every track's block `i` prints
//! before any track's block `i + 1`.

use crate::alphabet::{Base, Convert};
use crate::ansi;
use crate::codon::CODON_LEN;

/// Fixed display color for a base symbol.
fn base_color(base: Base) -> ansi::Color {
    match base {
        Base::A => ansi::Color::Green,
        Base::C => ansi::Color::Blue,
        Base::G => ansi::Color::Yellow,
        Base::T | Base::U | Base::Psi => ansi::Color::Magenta,
    }
}

/// Styles one base symbol.
///
/// A plain base is colored over the default background. A highlighted base
/// swaps its color into the background and turns bold + underlined, which
/// keeps the color legible while making the mismatch impossible to miss.
pub fn style_base(base: Base, highlighted: bool) -> String {
    let color = base_color(base);
    let symbol = base.to_string();
    if highlighted {
        ansi::format_text(
            &symbol,
            &[
                ansi::fg(color),
                ansi::BOLD,
                ansi::UNDERLINE,
                ansi::bg(color),
                ansi::fg(ansi::Color::Default),
            ],
        )
    } else {
        ansi::format_text(&symbol, &[ansi::fg(color), ansi::bg(ansi::Color::Default)])
    }
}

/// Styles one amino-acid cell, three columns wide to align over a codon.
pub fn style_amino(amino: char, highlighted: bool) -> String {
    let cell = format!(" {} ", amino);
    if highlighted {
        ansi::format_text(&cell, &[ansi::BOLD, ansi::UNDERLINE, ansi::REVERSE])
    } else {
        cell
    }
}

/// Styles every base of a range, applying `convert` for display and
/// highlighting the positions listed in `diff_idxs`.
pub fn format_bases(bases: &[Base], diff_idxs: &[usize], convert: Convert) -> Vec<String> {
    bases
        .iter()
        .enumerate()
        .map(|(i, base)| style_base(base.convert(convert), diff_idxs.contains(&i)))
        .collect()
}

/// Groups styled base symbols into codon tokens (three symbols, no
/// separator; the final token may be shorter).
pub fn codon_tokens(styled: &[String]) -> Vec<String> {
    styled
        .chunks(CODON_LEN)
        .map(|chunk| chunk.concat())
        .collect()
}

/// Styles a track of amino cells, highlighting the codon indices listed in
/// `diff_idxs`.
pub fn amino_tokens(aminos: &[char], diff_idxs: &[usize]) -> Vec<String> {
    aminos
        .iter()
        .enumerate()
        .map(|(i, &amino)| style_amino(amino, diff_idxs.contains(&i)))
        .collect()
}

/// Arranges parallel token tracks into row-aligned blocks of `width` tokens.
///
/// Block `i` holds, for every track that still has an `i`-th chunk, that
/// chunk's tokens joined by single spaces. Tracks may have different
/// lengths; shorter tracks simply stop contributing lines, nothing is
/// padded. Restarting from the same tracks always yields the same blocks.
pub fn layout_rows(tracks: &[Vec<String>], width: usize) -> Vec<Vec<String>> {
    assert!(width > 0, "block width must be at least one token");

    let mut rows: Vec<Vec<String>> = Vec::new();
    for track in tracks {
        for (row_i, chunk) in track.chunks(width).enumerate() {
            if rows.len() <= row_i {
                rows.push(Vec::new());
            }
            rows[row_i].push(chunk.join(" "));
        }
    }
    rows
}

/// Joins layout blocks into displayable text: the lines of a block on
/// consecutive lines, one blank line between blocks.
pub fn render_blocks(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| row.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_palette() {
        assert_eq!(style_base(Base::A, false), "\x1b[32;49mA\x1b[0m");
        assert_eq!(style_base(Base::C, false), "\x1b[34;49mC\x1b[0m");
        assert_eq!(style_base(Base::G, false), "\x1b[33;49mG\x1b[0m");
        assert_eq!(style_base(Base::T, false), "\x1b[35;49mT\x1b[0m");
        assert_eq!(style_base(Base::U, false), "\x1b[35;49mU\x1b[0m");
        assert_eq!(style_base(Base::Psi, false), "\x1b[35;49mΨ\x1b[0m");
    }

    #[test]
    fn test_highlighted_base_moves_color_to_background() {
        assert_eq!(style_base(Base::A, true), "\x1b[32;1;4;42;39mA\x1b[0m");
        assert_eq!(style_base(Base::G, true), "\x1b[33;1;4;43;39mG\x1b[0m");
    }

    #[test]
    fn test_amino_cell_is_three_columns() {
        assert_eq!(style_amino('I', false), " I ");
        assert_eq!(style_amino('*', false), " * ");
        assert_eq!(style_amino('M', true), "\x1b[1;4;7m M \x1b[0m");
    }

    #[test]
    fn test_format_bases_applies_convert_and_highlights() {
        let bases = [Base::T, Base::Psi];
        let styled = format_bases(&bases, &[1], Convert::ToRna);
        assert_eq!(styled[0], "\x1b[35;49mU\x1b[0m");
        assert_eq!(styled[1], "\x1b[35;1;4;45;39mU\x1b[0m");
    }

    #[test]
    fn test_codon_tokens_group_by_three() {
        let styled = tokens(&["A", "T", "C", "U", "G"]);
        assert_eq!(codon_tokens(&styled), tokens(&["ATC", "UG"]));
        assert_eq!(codon_tokens(&[]), Vec::<String>::new());
    }

    #[test]
    fn test_layout_groups_into_blocks() {
        let track = tokens(&["1", "2", "3", "4", "5"]);
        let rows = layout_rows(&[track], 3);
        assert_eq!(rows, vec![tokens(&["1 2 3"]), tokens(&["4 5"])]);
    }

    #[test]
    fn test_layout_aligns_parallel_tracks() {
        let a = tokens(&["a1", "a2", "a3"]);
        let b = tokens(&["b1", "b2", "b3"]);
        let rows = layout_rows(&[a, b], 2);
        assert_eq!(
            rows,
            vec![tokens(&["a1 a2", "b1 b2"]), tokens(&["a3", "b3"])]
        );
    }

    #[test]
    fn test_layout_tolerates_uneven_tracks() {
        let long = tokens(&["x", "y", "z"]);
        let short = tokens(&["p"]);
        let rows = layout_rows(&[long, short], 2);
        // The short track contributes nothing past its own last chunk.
        assert_eq!(rows, vec![tokens(&["x y", "p"]), tokens(&["z"])]);
    }

    #[test]
    fn test_layout_preserves_every_token() {
        let track = tokens(&["1", "2", "3", "4", "5", "6", "7"]);
        let rows = layout_rows(&[track.clone()], 3);
        let rejoined: Vec<String> = rows
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|line| line.split(' '))
            .map(|s| s.to_string())
            .collect();
        assert_eq!(rejoined, track);
    }

    #[test]
    #[should_panic(expected = "block width")]
    fn test_layout_rejects_zero_width() {
        layout_rows(&[tokens(&["1"])], 0);
    }

    #[test]
    fn test_render_blocks_separates_with_blank_line() {
        let rows = vec![tokens(&["a", "b"]), tokens(&["c", "d"])];
        assert_eq!(render_blocks(&rows), "a\nb\n\nc\nd");
        assert_eq!(render_blocks(&[]), "");
    }
}
