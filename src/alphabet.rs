//! Nucleotide alphabet: base symbols and DNA/RNA conversion.
//!
//! The alphabet covers the four DNA bases, uracil, and pseudouridine (Ψ), a
//! modified base found in RNA. Parsing is case-insensitive and rejects any
//! other symbol up front, so every operation downstream of construction is
//! total over [`Base`].

use std::fmt;

use thiserror::Error;

/// A symbol outside the supported base alphabet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid base symbol '{0}' (expected one of A, C, G, T, U, Ψ)")]
pub struct InvalidBaseError(pub char);

/// A single nucleotide symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
    U,
    /// Pseudouridine, an RNA-only modified base.
    Psi,
}

/// Alphabet conversion applied to a base before display or comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convert {
    /// Leave bases as written.
    #[default]
    None,
    /// DNA notation: U and Ψ become T.
    ToDna,
    /// RNA notation: T and Ψ become U.
    ToRna,
}

impl Base {
    /// Parses a single symbol, case-insensitively.
    pub fn from_char(c: char) -> Result<Base, InvalidBaseError> {
        match c {
            'A' | 'a' => Ok(Base::A),
            'C' | 'c' => Ok(Base::C),
            'G' | 'g' => Ok(Base::G),
            'T' | 't' => Ok(Base::T),
            'U' | 'u' => Ok(Base::U),
            'Ψ' | 'ψ' => Ok(Base::Psi),
            other => Err(InvalidBaseError(other)),
        }
    }

    /// The canonical uppercase symbol for this base.
    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
            Base::U => 'U',
            Base::Psi => 'Ψ',
        }
    }

    /// Converts this base between DNA and RNA notation.
    ///
    /// Bases already in the target alphabet pass through unchanged, so every
    /// mode is idempotent. Ψ has no DNA counterpart and collapses to T in
    /// DNA notation and to U in RNA notation.
    pub fn convert(self, mode: Convert) -> Base {
        match mode {
            Convert::None => self,
            Convert::ToDna => match self {
                Base::U | Base::Psi => Base::T,
                other => other,
            },
            Convert::ToRna => match self {
                Base::T | Base::Psi => Base::U,
                other => other,
            },
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parses a run of symbols into bases, failing on the first unsupported one.
pub fn parse_sequence(text: &str) -> Result<Vec<Base>, InvalidBaseError> {
    text.chars().map(Base::from_char).collect()
}
