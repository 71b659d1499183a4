//! Punctuation vocabulary: the delimiters and separators that are not operators.
//!
//! `{`, `}` and `'` are not listed: they delimit comments and string literals and never reach the
//! parser as tokens.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LParen), "(");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    Semicolon,
    Comma,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of punctuation, in [`PunctuationId`] declaration order.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::LParen,
        canonical: "(",
    },
    PunctuationInfo {
        id: PunctuationId::RParen,
        canonical: ")",
    },
    PunctuationInfo {
        id: PunctuationId::Semicolon,
        canonical: ";",
    },
    PunctuationInfo {
        id: PunctuationId::Comma,
        canonical: ",",
    },
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}
