//! Token model.
//!
//! Vocabulary tokens carry registry ids from `tinyc_core::lang`; identifiers and literals carry
//! their source text. Numeric literals stay text until the parser classifies and converts them.

use std::fmt;

use crate::ast::Span;
use tinyc_core::lang::keywords::{self, KeywordId};
use tinyc_core::lang::operators::{self, OperatorId};
use tinyc_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    /// Numeric literal text, e.g. `017`, `0x1F`, `3.14f`.
    Num(String),
    /// String literal body without the quotes.
    Str(String),

    // ========== Special ==========
    /// A malformed lexeme; the scanner has already reported it.
    Error,
    EndFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{}'", name),
            TokenKind::Num(text) => write!(f, "number '{}'", text),
            TokenKind::Str(text) => write!(f, "string '{}'", text),
            TokenKind::Error => write!(f, "malformed token"),
            TokenKind::EndFile => write!(f, "end of file"),
        }
    }
}

/// A token with its kind and the position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Source text payload; present only for identifiers, numbers and strings.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Ident(s) | TokenKind::Num(s) | TokenKind::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Classify a scanned word: keyword, word operator, or identifier.
pub fn classify_word(word: String) -> TokenKind {
    match keywords::from_str(&word) {
        Some(id) => match id.as_operator() {
            Some(op) => TokenKind::Operator(op),
            None => TokenKind::Keyword(id),
        },
        None => TokenKind::Ident(word),
    }
}
