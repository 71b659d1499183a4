//! Reserved keyword vocabulary.
//!
//! A stable identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording the
//! canonical spelling and category of every reserved word.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `If` is an identifier, `if` is a keyword.
//! - `and`, `or` and `not` are reserved here and also registered as word operators in
//!   [`crate::lang::operators`]; [`KeywordId::as_operator`] links the two.
//! - The five type names (`int`, `bool`, `float`, `double`, `string`) are keywords; map them to a
//!   [`crate::ValueType`] with [`crate::ValueType::from_keyword`].
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::info_for(KeywordId::Double).category, KeywordCategory::TypeName);
//! assert_eq!(keywords::from_str("While"), None);
//! ```

use super::operators::OperatorId;

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Do,
    While,

    // IO statements
    Read,
    Write,

    // Literals
    True,
    False,

    // Word operators
    Or,
    And,
    Not,

    // Type names
    Int,
    Bool,
    Float,
    Double,
    String,
}

/// High-level grouping of keywords.
///
/// Categories are metadata; the parser still owns where each keyword may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Io,
    Literal,
    Operator,
    TypeName,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, in [`KeywordId`] declaration order.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Then, "then", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::End, "end", KeywordCategory::ControlFlow),
    info(KeywordId::Repeat, "repeat", KeywordCategory::ControlFlow),
    info(KeywordId::Until, "until", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    // IO statements
    info(KeywordId::Read, "read", KeywordCategory::Io),
    info(KeywordId::Write, "write", KeywordCategory::Io),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    // Word operators
    info(KeywordId::Or, "or", KeywordCategory::Operator),
    info(KeywordId::And, "and", KeywordCategory::Operator),
    info(KeywordId::Not, "not", KeywordCategory::Operator),
    // Type names
    info(KeywordId::Int, "int", KeywordCategory::TypeName),
    info(KeywordId::Bool, "bool", KeywordCategory::TypeName),
    info(KeywordId::Float, "float", KeywordCategory::TypeName),
    info(KeywordId::Double, "double", KeywordCategory::TypeName),
    info(KeywordId::String, "string", KeywordCategory::TypeName),
];

impl KeywordId {
    /// The word operator this keyword spells, if any.
    pub fn as_operator(self) -> Option<OperatorId> {
        match self {
            KeywordId::Or => Some(OperatorId::Or),
            KeywordId::And => Some(OperatorId::And),
            KeywordId::Not => Some(OperatorId::Not),
            _ => None,
        }
    }

    /// Whether this keyword names a declarable type.
    pub fn is_type_name(self) -> bool {
        info_for(self).category == KeywordCategory::TypeName
    }
}

/// Canonical spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata entry for a keyword id.
///
/// ## Notes
/// - [`KEYWORDS`] is laid out in [`KeywordId`] declaration order, so the id doubles as the index.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
    }
}
