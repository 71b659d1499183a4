//! Operator vocabulary.
//!
//! Symbol operators (`:=`, `<=`, `%`, ...) and the word operators `and`, `or`, `not`, each with a
//! category used by the parser to pick the precedence level it belongs to.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Word operators have [`OperatorInfo::is_keyword_spelling`] set; their spellings are also
//!   reserved in [`crate::lang::keywords`].
//! - Precedence is encoded by the grammar (one parser routine per [`OperatorCategory`]), not by
//!   numeric levels.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::info_for(OperatorId::Percent).category, OperatorCategory::Multiplicative);
//! ```

/// Whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Grammar level an operator belongs to, lowest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorCategory {
    Assignment,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Assign,

    // Equality / relational
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Word operators
    Or,
    And,
    Not,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
}

/// Registry of all operators, in [`OperatorId`] declaration order.
pub const OPERATORS: &[OperatorInfo] = &[
    // Assignment
    op(OperatorId::Assign, ":=", OperatorCategory::Assignment, Fixity::Infix, false),
    // Equality / relational
    op(OperatorId::Eq, "=", OperatorCategory::Equality, Fixity::Infix, false),
    op(OperatorId::NotEq, "!=", OperatorCategory::Equality, Fixity::Infix, false),
    op(OperatorId::Lt, "<", OperatorCategory::Relational, Fixity::Infix, false),
    op(OperatorId::Gt, ">", OperatorCategory::Relational, Fixity::Infix, false),
    op(OperatorId::LtEq, "<=", OperatorCategory::Relational, Fixity::Infix, false),
    op(OperatorId::GtEq, ">=", OperatorCategory::Relational, Fixity::Infix, false),
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Additive, Fixity::Infix, false),
    op(OperatorId::Minus, "-", OperatorCategory::Additive, Fixity::Infix, false),
    op(OperatorId::Star, "*", OperatorCategory::Multiplicative, Fixity::Infix, false),
    op(OperatorId::Slash, "/", OperatorCategory::Multiplicative, Fixity::Infix, false),
    op(OperatorId::Percent, "%", OperatorCategory::Multiplicative, Fixity::Infix, false),
    // Word operators
    op(OperatorId::Or, "or", OperatorCategory::LogicalOr, Fixity::Infix, true),
    op(OperatorId::And, "and", OperatorCategory::LogicalAnd, Fixity::Infix, true),
    op(OperatorId::Not, "not", OperatorCategory::Unary, Fixity::Prefix, true),
];

/// Canonical spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Full metadata entry for an operator id.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`], `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    category: OperatorCategory,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        fixity,
        is_keyword_spelling,
    }
}
