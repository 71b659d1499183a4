//! Small predicates on [`TokenKind`] so the parser reads in grammar terms.

use crate::lexer::TokenKind;
use tinyc_core::lang::keywords::KeywordId;
use tinyc_core::lang::operators::OperatorId;
use tinyc_core::lang::punctuation::PunctuationId;

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::EndFile)
    }

    /// The operator id, if this is an operator token.
    pub fn operator(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether a statement can begin with this token.
    pub fn starts_statement(&self) -> bool {
        match self {
            TokenKind::Keyword(id) => {
                matches!(
                    id,
                    KeywordId::If | KeywordId::Repeat | KeywordId::Do | KeywordId::Read | KeywordId::Write
                ) || id.is_type_name()
            }
            TokenKind::Ident(_) => true,
            _ => false,
        }
    }

    /// Whether this token ends a statement sequence (`else`, `end`, `until`, `while`, end of file).
    pub fn ends_sequence(&self) -> bool {
        match self {
            TokenKind::EndFile => true,
            TokenKind::Keyword(id) => {
                matches!(id, KeywordId::Else | KeywordId::End | KeywordId::Until | KeywordId::While)
            }
            _ => false,
        }
    }
}
