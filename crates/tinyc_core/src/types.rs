//! The value-type lattice shared by the parser (literal types) and the analyzer.

use std::fmt;

use crate::lang::keywords::KeywordId;

/// Resolved type of an expression or declared type of a variable.
///
/// ## Notes
/// - `Void` is not a program type. It marks an expression that already failed a check, so that
///   consumers of its type do not report the same failure again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Void,
    Integer,
    Boolean,
    String,
    Float,
    Double,
}

impl ValueType {
    /// Map a type-name keyword (`int`, `bool`, ...) to its value type.
    pub fn from_keyword(id: KeywordId) -> Option<ValueType> {
        match id {
            KeywordId::Int => Some(ValueType::Integer),
            KeywordId::Bool => Some(ValueType::Boolean),
            KeywordId::String => Some(ValueType::String),
            KeywordId::Float => Some(ValueType::Float),
            KeywordId::Double => Some(ValueType::Double),
            _ => None,
        }
    }

    pub fn as_numeric(self) -> Option<NumericTy> {
        match self {
            ValueType::Integer => Some(NumericTy::Integer),
            ValueType::Float => Some(NumericTy::Float),
            ValueType::Double => Some(NumericTy::Double),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        self.as_numeric().is_some()
    }

    pub fn is_void(self) -> bool {
        self == ValueType::Void
    }

    /// Whether a value of type `actual` may be stored into a variable of type `self`.
    ///
    /// ## Notes
    /// - `String` and `Boolean` targets require exact equality.
    /// - Numeric targets accept any numeric value; narrowing and widening are both implicit.
    /// - `Void` is never accepted and never accepts.
    ///
    /// ## Examples
    /// ```rust
    /// use tinyc_core::ValueType;
    ///
    /// assert!(ValueType::Integer.accepts(ValueType::Double));
    /// assert!(!ValueType::Boolean.accepts(ValueType::Integer));
    /// assert!(!ValueType::String.accepts(ValueType::Void));
    /// ```
    pub fn accepts(self, actual: ValueType) -> bool {
        match self {
            ValueType::Void => false,
            ValueType::String | ValueType::Boolean => self == actual,
            ValueType::Integer | ValueType::Float | ValueType::Double => actual.is_numeric(),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Void => "void",
            ValueType::Integer => "int",
            ValueType::Boolean => "bool",
            ValueType::String => "string",
            ValueType::Float => "float",
            ValueType::Double => "double",
        };
        f.write_str(name)
    }
}

/// Numeric category, ordered by the promotion lattice `Integer < Float < Double`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericTy {
    Integer,
    Float,
    Double,
}

impl From<NumericTy> for ValueType {
    fn from(ty: NumericTy) -> Self {
        match ty {
            NumericTy::Integer => ValueType::Integer,
            NumericTy::Float => ValueType::Float,
            NumericTy::Double => ValueType::Double,
        }
    }
}

/// Result category of a binary arithmetic operation.
///
/// Double dominates Float, which dominates Integer.
///
/// ## Examples
/// ```rust
/// use tinyc_core::{NumericTy, promote};
///
/// assert_eq!(promote(NumericTy::Integer, NumericTy::Float), NumericTy::Float);
/// assert_eq!(promote(NumericTy::Float, NumericTy::Double), NumericTy::Double);
/// ```
pub fn promote(lhs: NumericTy, rhs: NumericTy) -> NumericTy {
    lhs.max(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_lattice() {
        use NumericTy::*;
        assert_eq!(promote(Integer, Integer), Integer);
        assert_eq!(promote(Integer, Float), Float);
        assert_eq!(promote(Float, Integer), Float);
        assert_eq!(promote(Integer, Double), Double);
        assert_eq!(promote(Double, Float), Double);
    }

    #[test]
    fn test_accepts_numeric_any_direction() {
        for target in [ValueType::Integer, ValueType::Float, ValueType::Double] {
            for actual in [ValueType::Integer, ValueType::Float, ValueType::Double] {
                assert!(target.accepts(actual), "{target} should accept {actual}");
            }
            assert!(!target.accepts(ValueType::Boolean));
            assert!(!target.accepts(ValueType::String));
        }
    }

    #[test]
    fn test_accepts_exact_for_string_and_bool() {
        assert!(ValueType::String.accepts(ValueType::String));
        assert!(ValueType::Boolean.accepts(ValueType::Boolean));
        assert!(!ValueType::String.accepts(ValueType::Integer));
        assert!(!ValueType::Boolean.accepts(ValueType::String));
    }

    #[test]
    fn test_void_is_never_compatible() {
        assert!(!ValueType::Void.accepts(ValueType::Void));
        assert!(!ValueType::Double.accepts(ValueType::Void));
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(ValueType::from_keyword(KeywordId::Int), Some(ValueType::Integer));
        assert_eq!(ValueType::from_keyword(KeywordId::String), Some(ValueType::String));
        assert_eq!(ValueType::from_keyword(KeywordId::If), None);
    }
}
