//! Numeric literal policy: classify the scanner's literal text and convert it to a value.
//!
//! The scanner keeps numeric literals as text so no radix or precision information is lost.
//! [`classify`] picks the literal's sub-kind and [`NumericLiteral::parse`] performs the fallible
//! conversion the parser turns into either a constant node or a syntax diagnostic.

use thiserror::Error;

use crate::types::ValueType;

/// Sub-kind of a numeric literal, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Decimal,
    Octal,
    Hex,
    Float,
    Double,
}

/// Classify numeric literal text.
///
/// ## Notes
/// - Text with a `.` is `Float` when it ends in `f`/`F`, `Double` otherwise.
/// - A leading `0x`/`0X` is `Hex`; the single digit `0` is `Decimal`; any other leading `0` is
///   `Octal`.
///
/// ## Examples
/// ```rust
/// use tinyc_core::{NumericKind, classify};
///
/// assert_eq!(classify("0"), NumericKind::Decimal);
/// assert_eq!(classify("017"), NumericKind::Octal);
/// assert_eq!(classify("0x1F"), NumericKind::Hex);
/// assert_eq!(classify("3.14"), NumericKind::Double);
/// assert_eq!(classify("3.14f"), NumericKind::Float);
/// assert_eq!(classify("12"), NumericKind::Decimal);
/// ```
pub fn classify(text: &str) -> NumericKind {
    if text.contains('.') {
        if text.ends_with(['f', 'F']) {
            NumericKind::Float
        } else {
            NumericKind::Double
        }
    } else if text.starts_with("0x") || text.starts_with("0X") {
        NumericKind::Hex
    } else if text == "0" || !text.starts_with('0') {
        NumericKind::Decimal
    } else {
        NumericKind::Octal
    }
}

/// A converted numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericLiteral {
    Int(i32),
    Float(f32),
    Double(f64),
}

impl NumericLiteral {
    /// Convert literal text to a value according to [`classify`].
    ///
    /// ## Errors
    /// - [`LiteralError::Overflow`] if an integer literal does not fit in 32 signed bits.
    /// - [`LiteralError::InvalidDigits`] if the digits are not valid for the literal's radix.
    ///
    /// ## Examples
    /// ```rust
    /// use tinyc_core::NumericLiteral;
    ///
    /// assert_eq!(NumericLiteral::parse("017"), Ok(NumericLiteral::Int(15)));
    /// assert_eq!(NumericLiteral::parse("0x1F"), Ok(NumericLiteral::Int(31)));
    /// assert_eq!(NumericLiteral::parse(".5"), Ok(NumericLiteral::Double(0.5)));
    /// assert!(NumericLiteral::parse("99999999999").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<NumericLiteral, LiteralError> {
        match classify(text) {
            NumericKind::Decimal => parse_int(text, text, 10),
            NumericKind::Octal => parse_int(text, &text[1..], 8),
            NumericKind::Hex => parse_int(text, &text[2..], 16),
            NumericKind::Float => {
                let body = normalize_fraction(text.trim_end_matches(['f', 'F']));
                body.parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .map(NumericLiteral::Float)
                    .ok_or_else(|| LiteralError::InvalidDigits(text.to_string()))
            }
            NumericKind::Double => normalize_fraction(text)
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(NumericLiteral::Double)
                .ok_or_else(|| LiteralError::InvalidDigits(text.to_string())),
        }
    }

    /// The value type a constant of this literal resolves to.
    pub fn value_type(self) -> ValueType {
        match self {
            NumericLiteral::Int(_) => ValueType::Integer,
            NumericLiteral::Float(_) => ValueType::Float,
            NumericLiteral::Double(_) => ValueType::Double,
        }
    }
}

/// Failure to convert numeric literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("numeric literal '{0}' does not fit in a 32-bit integer")]
    Overflow(String),
    #[error("malformed numeric literal '{0}'")]
    InvalidDigits(String),
}

fn parse_int(text: &str, digits: &str, radix: u32) -> Result<NumericLiteral, LiteralError> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(LiteralError::InvalidDigits(text.to_string()));
    }
    i32::from_str_radix(digits, radix)
        .map(NumericLiteral::Int)
        .map_err(|_| LiteralError::Overflow(text.to_string()))
}

/// Give `12.` and `.5` a digit on both sides of the dot.
fn normalize_fraction(text: &str) -> String {
    let mut body = String::with_capacity(text.len() + 2);
    if text.starts_with('.') {
        body.push('0');
    }
    body.push_str(text);
    if text.ends_with('.') {
        body.push('0');
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify("0"), NumericKind::Decimal);
        assert_eq!(classify("017"), NumericKind::Octal);
        assert_eq!(classify("0x1F"), NumericKind::Hex);
        assert_eq!(classify("0X1f"), NumericKind::Hex);
        assert_eq!(classify("3.14"), NumericKind::Double);
        assert_eq!(classify("3.14f"), NumericKind::Float);
        assert_eq!(classify("3.14F"), NumericKind::Float);
        assert_eq!(classify("12"), NumericKind::Decimal);
        assert_eq!(classify("0.5"), NumericKind::Double);
        assert_eq!(classify("12."), NumericKind::Double);
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(NumericLiteral::parse("0"), Ok(NumericLiteral::Int(0)));
        assert_eq!(NumericLiteral::parse("42"), Ok(NumericLiteral::Int(42)));
        assert_eq!(NumericLiteral::parse("010"), Ok(NumericLiteral::Int(8)));
        assert_eq!(NumericLiteral::parse("0xff"), Ok(NumericLiteral::Int(255)));
        assert_eq!(NumericLiteral::parse("2147483647"), Ok(NumericLiteral::Int(i32::MAX)));
    }

    #[test]
    fn test_parse_integer_overflow() {
        assert_eq!(
            NumericLiteral::parse("2147483648"),
            Err(LiteralError::Overflow("2147483648".to_string()))
        );
        assert!(matches!(NumericLiteral::parse("0x100000000"), Err(LiteralError::Overflow(_))));
    }

    #[test]
    fn test_parse_invalid_digits() {
        assert!(matches!(NumericLiteral::parse("0x"), Err(LiteralError::InvalidDigits(_))));
        assert!(matches!(NumericLiteral::parse("019"), Err(LiteralError::InvalidDigits(_))));
    }

    #[test]
    fn test_parse_fractions() {
        assert_eq!(NumericLiteral::parse("3.5"), Ok(NumericLiteral::Double(3.5)));
        assert_eq!(NumericLiteral::parse("3.5f"), Ok(NumericLiteral::Float(3.5)));
        assert_eq!(NumericLiteral::parse("12."), Ok(NumericLiteral::Double(12.0)));
        assert_eq!(NumericLiteral::parse(".25F"), Ok(NumericLiteral::Float(0.25)));
    }

    #[test]
    fn test_value_type() {
        assert_eq!(NumericLiteral::Int(1).value_type(), ValueType::Integer);
        assert_eq!(NumericLiteral::Float(1.0).value_type(), ValueType::Float);
        assert_eq!(NumericLiteral::Double(1.0).value_type(), ValueType::Double);
    }

    #[test]
    fn test_error_messages_name_the_text() {
        let err = LiteralError::Overflow("99999999999".to_string());
        assert_eq!(err.to_string(), "numeric literal '99999999999' does not fit in a 32-bit integer");
    }
}
