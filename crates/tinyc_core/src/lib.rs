//! Shared, pure vocabulary and semantic policy for the tinyc front end.
//!
//! This crate is dependency-light and free of IO. Both the scanner/parser (`tinyc_syntax`) and the
//! semantic analyzer (`tinyc`) consume it so that spellings, the type lattice and numeric-literal
//! rules are defined exactly once.
//!
//! ## Notes
//!
//! - [`lang`] holds the registries (keywords, operators, punctuation) keyed by stable ids.
//! - [`types`] holds [`ValueType`] and the numeric promotion lattice.
//! - [`numeric`] classifies numeric literal text and converts it to concrete values.

#![forbid(unsafe_code)]

pub mod lang;
pub mod numeric;
pub mod types;

pub use numeric::{LiteralError, NumericKind, NumericLiteral, classify};
pub use types::{NumericTy, ValueType, promote};
