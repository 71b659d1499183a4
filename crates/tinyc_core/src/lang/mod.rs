//! Language vocabulary registries.
//!
//! Callers work with stable ids (`KeywordId`, `OperatorId`, `PunctuationId`) and look spellings
//! and metadata up in const tables instead of comparing strings across the compiler.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::as_str(KeywordId::Until), "until");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
