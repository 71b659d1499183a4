//! Compiler version information.
//!
//! The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time; prefer this
//! constant over repeating `env!("CARGO_PKG_VERSION")`.

/// The tinyc version string (for example, `0.1.0`).
pub const TINYC_VERSION: &str = env!("CARGO_PKG_VERSION");
