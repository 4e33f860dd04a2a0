//! errors.rs - Custom error types for the echosh-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `echosh-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EchoshError {
    #[error("Unknown color name '{0}'; expected one of: black, red, green, yellow, blue, magenta, cyan, white, a bright* variant, or a LIGHT*_EX alias")]
    UnknownColor(String),

    #[error("Value nesting exceeds the supported maximum of {0} levels")]
    NestingTooDeep(usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
