//! Error types for `saham`.
//!
//! One unified error type for file-level failures. Finer-grained problems
//! (a malformed cell, a malformed query condition) never surface here; they
//! degrade to defaults at the point of use.

use thiserror::Error;

/// Result type alias for `saham` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and querying market exports.
///
/// Error codes follow the pattern `SAHAM-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (SAHAM-001).
    #[error("[SAHAM-001] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook or CSV decoding failed (SAHAM-002).
    #[error("[SAHAM-002] Decode error: {0}")]
    Decode(String),

    /// Workbook has no readable worksheet (SAHAM-003).
    #[error("[SAHAM-003] Workbook '{0}' has no worksheet to read")]
    EmptySheet(String),

    /// Query parsing error (SAHAM-004).
    #[error("[SAHAM-004] Query error: {0}")]
    Query(String),

    /// Configuration error (SAHAM-005).
    #[error("[SAHAM-005] Configuration error: {0}")]
    Config(String),

    /// Serialization error (SAHAM-006).
    #[error("[SAHAM-006] Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns the error code (e.g., "SAHAM-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "SAHAM-001",
            Self::Decode(_) => "SAHAM-002",
            Self::EmptySheet(_) => "SAHAM-003",
            Self::Query(_) => "SAHAM-004",
            Self::Config(_) => "SAHAM-005",
            Self::Serialization(_) => "SAHAM-006",
        }
    }
}

impl From<crate::query::ParseError> for Error {
    fn from(err: crate::query::ParseError) -> Self {
        Self::Query(err.to_string())
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
