//! Error types for quotabar.
//!
//! Uses `thiserror` for structured error types.
//!
//! The error surface here is deliberately small: almost everything in this
//! crate is a total function that degrades malformed input to a zero value
//! instead of failing, so the quota display never crashes on unexpected
//! provider responses. The one exception is reset-timestamp parsing, where a
//! silently wrong countdown would be worse than a visible failure.

use thiserror::Error;

/// Main error type for quotabar operations.
#[derive(Error, Debug)]
pub enum QuotabarError {
    /// A reset timestamp could not be parsed as an RFC 3339 instant.
    #[error("invalid reset timestamp: {input}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },
}

impl QuotabarError {
    /// The raw input that failed to parse, if this error carries one.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::InvalidTimestamp { input, .. } => Some(input.as_str()),
        }
    }
}

/// Result type alias for quotabar operations.
pub type Result<T> = std::result::Result<T, QuotabarError>;
