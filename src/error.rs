//! Caller-visible error types
//!
//! Only caller-input problems surface here. Content-level anomalies
//! (unknown language, unknown glyph, unterminated string) degrade inside
//! the component that absorbed them; structural invariant violations are
//! engine defects and panic instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A non-built-in theme name with no matching resource in the provider
    #[error("theme '{name}' not found")]
    ThemeNotFound { name: String },

    /// A theme resource exists but its record fails validation
    #[error("theme '{name}' is invalid: {reason}")]
    InvalidTheme { name: String, reason: String },

    /// Empty source text while the caller disallowed empty input
    #[error("source text is empty")]
    EmptySource,
}
