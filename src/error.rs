//! Error types for content-summary.
//!
//! The summarization primitives are total functions over text and never
//! fail; errors only arise when binding configuration.

/// Error type for summary configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured tag exclusion can never match an element name.
    #[error("invalid tag exclusion {0:?}: names must be non-empty and contain no '<', '>' or whitespace")]
    InvalidExclusion(String),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
