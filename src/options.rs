//! Configuration options for summary generation.
//!
//! The `SummaryOptions` struct carries the site-level settings the
//! summarization primitives read: the word budget and the tag exclusion
//! list. Field names serialize under the site-configuration keys
//! (`summaryLength`, `summaryExclusions`), so the struct deserializes
//! straight out of a site configuration block.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for summary generation.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use content_summary::SummaryOptions;
///
/// let options = SummaryOptions {
///     summary_length: 30,
///     summary_exclusions: vec!["figcaption".to_string()],
/// };
/// assert_ne!(options, SummaryOptions::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryOptions {
    /// Target number of words in a generated summary. Non-ASCII words are
    /// charged per rune rather than per word, so the budget doubles as a
    /// rune budget for languages written without spaces.
    ///
    /// Default: `70`
    pub summary_length: usize,

    /// Names of HTML elements dropped wholesale (tags and inner content)
    /// when stripping markup. Matched case-insensitively, in order. An
    /// empty list means "strip tags but keep all text".
    ///
    /// Default: empty
    pub summary_exclusions: Vec<String>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            summary_length: 70,
            summary_exclusions: Vec::new(),
        }
    }
}

impl SummaryOptions {
    /// Check that every exclusion entry is a usable tag name.
    ///
    /// A match requires the name to be immediately followed by a space or
    /// `>` in the tag text, so an empty name or one containing `<`, `>` or
    /// whitespace can never match and is a configuration mistake.
    pub fn validate(&self) -> Result<()> {
        for name in &self.summary_exclusions {
            if name.is_empty()
                || name
                    .chars()
                    .any(|c| c == '<' || c == '>' || c.is_whitespace())
            {
                return Err(Error::InvalidExclusion(name.clone()));
            }
        }
        Ok(())
    }
}
