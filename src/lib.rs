//! # content-summary
//!
//! Content-summarization primitives for a document-rendering pipeline.
//!
//! This library turns rendered HTML into length-bounded plain-text
//! summaries. It strips markup while honoring a configurable set of tag
//! exclusions, splits auto-generated table-of-contents blocks out of
//! content, truncates text on word, rune, and sentence boundaries, and
//! counts words without allocating.
//!
//! It is not an HTML parser: stripping is a single tag-aware pass over
//! bytes, which is all that well-formed rendered output needs, and
//! malformed markup degrades into deterministic partial output rather
//! than an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use content_summary::{Summarizer, SummaryOptions};
//!
//! let summarizer = Summarizer::new(SummaryOptions {
//!     summary_length: 1,
//!     ..SummaryOptions::default()
//! })?;
//!
//! let text = summarizer.strip_html("<p>To be. Or not to be.</p>");
//! let (summary, truncated) = summarizer.truncate_words_to_whole_sentence(&text);
//! assert_eq!(summary, "To be.");
//! assert!(truncated);
//! # Ok::<(), content_summary::Error>(())
//! ```
//!
//! ## Components
//!
//! - [`strip_html`] / [`Summarizer::strip_html`] — tag-aware stripping
//!   with whole-element exclusions
//! - [`extract_toc`] — table-of-contents extraction from rendered content
//! - [`Summarizer`] — rune-, sentence-, and ellipsis-bounded truncation
//! - [`total_words`] — O(n) word counting
//!
//! All operations are pure and safe to call concurrently; the only
//! fallible step is validating configuration in [`Summarizer::new`].

mod error;
mod options;
mod strip;
mod toc;
mod trim;
mod truncate;
mod words;

pub use error::{Error, Result};
pub use options::SummaryOptions;
pub use strip::strip_html;
pub use toc::extract_toc;
pub use trim::trim_short_html;
pub use truncate::Summarizer;
pub use words::total_words;

/// Marks where explicit content summarization ends in source content.
pub const SUMMARY_DIVIDER: &[u8] = b"<!--more-->";
