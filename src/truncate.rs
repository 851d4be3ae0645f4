//! Length-bounded summary truncation.
//!
//! Three sibling strategies over a shared word budget: cut at an exact
//! rune boundary, cut at the end of a whole sentence, or cut at a word
//! boundary and append an ellipsis. All three respect rune integrity; the
//! sentence variant additionally respects sentence boundaries.

use crate::error::Result;
use crate::options::SummaryOptions;
use crate::strip;

/// HTML-entity ellipsis appended to truncated summaries.
const HTML_ELLIPSIS: &str = "&#8230;";
/// Literal three-dot ellipsis recognized at a cut point.
const ASCII_ELLIPSIS: &str = "...";
/// Unicode ellipsis recognized at a cut point.
const UNICODE_ELLIPSIS: char = '\u{2026}';

/// Binds summary configuration to the truncation operations.
///
/// Each call reads the configured budget fresh, so a `Summarizer` behaves
/// like a bundle of pure functions over its options; it owns them and is
/// safe to share across threads.
///
/// # Example
///
/// ```rust
/// use content_summary::{Summarizer, SummaryOptions};
///
/// let summarizer = Summarizer::new(SummaryOptions {
///     summary_length: 2,
///     ..SummaryOptions::default()
/// })?;
///
/// let (summary, truncated) =
///     summarizer.truncate_words_with_ellipsis("So shaken as we are, so wan with care");
/// assert_eq!(summary, "So shaken&#8230;");
/// assert!(truncated);
/// # Ok::<(), content_summary::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    options: SummaryOptions,
}

impl Summarizer {
    /// Create a summarizer, validating the configured tag exclusions.
    pub fn new(options: SummaryOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The configured word/rune budget.
    #[must_use]
    pub fn summary_length(&self) -> usize {
        self.options.summary_length
    }

    /// Strip HTML from `text` using the configured tag exclusions.
    #[must_use]
    pub fn strip_html(&self, text: &str) -> String {
        strip::strip_html(text, &self.options.summary_exclusions)
    }

    /// Truncate `words` once the budget is spent, cutting mid-word at an
    /// exact rune boundary when necessary.
    ///
    /// A pure-ASCII word costs one budget unit regardless of its length;
    /// a word containing multi-byte runes costs one unit per rune. Returns
    /// the space-joined result and whether anything was cut off.
    #[must_use]
    pub fn truncate_words_by_rune<S: AsRef<str>>(&self, words: &[S]) -> (String, bool) {
        let budget = self.options.summary_length;
        let mut count = 0;

        for (index, word) in words.iter().enumerate() {
            let word = word.as_ref();
            if count >= budget {
                return (join_words(&words[..index]), true);
            }
            let rune_count = word.chars().count();
            if word.len() == rune_count {
                count += 1;
            } else if count + rune_count < budget {
                count += rune_count;
            } else {
                // Budget runs out inside this word; find the boundary.
                for (offset, _) in word.char_indices() {
                    if count >= budget {
                        let mut truncated = join_words(&words[..index]);
                        if !truncated.is_empty() {
                            truncated.push(' ');
                        }
                        truncated.push_str(&word[..offset]);
                        return (truncated, true);
                    }
                    count += 1;
                }
            }
        }

        (join_words(words), false)
    }

    /// Truncate `text` to whole sentences, limited by the word budget.
    ///
    /// Counts whitespace boundaries up to the budget, then extends the cut
    /// to the next sentence-ending rune. When the text has no whitespace
    /// at all, or no sentence end follows the boundary, the original text
    /// comes back untruncated.
    #[must_use]
    pub fn truncate_words_to_whole_sentence(&self, text: &str) -> (String, bool) {
        let budget = self.options.summary_length;
        let trimmed = text.trim();

        let mut word_count = 0;
        let mut last_word_index = None;
        for (i, r) in trimmed.char_indices() {
            if r.is_whitespace() {
                word_count += 1;
                last_word_index = Some(i);
                if word_count >= budget {
                    break;
                }
            }
        }

        let Some(boundary) = last_word_index else {
            return (text.to_string(), false);
        };

        let mut end_index = None;
        for (j, r) in trimmed[boundary..].char_indices() {
            if is_end_of_sentence(r) {
                end_index = Some(boundary + j + r.len_utf8());
                break;
            }
        }

        let Some(end) = end_index else {
            return (text.to_string(), false);
        };

        (trimmed[..end].trim().to_string(), end < trimmed.len())
    }

    /// Truncate `text` at the last word boundary inside the budget and
    /// append an HTML-entity ellipsis.
    ///
    /// An ellipsis already sitting at the cut point is normalized rather
    /// than doubled: a Unicode `…` or literal `...` becomes the entity
    /// form, an existing entity is left alone. After other punctuation the
    /// entity is appended with a separating space, mid-word without one.
    #[must_use]
    pub fn truncate_words_with_ellipsis(&self, text: &str) -> (String, bool) {
        let budget = self.options.summary_length;
        let runes: Vec<char> = text.trim().chars().collect();

        if runes.is_empty() {
            return (String::new(), false);
        }
        if budget < 1 {
            return (String::new(), true);
        }

        let mut word_count = 0;
        let mut last_word_index = 0;
        for (i, r) in runes.iter().enumerate() {
            if r.is_whitespace() {
                word_count += 1;
                last_word_index = i;
                if word_count >= budget {
                    break;
                }
            }
        }

        if word_count < budget {
            return (runes.into_iter().collect(), false);
        }

        // `last_word_index` is the space after the last word that fits.
        let context = classify_cut(&runes[..last_word_index]);
        let cut = match context {
            CutContext::UnicodeEllipsis => last_word_index - 1,
            CutContext::AsciiEllipsis => last_word_index - ASCII_ELLIPSIS.len(),
            _ => last_word_index,
        };

        let mut out: String = runes[..cut].iter().collect();
        match context {
            CutContext::HtmlEllipsis => {}
            CutContext::Punctuation => {
                out.push(' ');
                out.push_str(HTML_ELLIPSIS);
            }
            _ => out.push_str(HTML_ELLIPSIS),
        }
        (out, true)
    }
}

/// Sentence-terminating runes. A deliberately small set: quotes and
/// newlines close a sentence, language-specific punctuation does not.
fn is_end_of_sentence(r: char) -> bool {
    matches!(r, '.' | '?' | '!' | '"' | '\n')
}

/// What sits immediately before a prospective cut point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CutContext {
    /// Mid-word or after a non-punctuation rune.
    Word,
    /// An HTML-entity ellipsis is already there.
    HtmlEllipsis,
    /// A Unicode ellipsis is already there.
    UnicodeEllipsis,
    /// A literal `...` is already there.
    AsciiEllipsis,
    /// Any other punctuation.
    Punctuation,
}

fn classify_cut(head: &[char]) -> CutContext {
    match head.last() {
        Some(&UNICODE_ELLIPSIS) => CutContext::UnicodeEllipsis,
        Some(&c) if c.is_ascii_punctuation() => {
            if ends_with(head, HTML_ELLIPSIS) {
                CutContext::HtmlEllipsis
            } else if ends_with(head, ASCII_ELLIPSIS) {
                CutContext::AsciiEllipsis
            } else {
                CutContext::Punctuation
            }
        }
        _ => CutContext::Word,
    }
}

fn ends_with(runes: &[char], suffix: &str) -> bool {
    let n = suffix.chars().count();
    runes.len() >= n && runes[runes.len() - n..].iter().copied().eq(suffix.chars())
}

fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word.as_ref());
    }
    out
}
