//! Tag-aware HTML stripping.
//!
//! Removes markup from rendered HTML in a single byte-wise pass. Tag
//! delimiters and tag names are ASCII by the time content reaches this
//! layer (literal `<`/`>` in text have already been entity-escaped by the
//! renderer), so structural decisions only ever test ASCII bytes; content
//! bytes between tags are copied verbatim, which keeps multi-byte
//! characters intact without a rune-by-rune walk.

use std::sync::LazyLock;

use regex::Regex;

/// Line-oriented tags rewritten before tag scanning: newlines become
/// spaces, paragraph ends and line breaks become newlines. A single
/// simultaneous pass, so a replacement never feeds a later pattern.
#[allow(clippy::expect_used)]
static LINE_TAG_REPLACER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|</p>|<br />|<br>").expect("LINE_TAG_REPLACER regex"));

/// Strip HTML markup from `text`.
///
/// Tags named in `exclusions` are dropped wholesale: start tag, end tag,
/// and everything between them. Matching is ASCII case-insensitive and
/// requires the name to be followed by a space or `>`, so `fig` does not
/// match `<figcaption>`. An exclusion whose end tag never appears is
/// abandoned: the opening tag is stripped like any other and its content
/// kept. With no exclusions all tags are removed but their text remains.
///
/// Consecutive whitespace outside tags collapses to a single byte, and a
/// tag left unclosed swallows the rest of the input.
///
/// # Example
///
/// ```rust
/// use content_summary::strip_html;
///
/// let html = r#"Text: <figure><img src="xyz.png"><figcaption>A caption</figcaption></figure> More"#;
/// assert_eq!(strip_html(html, &["figcaption"]), "Text:  More");
/// ```
#[must_use]
pub fn strip_html<S: AsRef<str>>(text: &str, exclusions: &[S]) -> String {
    // Shortcut strings with no tags in them.
    if !text.contains(['<', '>']) {
        return text.to_string();
    }

    let text = LINE_TAG_REPLACER.replace_all(text, |caps: &regex::Captures| {
        if &caps[0] == "\n" {
            " "
        } else {
            "\n"
        }
    });

    // Case-folded shadow copy for exclusion matching. ASCII folding keeps
    // byte offsets identical between the two views.
    let lowered = if exclusions.is_empty() {
        None
    } else {
        Some(text.to_ascii_lowercase())
    };

    let bytes = text.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut in_tag = false;
    let mut is_space = false;
    let mut was_space = false;

    let mut i = 0;
    while i < bytes.len() {
        if !in_tag {
            is_space = false;
        }

        match bytes[i] {
            b'<' => {
                in_tag = true;
                if let Some(lowered) = &lowered {
                    if let Some(resume) = skip_excluded_element(lowered, i, exclusions) {
                        i = resume;
                        in_tag = false;
                        was_space = is_space;
                        continue;
                    }
                }
            }
            b'>' => in_tag = false,
            b => {
                if b.is_ascii_whitespace() {
                    is_space = true;
                }
                if !in_tag && (!is_space || !was_space) {
                    out.push(b);
                }
            }
        }

        was_space = is_space;
        i += 1;
    }

    // Skips start and end on ASCII delimiters, so the buffer is still
    // valid UTF-8 and the lossy conversion never fires.
    String::from_utf8_lossy(&out).into_owned()
}

/// Try each exclusion against the tag opening at `at` (the index of `<` in
/// `lowered`). On a confirmed match, returns the index just past the `>`
/// that closes the matching end tag. Returns `None` when no exclusion
/// matches or the element is never closed.
fn skip_excluded_element<S: AsRef<str>>(
    lowered: &str,
    at: usize,
    exclusions: &[S],
) -> Option<usize> {
    let bytes = lowered.as_bytes();
    for name in exclusions {
        let name = name.as_ref().to_ascii_lowercase();
        if !lowered[at + 1..].starts_with(&name) {
            continue;
        }
        // The name must end here, or `fig` would match `<figcaption>`.
        match bytes.get(at + 1 + name.len()) {
            Some(&(b' ' | b'>')) => {}
            _ => continue,
        }

        let end_tag = format!("</{name}");
        let Some(end_pos) = lowered[at..].find(&end_tag) else {
            continue;
        };
        let close = at + end_pos + end_tag.len();
        let Some(gt) = bytes[close..].iter().position(|&b| b == b'>') else {
            continue;
        };
        return Some(close + gt + 1);
    }
    None
}
