//! Table-of-contents extraction.
//!
//! Rendered content may embed one auto-generated `<nav><ul>…</ul></nav>`
//! block. [`extract_toc`] splits that block out of the content so callers
//! can place body text and TOC in different output locations.

use std::borrow::Cow;

use memchr::memmem;

/// Opening marker of a generated TOC block.
const TOC_OPEN: &[u8] = b"<nav>\n<ul>";
/// Closing marker of a generated TOC block.
const TOC_CLOSE: &[u8] = b"</ul>\n</nav>";
/// Probe distinguishing a generated TOC from an unrelated nav element.
const TOC_PROBE: &[u8] = b"<li><a href=\"#";
/// Opening tag carried by the extracted block.
const TOC_REPLACEMENT: &[u8] = b"<nav id=\"TableOfContents\">\n<ul>";
/// The nav block left behind when a document has no headings.
const EMPTY_NAV: &[u8] = b"<nav>\n</nav>\n\n";

/// How far past the opening marker the probe may appear.
const PROBE_WINDOW: usize = 70;

/// Split an embedded table-of-contents block out of rendered content.
///
/// Returns the content with the block excised and, when a block was found,
/// the block itself with its `<nav>` rewritten to
/// `<nav id="TableOfContents">`. Content without a generated TOC is
/// returned borrowed and unmodified, except that content-less
/// `<nav>\n</nav>\n\n` leftovers are deleted.
///
/// A nav element only counts as the TOC when `<li><a href="#` appears
/// within [`PROBE_WINDOW`] bytes of the opening marker; anything else is
/// left in place, as is a block whose closing `</ul>\n</nav>` never
/// appears.
#[must_use]
pub fn extract_toc(content: &[u8]) -> (Cow<'_, [u8]>, Option<Vec<u8>>) {
    if memmem::find(content, b"<nav>").is_none() {
        return (Cow::Borrowed(content), None);
    }

    let Some(start) = memmem::find(content, TOC_OPEN) else {
        return (strip_empty_nav(content), None);
    };

    // Peek ahead to see if this nav element is actually the right one.
    let peek_end = content.len().min(start + PROBE_WINDOW);
    if memmem::find(&content[start..peek_end], TOC_PROBE).is_none() {
        return (Cow::Borrowed(content), None);
    }

    let Some(close) = memmem::find(&content[start..], TOC_CLOSE) else {
        return (Cow::Borrowed(content), None);
    };
    let end = start + close + TOC_CLOSE.len();

    let mut remainder = Vec::with_capacity(content.len() - (end - start));
    remainder.extend_from_slice(&content[..start]);
    remainder.extend_from_slice(&content[end..]);

    let body = &content[start + TOC_OPEN.len()..end];
    let mut toc = Vec::with_capacity(TOC_REPLACEMENT.len() + body.len());
    toc.extend_from_slice(TOC_REPLACEMENT);
    toc.extend_from_slice(body);

    (Cow::Owned(remainder), Some(toc))
}

/// Delete content-less nav blocks.
fn strip_empty_nav(content: &[u8]) -> Cow<'_, [u8]> {
    if memmem::find(content, EMPTY_NAV).is_none() {
        return Cow::Borrowed(content);
    }
    let mut out = Vec::with_capacity(content.len());
    let mut rest = content;
    while let Some(pos) = memmem::find(rest, EMPTY_NAV) {
        out.extend_from_slice(&rest[..pos]);
        rest = &rest[pos + EMPTY_NAV.len()..];
    }
    out.extend_from_slice(rest);
    Cow::Owned(out)
}
