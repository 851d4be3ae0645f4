//! Paragraph trimming for short HTML fragments.

use memchr::memmem;

/// Remove the enclosing `<p>`/`</p>` pair from HTML that consists of a
/// single paragraph.
///
/// Fires only when the input holds exactly one `<p` opening tag and its
/// `</p>` is the last closing tag of any kind, i.e. the paragraph wraps
/// the whole fragment. Surrounding ASCII whitespace is trimmed whenever
/// the condition holds, which includes plain text with no markup at all.
/// Returns a subslice of the input; nothing is copied.
#[must_use]
pub fn trim_short_html(input: &[u8]) -> &[u8] {
    let first_opening_p = memmem::find(input, b"<p");
    let last_opening_p = memmem::rfind(input, b"<p");
    let last_closing_p = memmem::rfind(input, b"</p>");
    let last_closing = memmem::rfind(input, b"</");

    if first_opening_p != last_opening_p || last_closing_p != last_closing {
        return input;
    }

    let mut out = input.trim_ascii();
    if let Some(stripped) = out.strip_prefix(b"<p>") {
        out = stripped;
    }
    if let Some(stripped) = out.strip_suffix(b"</p>") {
        out = stripped;
    }
    out.trim_ascii()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_single_enclosing_paragraph() {
        let cases: &[(&[u8], &[u8])] = &[
            (b"", b""),
            (b"Plain text", b"Plain text"),
            (b"  \t\n Whitespace text\n\n", b"Whitespace text"),
            (b"<p>Simple paragraph</p>", b"Simple paragraph"),
            (
                b"\n  \n \t  <p> \t Whitespace\nHTML  \n\t </p>\n\t",
                b"Whitespace\nHTML",
            ),
            (
                b"<p>Multiple</p><p>paragraphs</p>",
                b"<p>Multiple</p><p>paragraphs</p>",
            ),
            (
                b"<p>Nested<p>paragraphs</p></p>",
                b"<p>Nested<p>paragraphs</p></p>",
            ),
            (
                b"<p>Hello</p>\n<ul>\n<li>list1</li>\n<li>list2</li>\n</ul>",
                b"<p>Hello</p>\n<ul>\n<li>list1</li>\n<li>list2</li>\n</ul>",
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(
                trim_short_html(input),
                *expected,
                "{:?}",
                String::from_utf8_lossy(input)
            );
        }
    }
}
