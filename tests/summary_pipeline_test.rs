//! End-to-end tests for the summary pipeline: strip rendered HTML, count
//! words, truncate, and splice out the table of contents.

use content_summary::{
    extract_toc, total_words, trim_short_html, Summarizer, SummaryOptions, SUMMARY_DIVIDER,
};

fn summarizer(options: SummaryOptions) -> Summarizer {
    match Summarizer::new(options) {
        Ok(summarizer) => summarizer,
        Err(err) => panic!("expected valid options, got {err:?}"),
    }
}

#[test]
fn strip_then_truncate_produces_bounded_summary() {
    let rendered = "<h1>The Play</h1>\n<p>So shaken as we are, so wan with care.</p>\n<p>Find we a time for frighted peace to pant.</p>";
    let summarizer = summarizer(SummaryOptions {
        summary_length: 5,
        ..SummaryOptions::default()
    });

    let text = summarizer.strip_html(rendered);
    // paragraph ends become newlines, so the paragraphs stay separated
    assert!(text.contains('\n'));
    assert!(!text.contains('<'));

    let (summary, truncated) = summarizer.truncate_words_with_ellipsis(&text);
    assert!(truncated);
    assert!(summary.ends_with("&#8230;"));
    assert!(total_words(&summary) <= total_words(&text));
}

#[test]
fn exclusions_remove_captions_from_summaries() {
    let rendered = "<p>A diagram.</p><figure><img src=\"d.png\"><figcaption>Figure 1: internals</figcaption></figure><p>And its explanation.</p>";
    let summarizer = summarizer(SummaryOptions {
        summary_exclusions: vec!["figcaption".to_string(), "figure".to_string()],
        ..SummaryOptions::default()
    });

    let text = summarizer.strip_html(rendered);
    assert!(!text.contains("Figure 1"));
    assert!(text.contains("A diagram."));
    assert!(text.contains("And its explanation."));
}

#[test]
fn toc_is_split_out_and_body_summarized() {
    let rendered = b"<nav>\n<ul>\n<li><a href=\"#intro\">Intro</a></li>\n<li><a href=\"#end\">End</a></li>\n</ul>\n</nav>\n<p>Intro text. More to come.</p>";
    let (body, toc) = extract_toc(rendered);

    let toc = match toc {
        Some(toc) => toc,
        None => panic!("expected a TOC block"),
    };
    assert!(toc.starts_with(b"<nav id=\"TableOfContents\">"));
    assert!(!body
        .windows(b"TableOfContents".len())
        .any(|w| w == b"TableOfContents"));

    let body = String::from_utf8_lossy(&body);
    let summarizer = summarizer(SummaryOptions {
        summary_length: 1,
        ..SummaryOptions::default()
    });
    let text = summarizer.strip_html(&body);
    let (summary, truncated) = summarizer.truncate_words_to_whole_sentence(&text);
    assert_eq!(summary, "Intro text.");
    assert!(truncated);
}

#[test]
fn divider_marks_explicit_summaries() {
    let content = b"Summary part.<!--more-->Rest of the article.".as_slice();
    let split = content
        .windows(SUMMARY_DIVIDER.len())
        .position(|w| w == SUMMARY_DIVIDER);
    assert_eq!(split, Some(13));
}

#[test]
fn short_render_output_loses_its_paragraph_wrapper() {
    let rendered = b"<p>Just one line.</p>\n";
    assert_eq!(trim_short_html(rendered), b"Just one line.");
}

#[test]
fn options_round_trip_through_site_config_json() {
    let json = r#"{"summaryLength": 12, "summaryExclusions": ["nav", "figcaption"]}"#;
    let options: SummaryOptions = match serde_json::from_str(json) {
        Ok(options) => options,
        Err(err) => panic!("expected valid config, got {err}"),
    };
    let summarizer = summarizer(options);
    assert_eq!(summarizer.summary_length(), 12);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let options = SummaryOptions {
        summary_exclusions: vec!["not a tag".to_string()],
        ..SummaryOptions::default()
    };
    let err = match Summarizer::new(options) {
        Err(err) => err,
        Ok(_) => panic!("expected invalid exclusion to be rejected"),
    };
    assert!(err.to_string().contains("not a tag"));
}
