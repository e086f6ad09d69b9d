//! Markdown → HTML body transform.
//!
//! Parsing is delegated to `pulldown-cmark` with GFM tables enabled (fenced
//! code blocks are core CommonMark). On top of the parser output this module
//! adds the two table-of-contents behaviours the source documents rely on:
//!
//! 1. Every heading gets a deterministic `id` attribute derived from its
//!    text, so intra-document links and the generated TOC have stable
//!    anchors. Duplicate headings get `-1`, `-2`, … suffixes.
//! 2. A paragraph consisting solely of `[TOC]` is replaced by a nested list
//!    of links to every heading in the document.
//!
//! The transform is a pure function of its input: same Markdown in, byte-for-
//! byte identical HTML out.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::collections::HashMap;

/// The paragraph the TOC is substituted for.
const TOC_MARKER: &str = "<p>[TOC]</p>";

/// One heading discovered during the transform, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading depth, 1–6.
    pub rank: usize,
    /// Anchor id assigned to the heading.
    pub slug: String,
    /// Plain text of the heading.
    pub text: String,
}

/// Convert Markdown to an HTML body fragment.
///
/// Enables tables, strikethrough, and footnotes; assigns heading anchors and
/// expands a `[TOC]` marker paragraph. The result is a body fragment only —
/// [`crate::pipeline::template::wrap_document`] turns it into a full page.
pub fn to_html_body(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let events: Vec<Event> = Parser::new_ext(markdown, options).collect();

    // First pass: collect heading texts so anchors can be assigned before
    // the events are re-emitted.
    let entries = collect_headings(&events);

    // Second pass: re-emit the event stream with anchor ids attached.
    let mut heading_idx = 0usize;
    let events = events.into_iter().map(|ev| match ev {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => {
            let slug = entries
                .get(heading_idx)
                .map(|e| e.slug.clone())
                .unwrap_or_default();
            heading_idx += 1;
            let id = id.or(Some(CowStr::from(slug)));
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        other => other,
    });

    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, events);

    if body.contains(TOC_MARKER) {
        body = body.replacen(TOC_MARKER, &build_toc(&entries), 1);
    }
    body
}

/// Walk the event stream and return every heading with its assigned slug.
fn collect_headings(events: &[Event]) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for ev in events {
        match ev {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_rank(*level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((rank, text)) = current.take() {
                    entries.push(TocEntry {
                        rank,
                        slug: String::new(),
                        text,
                    });
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some((_, ref mut text)) = current {
                    text.push_str(t);
                }
            }
            _ => {}
        }
    }

    // Assign slugs with duplicate suffixes, in document order.
    let mut seen: HashMap<String, usize> = HashMap::new();
    for entry in &mut entries {
        let base = slugify(&entry.text);
        let n = seen.entry(base.clone()).or_insert(0);
        entry.slug = if *n == 0 {
            base
        } else {
            format!("{base}-{n}")
        };
        *n += 1;
    }
    entries
}

fn heading_rank(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

static RE_NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Lowercase the text and collapse every non-alphanumeric run to a single
/// hyphen. Empty results (e.g. a heading of only punctuation) become
/// `"section"` so the anchor is never blank.
pub(crate) fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let slug = RE_NON_ALNUM
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string();
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Render the TOC as nested lists inside `<div class="toc">`, matching the
/// `.toc` rules in the style templates.
fn build_toc(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return "<div class=\"toc\"></div>".to_string();
    }

    let min_rank = entries.iter().map(|e| e.rank).min().unwrap_or(1);
    let mut out = String::from("<div class=\"toc\">\n");
    let mut depth = min_rank - 1;

    for entry in entries {
        let rank = entry.rank.max(min_rank);
        while depth < rank {
            out.push_str("<ul>\n");
            depth += 1;
        }
        while depth > rank {
            out.push_str("</ul>\n");
            depth -= 1;
        }
        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>\n",
            entry.slug,
            escape_html(&entry.text)
        ));
    }
    while depth > min_rank - 1 {
        out.push_str("</ul>\n");
        depth -= 1;
    }
    out.push_str("</div>");
    out
}

/// Minimal HTML escape for text interpolated into generated markup.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_table_fenced_code_and_headings() {
        let md = "# Title\n\n## Section\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n```rust\nfn main() {}\n```\n";
        let html = to_html_body(md);
        assert!(html.contains("<h1"), "missing h1: {html}");
        assert!(html.contains("<h2"), "missing h2: {html}");
        assert!(html.contains("<table>"), "missing table: {html}");
        assert!(html.contains("<pre><code"), "missing code block: {html}");
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn headings_get_anchor_ids() {
        let html = to_html_body("# Design Overview\n\n## API Surface\n");
        assert!(html.contains("id=\"design-overview\""), "got: {html}");
        assert!(html.contains("id=\"api-surface\""), "got: {html}");
    }

    #[test]
    fn duplicate_headings_get_suffixed_anchors() {
        let html = to_html_body("## Results\n\ntext\n\n## Results\n\nmore\n\n## Results\n");
        assert!(html.contains("id=\"results\""));
        assert!(html.contains("id=\"results-1\""));
        assert!(html.contains("id=\"results-2\""));
    }

    #[test]
    fn toc_marker_expands_to_heading_links() {
        let md = "[TOC]\n\n# Intro\n\n## Setup\n\n## Usage\n";
        let html = to_html_body(md);
        assert!(!html.contains("[TOC]"), "marker should be replaced: {html}");
        assert!(html.contains("<div class=\"toc\">"));
        assert!(html.contains("<a href=\"#intro\">Intro</a>"));
        assert!(html.contains("<a href=\"#setup\">Setup</a>"));
        assert!(html.contains("<a href=\"#usage\">Usage</a>"));
    }

    #[test]
    fn no_toc_marker_means_no_toc_div() {
        let html = to_html_body("# Just a doc\n\nParagraph.\n");
        assert!(!html.contains("class=\"toc\""));
    }

    #[test]
    fn toc_nesting_follows_heading_ranks() {
        let md = "[TOC]\n\n# A\n\n## A1\n\n## A2\n\n# B\n";
        let html = to_html_body(md);
        let toc_start = html.find("<div class=\"toc\">").unwrap();
        let toc = &html[toc_start..html[toc_start..].find("</div>").unwrap() + toc_start];
        // Two list levels open inside the TOC.
        assert_eq!(toc.matches("<ul>").count(), 2, "toc: {toc}");
        assert_eq!(toc.matches("</ul>").count(), 2, "toc: {toc}");
    }

    #[test]
    fn transform_is_deterministic() {
        let md = "# Title\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";
        assert_eq!(to_html_body(md), to_html_body(md));
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Design Overview"), "design-overview");
        assert_eq!(slugify("What's New in 2.0?"), "what-s-new-in-2-0");
        assert_eq!(slugify("  Spaced   Out  "), "spaced-out");
        assert_eq!(slugify("???"), "section");
    }

    #[test]
    fn escape_html_covers_special_chars() {
        assert_eq!(
            escape_html("a < b & \"c\" > d"),
            "a &lt; b &amp; &quot;c&quot; &gt; d"
        );
    }

    #[test]
    fn minimal_document_renders_title_and_single_row_table() {
        let html = to_html_body("# Title\n\n| a | b |\n|---|---|\n|1|2|\n");
        assert!(html.contains(">Title</h1>"), "got: {html}");
        assert_eq!(html.matches("<table>").count(), 1);
        // Header row plus exactly one data row.
        assert_eq!(html.matches("<tbody>").count(), 1);
        assert_eq!(html.matches("<td>").count(), 2);
    }
}
