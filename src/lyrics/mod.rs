//! Lyrics page extraction
//!
//! The provider renders lyrics as HTML only, so resolution scrapes the
//! song page and reconstructs plain text from the DOM. The page structure
//! is third-party and unstable; extraction is best-effort and degrades to
//! "no lyrics found" when the expected markers are missing.
//!
//! Page anatomy relied upon:
//! - every lyrics block is a `div[data-lyrics-container="true"]`
//! - `<br>` elements are the only line breaks
//! - decorative/interactive spans are marked
//!   `data-exclude-from-selection="true"`
//! - header/banner blocks carry a `LyricsHeader`-prefixed class

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[data-lyrics-container="true"]"#).expect("container selector is valid")
});

/// Extract plain-text lyrics from a rendered song page.
///
/// Returns `None` when the document has no lyrics containers at all
/// (wrong page, or the provider changed its markup). Containers that
/// exist but hold no text yield an empty string, which callers treat as
/// "no lyrics".
///
/// Line breaks come from `<br>` elements; each container is terminated
/// with a newline, so an empty container between two populated ones
/// reads as a blank-line separator in the output.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    let mut text = String::new();
    let mut found = false;
    for container in document.select(&CONTAINER) {
        found = true;
        collect_text(container, &mut text);
        text.push('\n');
    }

    if !found {
        return None;
    }
    Some(text.trim().to_string())
}

/// Walk an element's children in document order, reconstructing text.
fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => {
                if el.name() == "br" {
                    out.push('\n');
                    continue;
                }
                // Interactive/decorative spans are flagged out of selection
                if el.attr("data-exclude-from-selection") == Some("true") {
                    continue;
                }
                // Header/banner blocks nested inside a container
                if el.attr("class").is_some_and(|c| c.contains("LyricsHeader")) {
                    continue;
                }
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(inner: &str) -> String {
        format!(r#"<div data-lyrics-container="true">{inner}</div>"#)
    }

    fn page(body: &str) -> String {
        format!("<html><body><h1>Song</h1>{body}<footer>about</footer></body></html>")
    }

    #[test]
    fn test_br_becomes_newline() {
        let html = page(&container("Verse<br>one"));
        assert_eq!(extract_lyrics(&html).unwrap(), "Verse\none");
    }

    #[test]
    fn test_empty_container_separates_blocks() {
        let html = page(&format!(
            "{}{}{}",
            container("First"),
            container(""),
            container("Second")
        ));
        assert_eq!(extract_lyrics(&html).unwrap(), "First\n\nSecond");
    }

    #[test]
    fn test_no_container_is_none() {
        let html = page("<div class=\"something-else\">Not lyrics</div>");
        assert!(extract_lyrics(&html).is_none());
    }

    #[test]
    fn test_containers_without_text_yield_empty() {
        let html = page(&container(""));
        assert_eq!(extract_lyrics(&html).unwrap(), "");
    }

    #[test]
    fn test_nested_elements_keep_line_breaks() {
        // Annotated lines are wrapped in anchors with inner spans and brs
        let html = page(&container(
            r#"<a href="/123"><span>Hello, it's me<br>I was wondering</span></a><br>plain line"#,
        ));
        assert_eq!(
            extract_lyrics(&html).unwrap(),
            "Hello, it's me\nI was wondering\nplain line"
        );
    }

    #[test]
    fn test_excluded_spans_are_skipped() {
        let html = page(&container(
            r#"Real line<br><span data-exclude-from-selection="true">See Live Tickets</span>after"#,
        ));
        assert_eq!(extract_lyrics(&html).unwrap(), "Real line\nafter");
    }

    #[test]
    fn test_header_block_is_skipped() {
        let html = page(&container(
            r#"<div class="LyricsHeader__Container-sc-1bn8ec">3 Contributors</div>First line"#,
        ));
        assert_eq!(extract_lyrics(&html).unwrap(), "First line");
    }

    #[test]
    fn test_text_outside_containers_is_ignored() {
        let html = page(&format!(
            "<div>How to Format Lyrics</div>{}",
            container("Only this")
        ));
        assert_eq!(extract_lyrics(&html).unwrap(), "Only this");
    }
}
