//! Main-content location.
//!
//! The locator walks [`LocateStrategy::CASCADE`] in priority order and stops
//! at the first strategy that finds an element. Semantic landmarks come
//! first, then well-known container selectors, and finally a brute-force
//! scan for the `div`/`section` carrying the most text. When everything
//! misses, extraction fails rather than falling back to the whole page.

use tracing::{debug, warn};

use crate::clean::char_len;
use crate::config::ExtractConfig;
use crate::noise::NoiseFilter;
use crate::parse::{Document, Element};
use crate::{ClearReadError, Result};

/// One way of finding the main content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateStrategy {
    /// First `<article>`.
    Article,
    /// First `<main>`.
    Main,
    /// First element with `role="main"`.
    RoleMain,
    /// First hit from the configured content selectors, tried in order.
    ContentSelectors,
    /// The `div` or `section` with the longest noise-free text.
    LargestTextBlock,
}

impl LocateStrategy {
    /// All strategies in the order the locator tries them.
    pub const CASCADE: [LocateStrategy; 5] = [
        LocateStrategy::Article,
        LocateStrategy::Main,
        LocateStrategy::RoleMain,
        LocateStrategy::ContentSelectors,
        LocateStrategy::LargestTextBlock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LocateStrategy::Article => "article",
            LocateStrategy::Main => "main",
            LocateStrategy::RoleMain => "role-main",
            LocateStrategy::ContentSelectors => "content-selectors",
            LocateStrategy::LargestTextBlock => "largest-text-block",
        }
    }

    /// Runs this strategy alone.
    pub fn locate<'a>(&self, doc: &'a Document, config: &ExtractConfig) -> Option<Element<'a>> {
        match self {
            LocateStrategy::Article => first_match(doc, "article"),
            LocateStrategy::Main => first_match(doc, "main"),
            LocateStrategy::RoleMain => first_match(doc, r#"[role="main"]"#),
            LocateStrategy::ContentSelectors => config
                .content_selectors
                .iter()
                .find_map(|selector| first_match(doc, selector)),
            LocateStrategy::LargestTextBlock => largest_text_block(doc, &config.noise),
        }
    }
}

/// The located content container and the strategy that found it.
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub element: Element<'a>,
    pub strategy: LocateStrategy,
}

/// Finds the element most likely to hold the article body.
///
/// # Errors
///
/// Returns [`ClearReadError::NoContent`] when no strategy finds a candidate.
pub fn locate_main_content<'a>(doc: &'a Document, config: &ExtractConfig) -> Result<Located<'a>> {
    let located = LocateStrategy::CASCADE
        .iter()
        .find_map(|strategy| strategy.locate(doc, config).map(|element| Located { element, strategy: *strategy }));

    match located {
        Some(located) => {
            debug!(strategy = located.strategy.name(), tag = %located.element.tag_name(), "located main content");
            Ok(located)
        }
        None => {
            debug!("no locator strategy matched");
            Err(ClearReadError::NoContent)
        }
    }
}

/// First element matching `selector`; a selector that fails to parse counts
/// as no match.
fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Element<'a>> {
    match doc.select_first(selector) {
        Ok(found) => found,
        Err(e) => {
            warn!(selector, error = %e, "skipping unusable selector");
            None
        }
    }
}

/// Scans every `div` and `section` and keeps the one whose stripped, cleaned
/// text is longest. Candidates overlap: a nested block's text also counts
/// toward each ancestor. Ties keep the earliest element, and a page whose
/// blocks are all empty yields nothing.
fn largest_text_block<'a>(doc: &'a Document, noise: &NoiseFilter) -> Option<Element<'a>> {
    let candidates = doc.select("div, section").ok()?;

    let mut best = None;
    let mut max_len = 0;

    for candidate in candidates {
        let len = char_len(&noise.strip(candidate).cleaned_text());
        if len > max_len {
            max_len = len;
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn locate(html: &str) -> (String, LocateStrategy) {
        let doc = Document::parse(html).unwrap();
        let located = locate_main_content(&doc, &ExtractConfig::default()).unwrap();
        (located.element.attr("id").unwrap_or_default().to_string(), located.strategy)
    }

    #[rstest]
    #[case::article(
        r#"<main id="m">m</main><article id="a">Article body text</article>"#,
        "a",
        LocateStrategy::Article
    )]
    #[case::main(
        r#"<div role="main" id="r">r</div><main id="m">Main body</main>"#,
        "m",
        LocateStrategy::Main
    )]
    #[case::role_main(
        r#"<div class="content" id="c">c</div><div role="main" id="r">Role body</div>"#,
        "r",
        LocateStrategy::RoleMain
    )]
    #[case::content_class(r#"<div id="x">xx</div><div class="content" id="c">c</div>"#, "c", LocateStrategy::ContentSelectors)]
    #[case::content_id(r#"<section id="main-content">body</section>"#, "main-content", LocateStrategy::ContentSelectors)]
    #[case::largest(
        r#"<div id="small">short</div><section id="big">a much longer block of text</section>"#,
        "big",
        LocateStrategy::LargestTextBlock
    )]
    fn test_cascade_order(#[case] html: &str, #[case] expected_id: &str, #[case] expected: LocateStrategy) {
        let (id, strategy) = locate(html);
        assert_eq!(id, expected_id);
        assert_eq!(strategy, expected);
    }

    #[test]
    fn test_article_short_circuits_even_when_empty() {
        let (id, strategy) = locate(r#"<article id="a"></article><div id="d">lots and lots of text here</div>"#);
        assert_eq!(id, "a");
        assert_eq!(strategy, LocateStrategy::Article);
    }

    #[test]
    fn test_content_selectors_respect_list_order() {
        // `.post-content` appears first in the page but `.content` is earlier in the list.
        let (id, _) = locate(r#"<div class="post-content" id="p">p</div><div class="content" id="c">c</div>"#);
        assert_eq!(id, "c");
    }

    #[test]
    fn test_largest_block_tie_keeps_first() {
        let (id, strategy) = locate(r#"<div id="one">0123456789</div><div id="two">abcdefghij</div>"#);
        assert_eq!(id, "one");
        assert_eq!(strategy, LocateStrategy::LargestTextBlock);
    }

    #[test]
    fn test_largest_block_ignores_noise() {
        let html = r#"
            <div id="noisy"><script>var a = "a very long script body that should never count";</script>tiny</div>
            <div id="real">real words here</div>
        "#;
        let (id, _) = locate(html);
        assert_eq!(id, "real");
    }

    #[test]
    fn test_largest_block_overlapping_candidates() {
        // The wrapper contains the inner text plus its own, so it wins.
        let html = r#"<div id="outer">lead <div id="inner">inner paragraph text</div></div>"#;
        let (id, _) = locate(html);
        assert_eq!(id, "outer");
    }

    #[test]
    fn test_no_content() {
        let doc = Document::parse("<html><body><p>Only a paragraph</p><div>   </div></body></html>").unwrap();
        let result = locate_main_content(&doc, &ExtractConfig::default());
        assert!(matches!(result, Err(ClearReadError::NoContent)));
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("").unwrap();
        let result = locate_main_content(&doc, &ExtractConfig::default());
        assert!(matches!(result, Err(ClearReadError::NoContent)));
    }

    #[test]
    fn test_invalid_configured_selector_is_skipped() {
        let doc = Document::parse(r#"<div id="story">Story</div>"#).unwrap();
        let config = ExtractConfig::builder().content_selectors(["[[broken", "#story"]).build();
        let located = LocateStrategy::ContentSelectors.locate(&doc, &config).unwrap();
        assert_eq!(located.attr("id"), Some("story"));
    }

    #[test]
    fn test_strategies_are_independent() {
        let doc = Document::parse(r#"<main id="m">Main</main><div class="entry-content" id="e">Entry</div>"#).unwrap();
        let config = ExtractConfig::default();

        assert!(LocateStrategy::Article.locate(&doc, &config).is_none());
        assert_eq!(LocateStrategy::Main.locate(&doc, &config).unwrap().attr("id"), Some("m"));
        assert!(LocateStrategy::RoleMain.locate(&doc, &config).is_none());
        assert_eq!(
            LocateStrategy::ContentSelectors.locate(&doc, &config).unwrap().attr("id"),
            Some("e")
        );
    }
}
