//! Title extraction.
//!
//! Titles are read from the whole page, not the located content node. Each
//! [`TitleSource`] looks at exactly one element (the first match of its
//! selector); an empty result moves on to the next source rather than to the
//! next matching element.

use tracing::debug;

use crate::clean::clean_text;
use crate::config::ExtractConfig;
use crate::parse::Document;

/// One place a title can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// Text of the first `<h1>`.
    FirstHeading,
    /// Text of the `<title>` element.
    TitleTag,
    /// `content` attribute of the `og:title` meta property.
    OpenGraph,
    /// First element with class or id `title`.
    TitleClass,
    /// First element with class `post-title`.
    PostTitleClass,
    /// First element with class `article-title`.
    ArticleTitleClass,
}

impl TitleSource {
    /// All sources in priority order.
    pub const CASCADE: [TitleSource; 6] = [
        TitleSource::FirstHeading,
        TitleSource::TitleTag,
        TitleSource::OpenGraph,
        TitleSource::TitleClass,
        TitleSource::PostTitleClass,
        TitleSource::ArticleTitleClass,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            TitleSource::FirstHeading => "h1",
            TitleSource::TitleTag => "title",
            TitleSource::OpenGraph => r#"[property="og:title"]"#,
            TitleSource::TitleClass => ".title, #title",
            TitleSource::PostTitleClass => ".post-title",
            TitleSource::ArticleTitleClass => ".article-title",
        }
    }

    /// Reads this source, returning cleaned, non-empty text.
    pub fn read(&self, doc: &Document) -> Option<String> {
        let element = doc.select_first(self.selector()).ok().flatten()?;

        let raw = match self {
            TitleSource::OpenGraph => element.attr("content").unwrap_or_default().to_string(),
            _ => element.text(),
        };

        let cleaned = clean_text(&raw);
        if cleaned.is_empty() { None } else { Some(cleaned) }
    }
}

/// The chosen title and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTitle {
    pub text: String,
    /// `None` when a fallback was used.
    pub source: Option<TitleSource>,
}

/// Picks the page title. Never returns an empty string: when every source
/// is empty, the raw document title is used, then the configured fallback.
pub fn extract_title(doc: &Document, config: &ExtractConfig) -> ExtractedTitle {
    for source in TitleSource::CASCADE {
        if let Some(text) = source.read(doc) {
            debug!(source = ?source, "extracted title");
            return ExtractedTitle { text, source: Some(source) };
        }
    }

    let raw = doc.title().map(|t| clean_text(&t)).unwrap_or_default();
    let text = if raw.is_empty() {
        let fallback = clean_text(&config.fallback_title);
        if fallback.is_empty() { crate::config::DEFAULT_FALLBACK_TITLE.to_string() } else { fallback }
    } else {
        raw
    };

    debug!(title = %text, "no title source matched, using fallback");
    ExtractedTitle { text, source: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn title_of(html: &str) -> ExtractedTitle {
        let doc = Document::parse(html).unwrap();
        extract_title(&doc, &ExtractConfig::default())
    }

    #[rstest]
    #[case::h1(
        r#"<head><title>Page</title></head><body><h1>  Heading
            Title </h1></body>"#,
        "Heading Title",
        TitleSource::FirstHeading
    )]
    #[case::title_tag(
        r#"<head><title> Only   Title </title></head><body><p>x</p></body>"#,
        "Only Title",
        TitleSource::TitleTag
    )]
    #[case::open_graph(
        r#"<head><meta property="og:title" content="Breaking News"></head><body></body>"#,
        "Breaking News",
        TitleSource::OpenGraph
    )]
    #[case::title_class(r#"<body><div class="title">Class Title</div></body>"#, "Class Title", TitleSource::TitleClass)]
    #[case::title_id(r#"<body><span id="title">Id Title</span></body>"#, "Id Title", TitleSource::TitleClass)]
    #[case::post_title(
        r#"<body><h2 class="post-title">Post Title</h2></body>"#,
        "Post Title",
        TitleSource::PostTitleClass
    )]
    #[case::article_title(
        r#"<body><h2 class="article-title">Article Title</h2></body>"#,
        "Article Title",
        TitleSource::ArticleTitleClass
    )]
    fn test_title_sources(#[case] html: &str, #[case] expected: &str, #[case] source: TitleSource) {
        let title = title_of(html);
        assert_eq!(title.text, expected);
        assert_eq!(title.source, Some(source));
    }

    #[test]
    fn test_empty_h1_falls_through() {
        let title = title_of(r#"<head><title>Real Title</title></head><body><h1>   </h1><h1>Second</h1></body>"#);
        assert_eq!(title.text, "Real Title");
        assert_eq!(title.source, Some(TitleSource::TitleTag));
    }

    #[test]
    fn test_open_graph_reads_attribute_not_text() {
        let title = title_of(r#"<body><div property="og:title" content="From Attr">From Text</div></body>"#);
        assert_eq!(title.text, "From Attr");
    }

    #[test]
    fn test_open_graph_whitespace_content_skipped() {
        let title = title_of(
            r#"<head><meta property="og:title" content="   "></head><body><p class="post-title">Fallback Post</p></body>"#,
        );
        assert_eq!(title.text, "Fallback Post");
        assert_eq!(title.source, Some(TitleSource::PostTitleClass));
    }

    #[test]
    fn test_byte_order_mark_heading_skipped() {
        let title = title_of("<head><title>Real Title</title></head><body><h1>\u{feff} </h1></body>");
        assert_eq!(title.text, "Real Title");
        assert_eq!(title.source, Some(TitleSource::TitleTag));
    }

    #[test]
    fn test_untitled_fallback() {
        let title = title_of("<html><body><p>No title anywhere</p></body></html>");
        assert_eq!(title.text, "Untitled Article");
        assert_eq!(title.source, None);
    }

    #[test]
    fn test_custom_fallback() {
        let doc = Document::parse("<p>nothing</p>").unwrap();
        let config = ExtractConfig::builder().fallback_title("Reading View").build();
        assert_eq!(extract_title(&doc, &config).text, "Reading View");
    }

    #[test]
    fn test_blank_custom_fallback_never_empty() {
        let doc = Document::parse("<p>nothing</p>").unwrap();
        let config = ExtractConfig::builder().fallback_title("  ").build();
        assert_eq!(extract_title(&doc, &config).text, "Untitled Article");
    }
}
