//! Main extraction API.
//!
//! The pipeline runs in a fixed order: locate the main content, extract the
//! title, segment the content into blocks. Every stage only reads the parsed
//! tree, so one [`Document`] can be extracted any number of times, from any
//! number of threads.
//!
//! # Example
//!
//! ```rust
//! use clearread_core::parse;
//!
//! let html = r#"
//!     <html><head><title>Tides</title></head><body>
//!         <article>
//!             <h2>Why the sea moves</h2>
//!             <p>The moon pulls on the oceans and the water bulges toward it.</p>
//!             <p>The earth turns beneath that bulge twice a day.</p>
//!         </article>
//!     </body></html>
//! "#;
//!
//! let doc = parse(html).unwrap();
//! assert_eq!(doc.title(), "Tides");
//! assert_eq!(doc.blocks().len(), 3);
//! ```

use tracing::{debug, instrument};
use url::Url;

use crate::config::ExtractConfig;
use crate::document::ExtractedDocument;
#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};
use crate::locate::{LocateStrategy, locate_main_content};
use crate::parse::Document;
use crate::segment::{SegmentStrategy, segment_blocks};
use crate::title::{TitleSource, extract_title};
use crate::{ClearReadError, Result};

/// An extracted document together with the strategies that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub document: ExtractedDocument,
    /// Locator strategy that found the content container.
    pub locator: LocateStrategy,
    /// Title source, `None` when a fallback title was used.
    pub title_source: Option<TitleSource>,
    pub segmenter: SegmentStrategy,
}

/// Main entry point for extraction.
///
/// # Example
///
/// ```rust
/// use clearread_core::{ExtractConfig, Extractor};
///
/// let config = ExtractConfig::builder().min_structured_blocks(1).build();
/// let extractor = Extractor::with_config(config);
/// let doc = extractor.parse("<main><p>A single paragraph of text.</p></main>").unwrap();
/// assert_eq!(doc.blocks().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Creates an extractor with default settings.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Creates an extractor with a custom configuration.
    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts a reading document from an already parsed page.
    ///
    /// # Errors
    ///
    /// [`ClearReadError::NoContent`] when no content container is found,
    /// [`ClearReadError::NoReadableContent`] when the container yields no blocks.
    pub fn extract(&self, doc: &Document) -> Result<ExtractedDocument> {
        Ok(self.extract_with_strategies(doc)?.document)
    }

    /// Like [`Extractor::extract`], but also reports which locator, title
    /// source and segmentation path were used.
    #[instrument(level = "debug", skip_all)]
    pub fn extract_with_strategies(&self, doc: &Document) -> Result<Extraction> {
        let located = locate_main_content(doc, &self.config)?;
        let title = extract_title(doc, &self.config);
        let segmentation = segment_blocks(&located.element, &self.config)?;

        debug!(
            locator = located.strategy.name(),
            title_source = ?title.source,
            segmenter = ?segmentation.strategy,
            blocks = segmentation.blocks.len(),
            "extraction complete"
        );

        Ok(Extraction {
            document: ExtractedDocument::new(title.text, segmentation.blocks),
            locator: located.strategy,
            title_source: title.source,
            segmenter: segmentation.strategy,
        })
    }

    /// Parses an HTML string and extracts it.
    pub fn parse(&self, html: &str) -> Result<ExtractedDocument> {
        let doc = Document::parse(html)?;
        self.extract(&doc)
    }

    /// Parses an HTML string loaded from `url` and attaches the URL to the result.
    ///
    /// # Errors
    ///
    /// Returns [`ClearReadError::InvalidUrl`] if the URL is invalid.
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<ExtractedDocument> {
        Url::parse(url).map_err(|e| ClearReadError::InvalidUrl(e.to_string()))?;
        Ok(self.parse(html)?.with_source_url(url))
    }

    /// Fetches a page and extracts it.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_parse(&self, url: &str, fetch_config: &FetchConfig) -> Result<ExtractedDocument> {
        let html = fetch_url(url, fetch_config).await?;
        self.parse_with_url(&html, url)
    }
}

/// Extracts a parsed page with default settings.
pub fn extract(doc: &Document) -> Result<ExtractedDocument> {
    Extractor::new().extract(doc)
}

/// Parses and extracts an HTML string with default settings.
pub fn parse(html: &str) -> Result<ExtractedDocument> {
    Extractor::new().parse(html)
}

/// Parses and extracts an HTML string, attaching its source URL.
pub fn parse_with_url(html: &str, url: &str) -> Result<ExtractedDocument> {
    Extractor::new().parse_with_url(html, url)
}

/// Fetches and extracts a page with default settings.
///
/// # Example
///
/// ```no_run
/// use clearread_core::fetch_and_parse;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let doc = fetch_and_parse("https://example.com/article").await?;
///     println!("Title: {}", doc.title());
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn fetch_and_parse(url: &str) -> Result<ExtractedDocument> {
    Extractor::new().fetch_and_parse(url, &FetchConfig::default()).await
}
