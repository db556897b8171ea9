//! Extraction configuration.
//!
//! [`ExtractConfig`] carries every threshold and selector list the pipeline
//! consults. Each field documents its default; the builder
//! exists so callers (and the CLI) can tune individual knobs.

use crate::noise::NoiseFilter;

/// Content-container selectors tried, in order, by the locator.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    ".content",
    ".post-content",
    ".article-content",
    ".entry-content",
    ".main-content",
    "#content",
    "#main-content",
];

/// Title used when no extraction strategy finds one.
pub const DEFAULT_FALLBACK_TITLE: &str = "Untitled Article";

/// Configuration for the extraction pipeline.
///
/// # Example
///
/// ```rust
/// use clearread_core::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .min_block_chars(15)
///     .min_structured_blocks(2)
///     .build();
/// assert_eq!(config.min_div_chars, 50);
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Elements whose cleaned text is shorter than this are skipped (default: 10).
    pub min_block_chars: usize,

    /// A `div` becomes a paragraph only when its text is longer than this (default: 50).
    pub min_div_chars: usize,

    /// A structural walk yielding fewer blocks than this falls back to
    /// sentence splitting (default: 3).
    pub min_structured_blocks: usize,

    /// Sentences must be longer than this to be kept (default: 20).
    pub min_sentence_chars: usize,

    /// Ordered content-container selectors for the locator.
    pub content_selectors: Vec<String>,

    /// Categories stripped before any text is measured.
    pub noise: NoiseFilter,

    /// Title used when every title strategy comes up empty (default: "Untitled Article").
    pub fallback_title: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_block_chars: 10,
            min_div_chars: 50,
            min_structured_blocks: 3,
            min_sentence_chars: 20,
            content_selectors: DEFAULT_CONTENT_SELECTORS.iter().map(|s| s.to_string()).collect(),
            noise: NoiseFilter::default(),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}

impl ExtractConfig {
    /// Creates a new builder for ExtractConfig.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }
}

/// Builder for ExtractConfig.
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Sets the minimum block length.
    pub fn min_block_chars(mut self, value: usize) -> Self {
        self.config.min_block_chars = value;
        self
    }

    /// Sets the length a `div` must exceed to count as a paragraph.
    pub fn min_div_chars(mut self, value: usize) -> Self {
        self.config.min_div_chars = value;
        self
    }

    /// Sets the structural block count below which sentence splitting kicks in.
    pub fn min_structured_blocks(mut self, value: usize) -> Self {
        self.config.min_structured_blocks = value;
        self
    }

    /// Sets the length a split sentence must exceed.
    pub fn min_sentence_chars(mut self, value: usize) -> Self {
        self.config.min_sentence_chars = value;
        self
    }

    /// Replaces the content-container selector list.
    pub fn content_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.content_selectors = selectors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the noise filter.
    pub fn noise(mut self, value: NoiseFilter) -> Self {
        self.config.noise = value;
        self
    }

    /// Sets the fallback title.
    pub fn fallback_title(mut self, value: impl Into<String>) -> Self {
        self.config.fallback_title = value.into();
        self
    }

    /// Builds the config.
    pub fn build(self) -> ExtractConfig {
        self.config
    }
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
