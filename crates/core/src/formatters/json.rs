use crate::Result;
use crate::document::{ContentBlock, ExtractedDocument};
use serde::Serialize;

/// Complete JSON output structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    /// Extracted title
    pub title: &'a str,
    /// Ordered content blocks
    pub blocks: &'a [ContentBlock],
    /// Source URL, when known
    pub source_url: Option<&'a str>,
    /// Optional reading metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JsonMetrics>,
}

/// Reading metrics for JSON output
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JsonMetrics {
    /// Word count over all blocks
    pub word_count: usize,
    /// Estimated reading time in minutes
    pub reading_time_minutes: f64,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Include word count and reading time
    pub include_metrics: bool,
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert a document to JSON
pub fn convert_to_json(document: &ExtractedDocument, config: &JsonConfig) -> Result<String> {
    let metrics = config.include_metrics.then(|| JsonMetrics {
        word_count: document.word_count(),
        reading_time_minutes: document.reading_time(),
    });

    let output = JsonOutput {
        title: document.title(),
        blocks: document.blocks(),
        source_url: document.source_url(),
        metrics,
    };

    if config.pretty { Ok(serde_json::to_string_pretty(&output)?) } else { Ok(serde_json::to_string(&output)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, document: &ExtractedDocument) -> Result<String> {
        convert_to_json(document, &self.config)
    }
}
