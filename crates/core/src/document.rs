//! The extracted reading document.
//!
//! An [`ExtractedDocument`] is a title plus an ordered list of
//! [`ContentBlock`]s. It is built once per extraction, never modified, and
//! handed to whatever renders, speaks, prints, or copies it.

use std::str::FromStr;

use serde::Serialize;

use crate::clean::{reading_time, word_count};
use crate::formatters::{
    HtmlConfig, JsonConfig, MarkdownConfig, TextConfig, convert_to_html, convert_to_json, convert_to_markdown,
    convert_to_speech, convert_to_text,
};
use crate::Result;

/// Lowest and highest heading levels.
pub const MIN_HEADING_LEVEL: u8 = 1;
pub const MAX_HEADING_LEVEL: u8 = 6;

/// The kind of a [`ContentBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Paragraph,
}

/// One unit of extracted content.
///
/// Serializes as `{"type":"heading","level":2,"text":"..."}` or
/// `{"type":"paragraph","text":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading { level: u8, text: String },
    Paragraph { text: String },
}

impl ContentBlock {
    /// A heading block; `level` is clamped into `1..=6`.
    pub fn heading(level: usize, text: impl Into<String>) -> Self {
        let level = level.clamp(MIN_HEADING_LEVEL as usize, MAX_HEADING_LEVEL as usize) as u8;
        ContentBlock::Heading { level, text: text.into() }
    }

    /// A paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph { text: text.into() }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// Heading level, `None` for paragraphs.
    pub fn level(&self) -> Option<u8> {
        match self {
            ContentBlock::Heading { level, .. } => Some(*level),
            ContentBlock::Paragraph { .. } => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ContentBlock::Heading { text, .. } | ContentBlock::Paragraph { text } => text,
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading { .. })
    }
}

/// Output format options for an [`ExtractedDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown, headings as `#` runs.
    Markdown,
    /// Structured JSON.
    Json,
    /// Clipboard text: title and blocks separated by blank lines.
    PlainText,
    /// A single utterance for speech synthesis.
    Speech,
    /// Standalone printable HTML.
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::PlainText),
            "speech" => Ok(Self::Speech),
            "html" => Ok(Self::Html),
            _ => Err(format!(
                "Invalid format: {}. Valid options: markdown, json, text, speech, html",
                s
            )),
        }
    }
}

/// The result of extracting a page.
///
/// A document always has a non-empty title and at least one block; the
/// pipeline returns an error instead of an empty document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedDocument {
    title: String,
    blocks: Vec<ContentBlock>,
    source_url: Option<String>,
}

impl ExtractedDocument {
    pub(crate) fn new(title: String, blocks: Vec<ContentBlock>) -> Self {
        Self { title, blocks, source_url: None }
    }

    /// Attaches the URL the page was loaded from.
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Number of heading blocks.
    pub fn heading_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_heading()).count()
    }

    /// Word count over all block text (title excluded).
    pub fn word_count(&self) -> usize {
        self.blocks.iter().map(|b| word_count(b.text())).sum()
    }

    /// Estimated reading time in minutes.
    pub fn reading_time(&self) -> f64 {
        reading_time(self.word_count())
    }

    /// Converts the document to the specified format using default settings.
    pub fn to_format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Markdown => Ok(convert_to_markdown(self, &MarkdownConfig::default())),
            OutputFormat::Json => convert_to_json(self, &JsonConfig::default()),
            OutputFormat::PlainText => Ok(convert_to_text(self, &TextConfig::default())),
            OutputFormat::Speech => Ok(convert_to_speech(self)),
            OutputFormat::Html => Ok(convert_to_html(self, &HtmlConfig::default())),
        }
    }

    /// Gets the document as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
