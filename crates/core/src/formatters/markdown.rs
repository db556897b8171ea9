use crate::document::{ContentBlock, ExtractedDocument};

/// Configuration for Markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownConfig {
    /// Include TOML frontmatter with title, source and reading metrics
    pub include_frontmatter: bool,
    /// Include title as H1 heading at the start of content
    pub include_title_heading: bool,
}

/// Convert a document to Markdown with optional frontmatter
pub fn convert_to_markdown(document: &ExtractedDocument, config: &MarkdownConfig) -> String {
    let mut output = String::new();

    if config.include_frontmatter {
        output.push_str(&generate_frontmatter(document));
        output.push('\n');
    }

    if config.include_title_heading {
        output.push_str(&format!("# {}\n\n", escape_markdown(document.title())));
    }

    let body: Vec<String> = document.blocks().iter().map(block_to_markdown).collect();
    output.push_str(&body.join("\n\n"));
    output.push('\n');

    output
}

fn block_to_markdown(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { level, text } => {
            format!("{} {}", "#".repeat(*level as usize), escape_markdown(text))
        }
        ContentBlock::Paragraph { text } => escape_markdown(text),
    }
}

/// Generate TOML frontmatter from document
fn generate_frontmatter(document: &ExtractedDocument) -> String {
    let mut frontmatter = String::from("+++");

    frontmatter.push_str(&format!("\ntitle = {}", toml_escape_string(document.title())));

    if let Some(url) = document.source_url() {
        frontmatter.push_str(&format!("\nsource_url = {}", toml_escape_string(url)));
    }

    frontmatter.push_str(&format!("\nword_count = {}", document.word_count()));
    frontmatter.push_str(&format!("\nreading_time_minutes = {:.1}", document.reading_time()));

    frontmatter.push_str("\n+++\n");

    frontmatter
}

/// Escape a string for TOML format
fn toml_escape_string(s: &str) -> String {
    let needs_escape = s.contains('"') || s.contains('\\') || s.contains('\n');
    if needs_escape {
        format!(
            "\"{}\"",
            s.replace('\\', "\\\\").replace('\"', "\\\"").replace('\n', "\\n")
        )
    } else {
        format!("\"{}\"", s)
    }
}

/// Escape a leading character that Markdown would read as block syntax.
fn escape_markdown(text: &str) -> String {
    match text.chars().next() {
        Some('#' | '>' | '-' | '+' | '*' | '|') => format!("\\{}", text),
        _ => text.to_string(),
    }
}

/// Markdown formatter with configurable options
pub struct MarkdownFormatter {
    config: MarkdownConfig,
}

impl MarkdownFormatter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, document: &ExtractedDocument) -> String {
        convert_to_markdown(document, &self.config)
    }
}
