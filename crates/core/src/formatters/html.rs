use crate::document::{ContentBlock, ExtractedDocument};

/// Configuration for printable HTML output
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Wrap the body in a complete `<!DOCTYPE html>` page
    pub standalone: bool,
    /// Inline stylesheet for the standalone page
    pub stylesheet: Option<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self { standalone: true, stylesheet: Some(DEFAULT_STYLESHEET.to_string()) }
    }
}

const DEFAULT_STYLESHEET: &str = "body { font-family: Verdana, Arial, sans-serif; font-size: 16px; \
line-height: 2; letter-spacing: 0.1em; word-spacing: 0.2em; max-width: 42em; margin: 2em auto; } \
p { margin-bottom: 1.5em; }";

/// Printable HTML formatter
pub struct HtmlFormatter {
    config: HtmlConfig,
}

impl HtmlFormatter {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, document: &ExtractedDocument) -> String {
        convert_to_html(document, &self.config)
    }
}

/// Convert a document to HTML: the title as `<h1>`, then one element per block
pub fn convert_to_html(document: &ExtractedDocument, config: &HtmlConfig) -> String {
    let title = escape_html(document.title());

    let mut body = format!("<h1>{}</h1>", title);
    for block in document.blocks() {
        body.push_str(&block_to_html(block));
    }

    if !config.standalone {
        return body;
    }

    let style = config
        .stylesheet
        .as_deref()
        .map(|css| format!("<style>{}</style>", css))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title>{}</head><body>{}</body></html>",
        title, style, body
    )
}

fn block_to_html(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { level, text } => format!("<h{level}>{}</h{level}>", escape_html(text)),
        ContentBlock::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
    }
}

/// Escape the characters that are significant in HTML text and attributes
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
