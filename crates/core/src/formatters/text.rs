use crate::document::ExtractedDocument;

/// Separator between sentences in the speech utterance.
const SPEECH_SEPARATOR: &str = ". ";

/// Configuration for plain text output
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Start with the document title
    pub include_title: bool,

    /// Wrap lines at specified width (0 = no wrapping)
    pub line_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { include_title: true, line_width: 0 }
    }
}

/// Plain text formatter for clipboard-style output
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, document: &ExtractedDocument) -> String {
        convert_to_text(document, &self.config)
    }
}

/// Convert a document to plain text: title and blocks separated by blank lines
pub fn convert_to_text(document: &ExtractedDocument, config: &TextConfig) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(document.blocks().len() + 1);
    if config.include_title {
        parts.push(document.title());
    }
    parts.extend(document.blocks().iter().map(|b| b.text()));

    if config.line_width > 0 {
        parts
            .iter()
            .map(|p| {
                let words: Vec<&str> = p.split_whitespace().collect();
                wrap_words(&words, config.line_width)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    } else {
        parts.join("\n\n")
    }
}

/// Convert a document to a single utterance for speech synthesis
pub fn convert_to_speech(document: &ExtractedDocument) -> String {
    std::iter::once(document.title())
        .chain(document.blocks().iter().map(|b| b.text()))
        .collect::<Vec<_>>()
        .join(SPEECH_SEPARATOR)
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
