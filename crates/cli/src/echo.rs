use owo_colors::OwoColorize;

use clearread_core::{ExtractedDocument, LocateStrategy, SegmentStrategy, TitleSource};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "ClearRead".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Extract readable documents from web pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print a dimmed label with a highlighted value
pub fn print_field(label: &str, value: &str) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.bright_white());
}

/// Print which strategies the pipeline settled on
pub fn print_strategies(locator: LocateStrategy, title: Option<TitleSource>, segmenter: SegmentStrategy) {
    print_field("Located by", locator.name());
    let title = match title {
        Some(source) => format!("{:?}", source),
        None => "fallback".to_string(),
    };
    print_field("Title from", &title);
    let segmenter = match segmenter {
        SegmentStrategy::Structural => "structural",
        SegmentStrategy::SentenceSplit => "sentence split",
    };
    print_field("Segmented", segmenter);
}

/// Print extraction details summary
pub fn print_extraction_details(document: &ExtractedDocument) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Extraction Details".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());
    print_field("Title", document.title());
    print_field("Blocks", &document.blocks().len().to_string());
    print_field("Headings", &document.heading_count().to_string());
    print_field("Words", &document.word_count().to_string());
    print_field("Reading time", &format!("{:.1} min", document.reading_time()));
    eprintln!();
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
