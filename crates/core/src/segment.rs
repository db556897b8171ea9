//! Block segmentation.
//!
//! Turns the located content element into an ordered list of
//! [`ContentBlock`]s. The structural walk maps headings, paragraphs, and
//! text-heavy `div`s to blocks. When that yields too little structure, the
//! whole container's text is split into sentences instead, and headings are
//! lost.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::clean::{char_len, clean_text};
use crate::config::ExtractConfig;
use crate::document::ContentBlock;
use crate::parse::Element;
use crate::{ClearReadError, Result};

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, div";

/// Which segmentation path produced the blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStrategy {
    /// Blocks mirror the page's heading/paragraph structure.
    Structural,
    /// Blocks are sentences split from the container's full text.
    SentenceSplit,
}

/// The blocks for a content element and how they were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub blocks: Vec<ContentBlock>,
    pub strategy: SegmentStrategy,
}

/// Segments `content` into blocks.
///
/// # Errors
///
/// Returns [`ClearReadError::NoReadableContent`] when neither path produces
/// a single block.
pub fn segment_blocks(content: &Element<'_>, config: &ExtractConfig) -> Result<Segmentation> {
    let structural = structural_blocks(content, config);

    let segmentation = if structural.len() >= config.min_structured_blocks {
        Segmentation { blocks: structural, strategy: SegmentStrategy::Structural }
    } else {
        debug!(
            found = structural.len(),
            required = config.min_structured_blocks,
            "too little structure, splitting sentences"
        );
        Segmentation { blocks: sentence_blocks(content, config), strategy: SegmentStrategy::SentenceSplit }
    };

    if segmentation.blocks.is_empty() {
        return Err(ClearReadError::NoReadableContent);
    }

    debug!(
        strategy = ?segmentation.strategy,
        blocks = segmentation.blocks.len(),
        "segmented content"
    );
    Ok(segmentation)
}

/// Walks headings, paragraphs and `div`s beneath `content`, in document order.
pub fn structural_blocks(content: &Element<'_>, config: &ExtractConfig) -> Vec<ContentBlock> {
    let Ok(elements) = content.select(BLOCK_SELECTOR) else {
        return Vec::new();
    };

    let mut blocks = Vec::new();

    for element in elements {
        let text = config.noise.strip(element).cleaned_text();
        let len = char_len(&text);
        if len < config.min_block_chars {
            continue;
        }

        let tag = element.tag_name();
        if let Some(level) = heading_level(&tag) {
            blocks.push(ContentBlock::heading(level, text));
        } else if tag == "p" || (tag == "div" && len > config.min_div_chars) {
            blocks.push(ContentBlock::paragraph(text));
        } else {
            trace!(tag = %tag, len, "skipping short div");
        }
    }

    blocks
}

/// Splits the container's full noise-free text into sentence paragraphs.
pub fn sentence_blocks(content: &Element<'_>, config: &ExtractConfig) -> Vec<ContentBlock> {
    let text = config.noise.strip(*content).cleaned_text();
    let min_chars = config.min_sentence_chars.max(config.min_block_chars.saturating_sub(1));

    split_sentences(&text, min_chars)
        .into_iter()
        .map(ContentBlock::paragraph)
        .collect()
}

/// Splits text on runs of `.`, `!` and `?`, keeping cleaned pieces longer
/// than `min_chars` characters, in order.
///
/// # Example
///
/// ```rust
/// use clearread_core::segment::split_sentences;
///
/// let parts = split_sentences("Too short. This sentence is long enough to keep!!", 20);
/// assert_eq!(parts, vec!["This sentence is long enough to keep"]);
/// ```
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(clean_text)
        .filter(|sentence| char_len(sentence) > min_chars)
        .collect()
}

/// Numeric rank of an `h1`..`h6` tag.
fn heading_level(tag: &str) -> Option<usize> {
    let rank = tag.strip_prefix('h')?;
    match rank.parse::<usize>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}
