pub mod clean;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
pub mod locate;
pub mod noise;
pub mod parse;
pub mod segment;
pub mod title;

pub use clean::{clean_text, reading_time, word_count};
pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use document::{BlockKind, ContentBlock, ExtractedDocument, OutputFormat};
pub use error::{ClearReadError, Result};
pub use extract::{Extraction, Extractor, extract, parse, parse_with_url};
#[cfg(feature = "fetch")]
pub use extract::fetch_and_parse;
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, fetch_url};
pub use formatters::{HtmlConfig, HtmlFormatter, JsonConfig, JsonFormatter, MarkdownConfig, MarkdownFormatter};
pub use formatters::{TextConfig, TextFormatter};
pub use formatters::{convert_to_html, convert_to_json, convert_to_markdown, convert_to_speech, convert_to_text};
pub use locate::{LocateStrategy, Located, locate_main_content};
pub use noise::{NoiseFilter, StrippedView};
pub use parse::{Document, Element};
pub use segment::{SegmentStrategy, Segmentation, segment_blocks};
pub use title::{ExtractedTitle, TitleSource, extract_title};
