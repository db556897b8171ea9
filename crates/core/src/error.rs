//! Error types for clearread operations.
//!
//! This module defines the main error type [`ClearReadError`] which represents
//! everything that can go wrong while loading a page and turning it into a
//! reading document.
//!
//! Two variants are terminal extraction failures: [`ClearReadError::NoContent`]
//! (no content container could be located) and
//! [`ClearReadError::NoReadableContent`] (a container was found but produced no
//! blocks). Everything else comes from the loading boundary or from output.
//!
//! # Example
//!
//! ```rust
//! use clearread_core::{ClearReadError, parse};
//!
//! match parse("<html><body></body></html>") {
//!     Ok(doc) => println!("Title: {}", doc.title()),
//!     Err(e) if e.is_extraction_failure() => println!("Nothing to read: {}", e),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for extraction operations.
#[derive(Error, Debug)]
pub enum ClearReadError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, including invalid CSS selectors.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No element in the page qualified as the main content container.
    ///
    /// Every locator strategy came up empty. Retrying the same snapshot
    /// cannot succeed.
    #[error("Could not find readable content on this page")]
    NoContent,

    /// A content container was located but yielded no blocks.
    ///
    /// Both the structural walk and the sentence-split fallback produced
    /// nothing usable.
    #[error("Could not extract readable content from this page")]
    NoReadableContent,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// Output serialization errors.
    #[error("Failed to serialize document: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl ClearReadError {
    /// Returns `true` for the two terminal extraction failures.
    ///
    /// Callers surface both the same way: the page has nothing to read.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, ClearReadError::NoContent | ClearReadError::NoReadableContent)
    }
}

/// Result type alias for ClearReadError.
pub type Result<T> = std::result::Result<T, ClearReadError>;
