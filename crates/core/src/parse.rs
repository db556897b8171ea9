//! HTML parsing and DOM querying.
//!
//! This module provides the [`Document`] and [`Element`] types the extraction
//! pipeline reads from. Both are read-only views over a `scraper` tree: no
//! stage of the pipeline ever mutates a parsed page.
//!
//! # Example
//!
//! ```rust
//! use clearread_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs.len(), 1);
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{ClearReadError, Result};

/// Parses a CSS selector, mapping failures to [`ClearReadError::HtmlParseError`].
fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ClearReadError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A parsed HTML document.
///
/// Parsing never fails on malformed markup; html5ever always produces a
/// best-effort tree, so an empty or broken page simply yields a document
/// with nothing to find.
///
/// # Example
///
/// ```rust
/// use clearread_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Gets the raw HTML representation.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects all elements matching a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ClearReadError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearread_core::parse::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first element in document order matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ClearReadError::HtmlParseError`] if the selector is invalid.
    pub fn select_first(&self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Gets the raw text of the first `<title>` element, if any.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// A single element in a parsed [`Document`].
///
/// Elements are cheap `Copy` handles; two handles compare equal only when
/// they point at the same node of the same tree.
///
/// # Example
///
/// ```rust
/// use clearread_core::parse::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub(crate) fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    pub(crate) fn element_ref(&self) -> ElementRef<'a> {
        self.element
    }

    /// Gets the raw text content of this element (all descendant text nodes).
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name (e.g. "div", "h2").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Iterates over the element's class tokens.
    pub fn classes(&self) -> impl Iterator<Item = &'a str> {
        self.element.value().classes()
    }

    /// Selects descendant elements (never the element itself) matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ClearReadError::HtmlParseError`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Selects the first descendant element matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`ClearReadError::HtmlParseError`] if the selector is invalid.
    pub fn select_first(&self, selector: &str) -> Result<Option<Element<'a>>> {
        let sel = compile(selector)?;
        Ok(self.element.select(&sel).next().map(|el| Element { element: el }))
    }
}
