//! Noise stripping.
//!
//! A [`NoiseFilter`] names the element categories that never count as
//! content: scripts, styles, navigation, page headers and footers, asides,
//! and ad or social-share widgets. Instead of cloning a subtree and deleting
//! matches from the copy, [`NoiseFilter::strip`] derives a [`StrippedView`]
//! that skips noise subtrees while reading. The parsed page is never touched,
//! so later strategies can still see the unstripped tree.

use scraper::{ElementRef, Node};

use crate::clean::clean_text;
use crate::parse::Element;

const DEFAULT_TAGS: &[&str] = &["script", "style", "nav", "header", "footer", "aside"];

const DEFAULT_ROLES: &[&str] = &["navigation", "banner", "contentinfo", "complementary"];

const DEFAULT_CLASSES: &[&str] = &["advertisement", "ads", "social-share"];

/// Element categories removed before any text is measured.
///
/// Tags and roles compare case-insensitively. Classes are matched per class
/// token, so `class="ads wide"` is noise but `class="downloads"` is not.
///
/// # Example
///
/// ```rust
/// use clearread_core::{Document, NoiseFilter};
///
/// let doc = Document::parse(
///     r#"<div id="post"><p>Kept text</p><nav>Menu</nav><div class="promo">Buy</div></div>"#,
/// ).unwrap();
/// let post = doc.select_first("#post").unwrap().unwrap();
///
/// let filter = NoiseFilter::default().with_class("promo");
/// assert_eq!(filter.strip(post).cleaned_text(), "Kept text");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilter {
    /// Tag names whose subtrees are dropped.
    pub tags: Vec<String>,
    /// ARIA `role` values whose subtrees are dropped.
    pub roles: Vec<String>,
    /// Class tokens whose subtrees are dropped.
    pub classes: Vec<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|s| s.to_string()).collect(),
            roles: DEFAULT_ROLES.iter().map(|s| s.to_string()).collect(),
            classes: DEFAULT_CLASSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl NoiseFilter {
    /// A filter that strips nothing.
    pub fn empty() -> Self {
        Self { tags: Vec::new(), roles: Vec::new(), classes: Vec::new() }
    }

    /// Adds a tag name to the denylist.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Adds a class token to the denylist.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Whether an element (and therefore its whole subtree) is noise.
    pub fn is_noise(&self, element: &Element<'_>) -> bool {
        let tag = element.tag_name();
        if self.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
            return true;
        }

        if let Some(role) = element.attr("role")
            && role
                .split_whitespace()
                .any(|r| self.roles.iter().any(|denied| denied.eq_ignore_ascii_case(r)))
        {
            return true;
        }

        element
            .classes()
            .any(|class| self.classes.iter().any(|denied| denied == class))
    }

    /// Derives a view of `root` with all noise descendants filtered out.
    ///
    /// The root itself is always part of the view, even when it would match
    /// the filter; only what lies beneath it is stripped.
    pub fn strip<'a, 'f>(&'f self, root: Element<'a>) -> StrippedView<'a, 'f> {
        StrippedView { root, filter: self }
    }
}

/// A read-only, noise-free view of an element's subtree.
#[derive(Debug, Clone, Copy)]
pub struct StrippedView<'a, 'f> {
    root: Element<'a>,
    filter: &'f NoiseFilter,
}

impl StrippedView<'_, '_> {
    /// Concatenated text of every retained text node, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<_> = self.root.element_ref().children().rev().collect();

        while let Some(node) = stack.pop() {
            match node.value() {
                Node::Text(text) => out.push_str(text),
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(node)
                        && self.filter.is_noise(&Element::new(el))
                    {
                        continue;
                    }
                    stack.extend(node.children().rev());
                }
                _ => {}
            }
        }

        out
    }

    /// The view's text after whitespace cleaning.
    pub fn cleaned_text(&self) -> String {
        clean_text(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;

    const NOISY_HTML: &str = r#"
        <html><body>
            <div id="post">
                <header>Site header</header>
                <nav>Home | About</nav>
                <p>First paragraph of the story.</p>
                <script>var tracking = true;</script>
                <style>p { color: red; }</style>
                <div class="ads sidebar">Buy now</div>
                <div class="downloads">Get the PDF</div>
                <section>
                    <aside>Related links</aside>
                    <p>Second paragraph, nested.</p>
                    <div class="social-share">Share this</div>
                    <div class="advertisement">Sponsored</div>
                </section>
                <div role="navigation">Breadcrumbs</div>
                <footer>Copyright</footer>
            </div>
        </body></html>
    "#;

    fn post(doc: &Document) -> Element<'_> {
        doc.select_first("#post").unwrap().unwrap()
    }

    #[test]
    fn test_strips_default_categories() {
        let doc = Document::parse(NOISY_HTML).unwrap();
        let filter = NoiseFilter::default();
        let text = filter.strip(post(&doc)).cleaned_text();

        assert_eq!(
            text,
            "First paragraph of the story. Get the PDF Second paragraph, nested."
        );
    }

    #[test]
    fn test_original_tree_untouched() {
        let doc = Document::parse(NOISY_HTML).unwrap();
        let filter = NoiseFilter::default();
        let _ = filter.strip(post(&doc)).text();

        let raw = post(&doc).text();
        assert!(raw.contains("var tracking"));
        assert!(raw.contains("Buy now"));
        assert_eq!(doc.select("script").unwrap().len(), 1);
    }

    #[test]
    fn test_root_is_never_stripped() {
        let doc = Document::parse(r#"<nav id="n"><p>Inside nav</p><aside>x</aside></nav>"#).unwrap();
        let nav = doc.select_first("#n").unwrap().unwrap();
        assert_eq!(NoiseFilter::default().strip(nav).cleaned_text(), "Inside nav");
    }

    #[test]
    fn test_class_token_match() {
        let doc = Document::parse(r#"<div id="r"><span class="ads">a</span><span class="uploads">b</span></div>"#)
            .unwrap();
        let root = doc.select_first("#r").unwrap().unwrap();
        assert_eq!(NoiseFilter::default().strip(root).cleaned_text(), "b");
    }

    #[test]
    fn test_role_landmarks() {
        let doc = Document::parse(
            r#"<div id="r"><div role="banner">Top</div><div role="complementary main">Side</div><p>Body</p></div>"#,
        )
        .unwrap();
        let root = doc.select_first("#r").unwrap().unwrap();
        assert_eq!(NoiseFilter::default().strip(root).cleaned_text(), "Body");
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let doc = Document::parse(r#"<div id="r"><script>x()</script><p>y</p></div>"#).unwrap();
        let root = doc.select_first("#r").unwrap().unwrap();
        assert_eq!(NoiseFilter::empty().strip(root).cleaned_text(), "x()y");
    }

    #[test]
    fn test_extended_filter() {
        let doc = Document::parse(r#"<div id="r"><form>Sign up</form><p class="promo">Deal</p><p>Text</p></div>"#)
            .unwrap();
        let root = doc.select_first("#r").unwrap().unwrap();
        let filter = NoiseFilter::default().with_tag("form").with_class("promo");
        assert_eq!(filter.strip(root).cleaned_text(), "Text");
    }

    #[test]
    fn test_deeply_nested_tree() {
        let depth = 2_000;
        let html = format!("{}deep text{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let doc = Document::parse(&html).unwrap();
        let body = doc.select_first("body").unwrap().unwrap();
        assert_eq!(NoiseFilter::default().strip(body).cleaned_text(), "deep text");
    }
}
