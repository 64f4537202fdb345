// src/checker/assets.rs
// =============================================================================
// This module extracts image references from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so tag and attribute
//   names match case-insensitively and both quote styles are handled
//
// We also use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative src values against the page URL, the same way a
//   browser would (including ../ and ./ segment normalization)
//
// Rust concepts:
// - Iterators: For processing collections
// - Option<T>: To represent "this src value didn't resolve"
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts all image URLs referenced by a page, in document order
//
// Parameters:
//   html: the HTML document body to parse (borrowed as &str)
//   base: the URL of the page (for resolving relative src values)
//
// Returns: Vec<String> of resolved absolute URLs
//
// Two things are deliberate here:
// - No de-duplication: an image referenced twice is checked twice, and the
//   report shows it twice, in the order the document references it
// - Unresolvable src values are skipped silently; they never abort
//   extraction of the remaining matches
//
// Example:
//   html = "<img src='/logo.png'>"
//   base = "http://example.com/page.html"
//   result = ["http://example.com/logo.png"]
pub fn extract_image_urls(html: &str, base: &Url) -> Vec<String> {
    let mut images = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <img> tags with a src attribute
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("img[src]").unwrap();

    // Select all <img> elements in document order
    for element in document.select(&selector) {
        if let Some(src) = element.value().attr("src") {
            // Try to resolve this src to an absolute URL
            if let Some(absolute_url) = resolve_src(base, src) {
                images.push(absolute_url);
            }
        }
    }

    images
}

// Resolves a possibly-relative src value to an absolute URL
//
// Parameters:
//   base: the URL of the page containing the <img>
//   src: the src attribute value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) or None if it cannot be resolved
//
// Examples:
//   base = "http://example.com/dir/page.html"
//   src = "/logo.png"      -> Some("http://example.com/logo.png")
//   src = "../img/x.png"   -> Some("http://example.com/img/x.png")
//   src = "http://cdn.example.com/a.png" -> Some(unchanged)
fn resolve_src(base: &Url, src: &str) -> Option<String> {
    // Try to parse src as a URL on its own
    // If it's already absolute (has a scheme), this works and we use it as-is
    // If it's relative, this fails, so we join it with the base URL
    match Url::parse(src) {
        Ok(url) => Some(url.to_string()),
        Err(_) => match base.join(src) {
            Ok(url) => Some(url.to_string()),
            Err(_) => None, // Unresolvable src, skip it
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn test_extract_absolute_src() {
        let html = r#"<img src="http://cdn.example.com/a.png">"#;
        let images = extract_image_urls(html, &base("http://example.com/page.html"));
        assert_eq!(images, vec!["http://cdn.example.com/a.png"]);
    }

    #[test]
    fn test_resolve_root_relative_src() {
        let html = r#"<img src="/logo.png">"#;
        let images = extract_image_urls(html, &base("http://example.com/page.html"));
        assert_eq!(images, vec!["http://example.com/logo.png"]);
    }

    #[test]
    fn test_resolve_parent_relative_src() {
        // ../ climbs out of /dir/, the same way a browser resolves it
        let html = r#"<img src="../img/x.png">"#;
        let images = extract_image_urls(html, &base("http://example.com/dir/page.html"));
        assert_eq!(images, vec!["http://example.com/img/x.png"]);
    }

    #[test]
    fn test_document_order_without_dedup() {
        // a.png appears twice and must be reported twice, in order
        let html = r#"
            <img src="a.png"> text
            <img src="b.png"> more text
            <img src="a.png">
        "#;
        let images = extract_image_urls(html, &base("http://example.com/dir/"));
        assert_eq!(
            images,
            vec![
                "http://example.com/dir/a.png",
                "http://example.com/dir/b.png",
                "http://example.com/dir/a.png",
            ]
        );
    }

    #[test]
    fn test_single_quoted_and_uppercase_markup() {
        // html5ever lowercases tag/attribute names and accepts single quotes
        let html = r#"<IMG SRC='/logo.png'>"#;
        let images = extract_image_urls(html, &base("http://example.com/page.html"));
        assert_eq!(images, vec!["http://example.com/logo.png"]);
    }

    #[test]
    fn test_img_without_src_is_ignored() {
        let html = r#"<img alt="no source"><img src="/a.png">"#;
        let images = extract_image_urls(html, &base("http://example.com/"));
        assert_eq!(images, vec!["http://example.com/a.png"]);
    }

    #[test]
    fn test_unresolvable_src_skipped_silently() {
        // "http://" parses neither on its own nor against the base; the
        // surrounding matches must still come through
        let html = r#"<img src="a.png"><img src="http://"><img src="b.png">"#;
        let images = extract_image_urls(html, &base("http://example.com/"));
        assert_eq!(
            images,
            vec!["http://example.com/a.png", "http://example.com/b.png"]
        );
    }

    #[test]
    fn test_no_images_yields_empty() {
        let html = "<html><body><p>Nothing referenced here</p></body></html>";
        let images = extract_image_urls(html, &base("http://example.com/"));
        assert!(images.is_empty());
    }
}
