//! Headline extraction from the provider's search results page.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tickerdesk_core::ArticleLink;
use url::Url;

/// Structural pattern of one headline: a link in an `h3` inside an `article`.
pub const HEADLINE_SELECTOR: &str = "article h3 a";

static HEADLINE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(HEADLINE_SELECTOR).expect("headline selector is valid CSS")
});

/// Extract up to `max` absolute article links from `html`, in document order.
///
/// Relative `href`s are resolved against `origin`. Anchors without an `href`
/// or with an unresolvable one are skipped; markup that does not match the
/// headline pattern simply yields fewer links.
#[must_use]
pub fn extract_headline_links(html: &str, origin: &Url, max: usize) -> Vec<ArticleLink> {
    if max == 0 {
        return Vec::new();
    }
    let document = Html::parse_document(html);
    document
        .select(&HEADLINE)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve_href(origin, href))
        .take(max)
        .collect()
}

/// Resolve a headline `href` against the provider origin.
///
/// Only `http`/`https` results are accepted.
#[must_use]
pub fn resolve_href(origin: &Url, href: &str) -> Option<ArticleLink> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    let url = origin.join(href).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| ArticleLink::new(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Url {
        Url::parse("https://news.google.com").unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
          <main>
            <article><h3><a href="./articles/abc?hl=en-IN">Infosys wins deal</a></h3></article>
            <article><h3><a>no href here</a></h3></article>
            <article><h4><a href="./articles/skip">wrong heading</a></h4></article>
            <article><h3><a href="/articles/def">Second</a></h3></article>
            <article><h3><a href="https://example.com/story">Third</a></h3></article>
            <article><h3><a href="javascript:void(0)">Script</a></h3></article>
            <h3><a href="./articles/orphan">Outside article</a></h3>
          </main>
        </body></html>
    "#;

    #[test]
    fn extracts_matching_headlines_in_order() {
        let links = extract_headline_links(PAGE, &origin(), 10);
        let urls: Vec<&str> = links.iter().map(ArticleLink::as_str).collect();
        assert_eq!(
            urls,
            vec![
                "https://news.google.com/articles/abc?hl=en-IN",
                "https://news.google.com/articles/def",
                "https://example.com/story",
            ]
        );
    }

    #[test]
    fn truncates_to_max() {
        let links = extract_headline_links(PAGE, &origin(), 2);
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].as_str(), "https://news.google.com/articles/def");
    }

    #[test]
    fn zero_max_and_empty_markup_yield_nothing() {
        assert!(extract_headline_links(PAGE, &origin(), 0).is_empty());
        assert!(extract_headline_links("", &origin(), 5).is_empty());
        assert!(extract_headline_links("<div><p>changed layout</p></div>", &origin(), 5).is_empty());
    }

    #[test]
    fn headline_selector_compiles_once_and_is_reused() {
        assert!(Selector::parse(HEADLINE_SELECTOR).is_ok());
        let first = extract_headline_links(PAGE, &origin(), 10);
        let second = extract_headline_links(PAGE, &origin(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn resolve_rejects_fragments_and_blank() {
        assert!(resolve_href(&origin(), "  ").is_none());
        assert!(resolve_href(&origin(), "#top").is_none());
        assert_eq!(
            resolve_href(&origin(), "./read/xyz").unwrap().as_str(),
            "https://news.google.com/read/xyz"
        );
    }
}
