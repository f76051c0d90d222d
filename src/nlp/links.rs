//! URL extraction from free text.

use once_cell::sync::Lazy;
use regex::Regex;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());

/// Collect HTTP/HTTPS URLs and bare `www.` links in first-occurrence order.
pub fn extract_links(text: &str) -> Vec<&str> {
    URL.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_http_and_www_links_in_order() {
        let links = extract_links("see http://a.com and www.b.org");
        assert_eq!(links, vec!["http://a.com", "www.b.org"]);
    }

    #[test]
    fn finds_https_links() {
        let links = extract_links("docs at https://doc.rust-lang.org/book today");
        assert_eq!(links, vec!["https://doc.rust-lang.org/book"]);
    }

    #[test]
    fn no_links_yields_empty_vec() {
        assert!(extract_links("plain prose without any links").is_empty());
    }
}
