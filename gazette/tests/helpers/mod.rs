#![allow(dead_code)]


pub use mock_connector::{MockConnector, TableClassifier};

use gazette_core::RawArticle;

/// Raw article with title, source, url and an RFC 3339 timestamp.
pub fn raw(title: &str, source: &str, url: &str, published_at: Option<&str>) -> RawArticle {
    RawArticle {
        title: Some(title.to_string()),
        description: Some(format!("about {title}")),
        content: None,
        url: Some(url.to_string()),
        image_url: None,
        source_name: Some(source.to_string()),
        published_at: published_at.map(str::to_string),
        language: None,
    }
}

/// Raw article carrying a marker in `content` so tests can tell copies apart.
pub fn raw_marked(title: &str, source: &str, url: &str, marker: &str) -> RawArticle {
    RawArticle {
        content: Some(marker.to_string()),
        ..raw(title, source, url, None)
    }
}

pub fn titles(articles: &[gazette::Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}
