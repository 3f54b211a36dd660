//! Canonical article record and its composite identity key.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider-agnostic news article.
///
/// Built fresh per request from a provider payload; only `sentiment` is filled
/// in after construction, once, before results are merged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline. Blank means the article has no identity and is dropped on merge.
    pub title: String,
    /// Short summary.
    pub description: Option<String>,
    /// Body text or provider-truncated excerpt.
    pub content: Option<String>,
    /// Canonical link to the article.
    pub url: Option<String>,
    /// Lead image link.
    pub image_url: Option<String>,
    /// Human-readable publisher name.
    pub source_name: Option<String>,
    /// Publication instant; `None` when missing or unparseable upstream.
    pub published_at: Option<DateTime<Utc>>,
    /// Language code of the request that produced this article.
    pub language: String,
    /// Derived sentiment label, e.g. "positive".
    pub sentiment: Option<String>,
    /// Category, set only when fetched through a category-scoped request.
    pub category: Option<String>,
}

impl Article {
    /// Composite identity of this article, or `None` when the title is blank.
    #[must_use]
    pub fn key(&self) -> Option<ArticleKey> {
        ArticleKey::new(
            &self.title,
            self.source_name.as_deref(),
            self.url.as_deref(),
        )
    }

    /// Text submitted to the sentiment classifier: title and description joined by a space.
    #[must_use]
    pub fn sentiment_input(&self) -> String {
        format!(
            "{} {}",
            self.title,
            self.description.as_deref().unwrap_or_default()
        )
    }
}

/// Normalized `title_source_url` identity used for deduplication.
///
/// Each component is trimmed and lowercased; missing source or url
/// contribute an empty component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleKey(String);

impl ArticleKey {
    /// Build a key from raw components. Returns `None` for a blank title.
    #[must_use]
    pub fn new(title: &str, source_name: Option<&str>, url: Option<&str>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let part = |s: Option<&str>| s.map(|v| v.trim().to_lowercase()).unwrap_or_default();
        Some(Self(format!(
            "{}_{}_{}",
            title.to_lowercase(),
            part(source_name),
            part(url)
        )))
    }

    /// Borrow the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider-neutral raw article as decoded from an upstream payload.
///
/// Connectors translate their wire format into this shape; the normalizer in
/// `gazette-core` turns it into an [`Article`]. Every field is optional and
/// `published_at` is kept in the provider's own string format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Headline as sent by the provider.
    pub title: Option<String>,
    /// Summary as sent by the provider.
    pub description: Option<String>,
    /// Body or excerpt as sent by the provider.
    pub content: Option<String>,
    /// Article link.
    pub url: Option<String>,
    /// Image link, whatever the provider calls it.
    pub image_url: Option<String>,
    /// Nested source/publisher name.
    pub source_name: Option<String>,
    /// Provider-formatted publication timestamp.
    pub published_at: Option<String>,
    /// Provider-detected language, informational only.
    pub language: Option<String>,
}
