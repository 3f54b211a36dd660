//! Conversion of provider-neutral raw records into canonical articles.
//!
//! Normalization never fails: missing fields become defaults and an
//! unparseable timestamp only drops `published_at` (with a warning).

use chrono::{DateTime, NaiveDateTime, Utc};
use gazette_types::{Article, Language, RawArticle};

/// Request-scoped facts stamped onto every normalized article.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    /// Language the request asked for.
    pub language: &'a Language,
    /// Category, for category-scoped fetches only.
    pub category: Option<&'a str>,
}

impl<'a> NormalizeContext<'a> {
    /// Context for a request without category scope.
    #[must_use]
    pub const fn new(language: &'a Language) -> Self {
        Self {
            language,
            category: None,
        }
    }

    /// Attach the category the fetch was scoped to.
    #[must_use]
    pub const fn with_category(mut self, category: &'a str) -> Self {
        self.category = Some(category);
        self
    }
}

/// Naive layout accepted as UTC when a provider omits the offset.
const NAIVE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a provider timestamp. RFC 3339 first, then an offset-less ISO layout read as UTC.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, NAIVE_LAYOUT)
        .ok()
        .map(|n| n.and_utc())
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// Build a canonical [`Article`] from one raw record.
#[must_use]
pub fn normalize_article(raw: RawArticle, ctx: &NormalizeContext<'_>) -> Article {
    let published_at = match raw.published_at.as_deref() {
        None => None,
        Some(s) if s.trim().is_empty() => None,
        Some(s) => {
            let parsed = parse_timestamp(s);
            if parsed.is_none() {
                #[cfg(feature = "tracing")]
                tracing::warn!(published_at = s, "unparseable publish timestamp; leaving it empty");
            }
            parsed
        }
    };

    Article {
        title: raw.title.unwrap_or_default(),
        description: non_blank(raw.description),
        content: non_blank(raw.content),
        url: non_blank(raw.url),
        image_url: non_blank(raw.image_url),
        source_name: non_blank(raw.source_name),
        published_at,
        language: ctx.language.as_str().to_string(),
        sentiment: None,
        category: ctx.category.map(str::to_string),
    }
}

/// Normalize a whole provider batch, preserving order.
#[must_use]
pub fn normalize_batch(raws: Vec<RawArticle>, ctx: &NormalizeContext<'_>) -> Vec<Article> {
    raws.into_iter()
        .map(|r| normalize_article(r, ctx))
        .collect()
}
