use std::cmp::Reverse;

use gazette_types::Article;

/// Whether `article` carries `label` as its sentiment, ignoring case.
///
/// Articles without a sentiment never match.
#[must_use]
pub fn sentiment_matches(article: &Article, label: &str) -> bool {
    article
        .sentiment
        .as_deref()
        .is_some_and(|s| s.to_lowercase() == label.to_lowercase())
}

/// Keep only articles whose sentiment equals `label` case-insensitively.
#[must_use]
pub fn retain_sentiment(mut articles: Vec<Article>, label: &str) -> Vec<Article> {
    articles.retain(|a| sentiment_matches(a, label));
    articles
}

/// Sort newest first. Unknown publish times sort last; ties keep their
/// incoming order.
pub fn sort_by_recency(articles: &mut [Article]) {
    // `Option` orders `None` below every `Some`, so reversing puts it last.
    articles.sort_by_key(|a| Reverse(a.published_at));
}
