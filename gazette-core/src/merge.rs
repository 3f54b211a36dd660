use std::collections::HashSet;

use gazette_types::{Article, ArticleKey};

/// Merge per-provider article lists in precedence order (first is highest).
///
/// - Articles are keyed by [`Article::key`]; the first appearance wins for
///   duplicates, whether the earlier copy came from a higher-precedence list or
///   from earlier in the same list.
/// - Articles without a key (blank title) are dropped.
/// - Survivors keep insertion order; bodies of duplicates are never compared.
///
/// Deterministic for a fixed input order, and idempotent.
pub fn merge_articles<I, L>(lists: I) -> Vec<Article>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = Article>,
{
    let mut seen: HashSet<ArticleKey> = HashSet::new();
    let mut merged: Vec<Article> = Vec::new();
    let mut untitled = 0usize;
    let mut duplicates = 0usize;

    for list in lists {
        for article in list {
            let Some(key) = article.key() else {
                untitled += 1;
                continue;
            };
            if seen.insert(key) {
                merged.push(article);
            } else {
                duplicates += 1;
            }
        }
    }

    #[cfg(feature = "tracing")]
    if untitled > 0 || duplicates > 0 {
        tracing::debug!(
            kept = merged.len(),
            untitled,
            duplicates,
            "merge dropped articles"
        );
    }
    #[cfg(not(feature = "tracing"))]
    let _ = (untitled, duplicates);

    merged
}

/// Merge per-provider name lists (sources, categories) in precedence order.
///
/// Blank entries are dropped and each exact string is kept once, at its
/// first position.
pub fn merge_labels<I, L>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    for label in lists.into_iter().flatten() {
        if label.trim().is_empty() {
            continue;
        }
        if seen.insert(label.clone()) {
            out.push(label);
        }
    }
    out
}
