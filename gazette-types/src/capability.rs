use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with facade operations (plus the classifier) and
/// allow consistent Display formatting in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Free-text article search.
    Search,
    /// Articles published by a named source.
    SearchBySource,
    /// Articles in a named category.
    SearchByCategory,
    /// Articles whose derived sentiment matches a label.
    SearchBySentiment,
    /// Articles published within a calendar date range.
    SearchByDateRange,
    /// Current top headlines.
    TopHeadlines,
    /// Names of the publishers a provider knows about.
    Sources,
    /// Names of the categories a provider knows about.
    Categories,
    /// Sentiment classification of a single text.
    Sentiment,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::SearchBySource => "search-by-source",
            Self::SearchByCategory => "search-by-category",
            Self::SearchBySentiment => "search-by-sentiment",
            Self::SearchByDateRange => "search-by-date-range",
            Self::TopHeadlines => "top-headlines",
            Self::Sources => "sources",
            Self::Categories => "categories",
            Self::Sentiment => "sentiment",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
