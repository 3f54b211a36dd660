use async_trait::async_trait;

use crate::GazetteError;
pub use gazette_types::ConnectorKey;
use gazette_types::{DateRange, Language, RawArticle};

/// Focused role trait for connectors that run free-text searches.
#[async_trait]
pub trait QueryProvider: Send + Sync {
    /// Search articles matching `query` in language `lang`.
    async fn search(&self, query: &str, lang: &Language) -> Result<Vec<RawArticle>, GazetteError>;
}

/// Focused role trait for connectors that can list articles of one publisher.
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// Fetch articles published by the source named `source`.
    ///
    /// Implementations resolve the human-readable name themselves (by id
    /// lookup or by filtering a broader result set).
    async fn by_source(
        &self,
        source: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError>;
}

/// Focused role trait for connectors that serve category-scoped articles.
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    /// Fetch articles in `category`.
    async fn by_category(
        &self,
        category: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError>;
}

/// Focused role trait for connectors that filter by publication date.
#[async_trait]
pub trait DateRangeProvider: Send + Sync {
    /// Fetch articles matching `query` published within `range`.
    async fn by_date_range(
        &self,
        query: &str,
        range: DateRange,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError>;
}

/// Focused role trait for connectors that expose top headlines.
#[async_trait]
pub trait TopHeadlinesProvider: Send + Sync {
    /// Fetch current top headlines in `lang`.
    async fn top_headlines(&self, lang: &Language) -> Result<Vec<RawArticle>, GazetteError>;
}

/// Focused role trait for connectors that list known publishers.
#[async_trait]
pub trait SourcesProvider: Send + Sync {
    /// Publisher names available in `lang`.
    async fn sources(&self, lang: &Language) -> Result<Vec<String>, GazetteError>;
}

/// Focused role trait for connectors that list known categories.
#[async_trait]
pub trait CategoriesProvider: Send + Sync {
    /// Category names available in `lang`.
    async fn categories(&self, lang: &Language) -> Result<Vec<String>, GazetteError>;
}

/// Primary connector interface implemented by every news provider adapter.
///
/// Capabilities are discovered through the `as_*_provider` accessors; each
/// defaults to `None` so an adapter only opts into what its upstream serves.
#[async_trait]
pub trait NewsConnector: Send + Sync {
    /// Stable connector name, used in logs and error tagging.
    fn name(&self) -> &'static str;

    /// Typed key derived from [`name`](Self::name).
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Upstream vendor label.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Free-text search capability.
    fn as_query_provider(&self) -> Option<&dyn QueryProvider> {
        None
    }

    /// Search-by-source capability.
    fn as_source_provider(&self) -> Option<&dyn SourceProvider> {
        None
    }

    /// Search-by-category capability.
    fn as_category_provider(&self) -> Option<&dyn CategoryProvider> {
        None
    }

    /// Search-by-date-range capability.
    fn as_date_range_provider(&self) -> Option<&dyn DateRangeProvider> {
        None
    }

    /// Top headlines capability.
    fn as_top_headlines_provider(&self) -> Option<&dyn TopHeadlinesProvider> {
        None
    }

    /// Publisher listing capability.
    fn as_sources_provider(&self) -> Option<&dyn SourcesProvider> {
        None
    }

    /// Category listing capability.
    fn as_categories_provider(&self) -> Option<&dyn CategoriesProvider> {
        None
    }
}
