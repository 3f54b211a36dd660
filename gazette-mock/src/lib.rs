//! Mock gazette connectors and sentiment classifier backed by static fixtures.
//!
//! Queries containing `"fail"` return a connector error and queries containing
//! `"slow"` stall long enough to trip a short provider timeout, so demos and
//! tests can exercise failure isolation without a network.
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use gazette_core::connector::{
    CategoriesProvider, CategoryProvider, DateRangeProvider, NewsConnector, QueryProvider,
    SourceProvider, SourcesProvider, TopHeadlinesProvider,
};
use gazette_core::{
    DateRange, GazetteError, Language, RawArticle, SentimentClassifier, parse_timestamp,
};

mod fixtures;

use fixtures::articles::{Fixture, PRIMARY, SECONDARY};

/// How long a `"slow"` query stalls before answering.
pub const SLOW_DELAY: Duration = Duration::from_secs(30);

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector {
    name: &'static str,
    fixtures: &'static [Fixture],
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::primary()
    }
}

impl MockConnector {
    /// Connector serving the primary fixture set, named `"mock-primary"`.
    #[must_use]
    pub const fn primary() -> Self {
        Self {
            name: "mock-primary",
            fixtures: PRIMARY,
        }
    }

    /// Connector serving the secondary fixture set, named `"mock-secondary"`.
    ///
    /// Its first article duplicates the primary set's first article.
    #[must_use]
    pub const fn secondary() -> Self {
        Self {
            name: "mock-secondary",
            fixtures: SECONDARY,
        }
    }

    async fn maybe_fail_or_stall(&self, query: &str, capability: &'static str) -> Result<(), GazetteError> {
        let q = query.to_ascii_lowercase();
        if q.contains("fail") {
            return Err(GazetteError::connector(
                self.name,
                format!("forced failure: {capability}"),
            ));
        }
        if q.contains("slow") {
            tokio::time::sleep(SLOW_DELAY).await;
        }
        Ok(())
    }

    fn in_lang<'a>(&'a self, lang: &'a Language) -> impl Iterator<Item = &'static Fixture> + 'a {
        self.fixtures
            .iter()
            .filter(move |f| f.language == lang.as_str())
    }

    fn collect<'a>(it: impl Iterator<Item = &'a Fixture>) -> Vec<RawArticle> {
        it.map(Fixture::to_raw).collect()
    }

    fn published_on(f: &Fixture) -> Option<NaiveDate> {
        parse_timestamp(f.published_at).map(|ts| ts.date_naive())
    }
}

#[async_trait]
impl NewsConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_query_provider(&self) -> Option<&dyn QueryProvider> {
        Some(self as &dyn QueryProvider)
    }
    fn as_source_provider(&self) -> Option<&dyn SourceProvider> {
        Some(self as &dyn SourceProvider)
    }
    fn as_category_provider(&self) -> Option<&dyn CategoryProvider> {
        Some(self as &dyn CategoryProvider)
    }
    fn as_date_range_provider(&self) -> Option<&dyn DateRangeProvider> {
        Some(self as &dyn DateRangeProvider)
    }
    fn as_top_headlines_provider(&self) -> Option<&dyn TopHeadlinesProvider> {
        Some(self as &dyn TopHeadlinesProvider)
    }
    fn as_sources_provider(&self) -> Option<&dyn SourcesProvider> {
        Some(self as &dyn SourcesProvider)
    }
    fn as_categories_provider(&self) -> Option<&dyn CategoriesProvider> {
        Some(self as &dyn CategoriesProvider)
    }
}

#[async_trait]
impl QueryProvider for MockConnector {
    async fn search(&self, query: &str, lang: &Language) -> Result<Vec<RawArticle>, GazetteError> {
        self.maybe_fail_or_stall(query, "search").await?;
        let q = query.to_lowercase();
        // The broad query matches everything, like a real "latest" search.
        if q == "latest" {
            return Ok(Self::collect(self.in_lang(lang)));
        }
        Ok(Self::collect(self.in_lang(lang).filter(|f| {
            f.title.to_lowercase().contains(&q) || f.description.to_lowercase().contains(&q)
        })))
    }
}

#[async_trait]
impl SourceProvider for MockConnector {
    async fn by_source(
        &self,
        source: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        self.maybe_fail_or_stall(source, "search-by-source").await?;
        let wanted = source.trim().to_lowercase();
        Ok(Self::collect(
            self.in_lang(lang)
                .filter(|f| f.source.trim().to_lowercase() == wanted),
        ))
    }
}

#[async_trait]
impl CategoryProvider for MockConnector {
    async fn by_category(
        &self,
        category: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        self.maybe_fail_or_stall(category, "search-by-category").await?;
        Ok(Self::collect(
            self.in_lang(lang)
                .filter(|f| f.category.eq_ignore_ascii_case(category.trim())),
        ))
    }
}

#[async_trait]
impl DateRangeProvider for MockConnector {
    async fn by_date_range(
        &self,
        query: &str,
        range: DateRange,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        self.maybe_fail_or_stall(query, "search-by-date-range").await?;
        Ok(Self::collect(self.in_lang(lang).filter(|f| {
            Self::published_on(f).is_some_and(|d| range.from() <= d && d <= range.to())
        })))
    }
}

#[async_trait]
impl TopHeadlinesProvider for MockConnector {
    async fn top_headlines(&self, lang: &Language) -> Result<Vec<RawArticle>, GazetteError> {
        Ok(Self::collect(self.in_lang(lang)))
    }
}

#[async_trait]
impl SourcesProvider for MockConnector {
    async fn sources(&self, lang: &Language) -> Result<Vec<String>, GazetteError> {
        Ok(fixtures::listings::distinct(self.fixtures, lang.as_str(), |f| f.source))
    }
}

#[async_trait]
impl CategoriesProvider for MockConnector {
    async fn categories(&self, lang: &Language) -> Result<Vec<String>, GazetteError> {
        Ok(fixtures::listings::distinct(self.fixtures, lang.as_str(), |f| f.category))
    }
}

const POSITIVE: &[&str] = &["record", "wins", "celebrat", "breakthrough", "surge"];
const NEGATIVE: &[&str] = &["storm", "loss", "declin", "crash", "outage"];

/// Keyword-based sentiment classifier.
///
/// Labels text `"positive"`, `"negative"` or `"neutral"`; text containing
/// `"unclassifiable"` yields a classifier error.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockClassifier;

impl MockClassifier {
    /// Create a classifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The label `classify` would produce, without the async wrapper.
    #[must_use]
    pub fn label_for(text: &str) -> &'static str {
        let t = text.to_lowercase();
        if POSITIVE.iter().any(|k| t.contains(k)) {
            "positive"
        } else if NEGATIVE.iter().any(|k| t.contains(k)) {
            "negative"
        } else {
            "neutral"
        }
    }
}

#[async_trait]
impl SentimentClassifier for MockClassifier {
    fn name(&self) -> &'static str {
        "mock-classifier"
    }

    async fn classify(&self, text: &str) -> Result<Option<String>, GazetteError> {
        if text.to_lowercase().contains("unclassifiable") {
            return Err(GazetteError::Classifier("forced failure".into()));
        }
        Ok(Some(Self::label_for(text).to_string()))
    }
}
