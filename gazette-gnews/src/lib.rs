//! gazette-gnews
//!
//! Connector that implements `NewsConnector` on top of the GNews v4 REST API.
//! Serves every capability, including top headlines, and is usually
//! registered as the secondary tier.
//!
//! GNews has no source filter, so source searches and the source listing are
//! derived from a broad search. Authentication uses the `token` query parameter.
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;
use gazette_core::connector::{
    CategoriesProvider, CategoryProvider, ConnectorKey, DateRangeProvider, NewsConnector,
    QueryProvider, SourceProvider, SourcesProvider, TopHeadlinesProvider,
};
use gazette_core::{DATE_FORMAT, DateRange, GazetteError, Language, RawArticle, merge_labels};
use serde::de::DeserializeOwned;
use url::Url;

use wire::{ArticlesResponse, ErrorBody, SourcesResponse, WireArticle};

/// Public connector type for GNews.
#[derive(Clone)]
pub struct GNewsConnector {
    http: reqwest::Client,
    base_url: Url,
    token: String,
    broad_query: String,
}

impl GNewsConnector {
    /// Static connector key for orchestrator configuration and logs.
    pub const KEY: ConnectorKey = ConnectorKey::new("gnews");

    /// Production API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://gnews.io/";

    /// Environment variable read by [`from_env`](Self::from_env).
    pub const TOKEN_ENV: &'static str = "GNEWS_KEY";

    /// Broad query used until [`with_broad_query`](Self::with_broad_query) overrides it.
    /// Matches the default of the orchestrator's routing policy.
    pub const DEFAULT_BROAD_QUERY: &'static str = "latest";

    /// Create a connector for the production API.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `token` is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, GazetteError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(GazetteError::invalid_arg("GNews token must not be empty"));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parse_base_url(Self::DEFAULT_BASE_URL)?,
            token,
            broad_query: Self::DEFAULT_BROAD_QUERY.to_string(),
        })
    }

    /// Create a connector using the token in `GNEWS_KEY`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the variable is unset or blank.
    pub fn from_env() -> Result<Self, GazetteError> {
        let token = std::env::var(Self::TOKEN_ENV)
            .map_err(|_| GazetteError::invalid_arg(format!("{} is not set", Self::TOKEN_ENV)))?;
        Self::new(token)
    }

    /// Point the connector at another API root (a proxy or a test server).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, GazetteError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Query used for source searches and the source listing (default `"latest"`).
    ///
    /// This is separate from `GazetteBuilder::broad_query`, which only shapes the
    /// queries the orchestrator itself issues (sentiment and date-range searches).
    /// Set both when changing the broad query so they stay aligned.
    #[must_use]
    pub fn with_broad_query(mut self, query: impl Into<String>) -> Self {
        self.broad_query = query.into();
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, GazetteError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| GazetteError::invalid_arg(format!("bad endpoint {path}: {e}")))?;
        let resp = self
            .http
            .get(url)
            .query(params)
            .query(&[("token", self.token.as_str())])
            .send()
            .await
            .map_err(|e| GazetteError::connector(Self::KEY.as_str(), format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.summary())
                .unwrap_or(body);
            return Err(GazetteError::connector(
                Self::KEY.as_str(),
                format!("HTTP {status}: {detail}"),
            ));
        }
        resp.json::<T>()
            .await
            .map_err(|e| GazetteError::Data(format!("malformed GNews response: {e}")))
    }

    async fn wire_articles(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<WireArticle>, GazetteError> {
        let body: ArticlesResponse = self.get_json(path, params).await?;
        if body.articles.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!(endpoint = path, "GNews response has no articles field");
        }
        Ok(body.articles.unwrap_or_default())
    }

    async fn articles(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<RawArticle>, GazetteError> {
        Ok(self
            .wire_articles(path, params)
            .await?
            .into_iter()
            .map(RawArticle::from)
            .collect())
    }

    async fn broad_search(&self, lang: &Language) -> Result<Vec<WireArticle>, GazetteError> {
        self.wire_articles(
            "api/v4/search",
            &[
                ("q", self.broad_query.as_str()),
                ("lang", lang.as_str()),
                ("sortby", "publishedAt"),
            ],
        )
        .await
    }
}

fn parse_base_url(raw: &str) -> Result<Url, GazetteError> {
    // `Url::join` replaces the last segment unless the base ends with '/'.
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash)
        .map_err(|e| GazetteError::invalid_arg(format!("invalid base url '{raw}': {e}")))
}

#[async_trait]
impl NewsConnector for GNewsConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "GNews"
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
impl QueryProvider for GNewsConnector {
    async fn search(&self, query: &str, lang: &Language) -> Result<Vec<RawArticle>, GazetteError> {
        self.articles(
            "api/v4/search",
            &[
                ("q", query),
                ("lang", lang.as_str()),
                ("sortby", "publishedAt"),
            ],
        )
        .await
    }
}

#[async_trait]
impl SourceProvider for GNewsConnector {
    async fn by_source(
        &self,
        source: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        let wanted = source.trim().to_lowercase();
        Ok(self
            .broad_search(lang)
            .await?
            .into_iter()
            .filter(|a| {
                a.source_name()
                    .is_some_and(|n| n.trim().to_lowercase() == wanted)
            })
            .map(RawArticle::from)
            .collect())
    }
}

#[async_trait]
impl CategoryProvider for GNewsConnector {
    async fn by_category(
        &self,
        category: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        self.articles(
            "api/v4/top-headlines",
            &[("category", category), ("lang", lang.as_str())],
        )
        .await
    }
}

#[async_trait]
impl DateRangeProvider for GNewsConnector {
    async fn by_date_range(
        &self,
        query: &str,
        range: DateRange,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        // GNews expects full timestamps; cover both calendar days completely.
        let from = format!("{}T00:00:00Z", range.from().format(DATE_FORMAT));
        let to = format!("{}T23:59:59Z", range.to().format(DATE_FORMAT));
        self.articles(
            "api/v4/search",
            &[
                ("q", query),
                ("lang", lang.as_str()),
                ("from", from.as_str()),
                ("to", to.as_str()),
            ],
        )
        .await
    }
}

#[async_trait]
impl TopHeadlinesProvider for GNewsConnector {
    async fn top_headlines(&self, lang: &Language) -> Result<Vec<RawArticle>, GazetteError> {
        self.articles("api/v4/top-headlines", &[("lang", lang.as_str())])
            .await
    }
}

#[async_trait]
impl SourcesProvider for GNewsConnector {
    async fn sources(&self, lang: &Language) -> Result<Vec<String>, GazetteError> {
        let names = self
            .broad_search(lang)
            .await?
            .into_iter()
            .filter_map(|a| a.source.and_then(|s| s.name));
        Ok(merge_labels([names]))
    }
}

#[async_trait]
impl CategoriesProvider for GNewsConnector {
    async fn categories(&self, lang: &Language) -> Result<Vec<String>, GazetteError> {
        let body: SourcesResponse = self
            .get_json("api/v4/sources", &[("lang", lang.as_str())])
            .await?;
        if body.sources.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!("GNews sources response has no sources field");
        }
        let cats = body
            .sources
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| s.category);
        Ok(merge_labels([cats]))
    }
}
