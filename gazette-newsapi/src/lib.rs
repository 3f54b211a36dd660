//! gazette-newsapi
//!
//! Connector that implements `NewsConnector` on top of the NewsAPI v2 REST
//! endpoints. Exposes free-text, source, category and date-range searches
//! plus source and category listings. Top headlines are not served here.
//!
//! Authentication uses the `X-Api-Key` header. Construct with
//! [`NewsApiConnector::new`] or [`NewsApiConnector::from_env`] (`NEWSAPI_KEY`).
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;
use gazette_core::connector::{
    CategoriesProvider, CategoryProvider, ConnectorKey, DateRangeProvider, NewsConnector,
    QueryProvider, SourceProvider, SourcesProvider,
};
use gazette_core::{DATE_FORMAT, DateRange, GazetteError, Language, RawArticle, merge_labels};
use serde::de::DeserializeOwned;
use url::Url;

use wire::{ArticlesResponse, ErrorBody, SourcesResponse};

/// Public connector type for NewsAPI.
#[derive(Clone)]
pub struct NewsApiConnector {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl NewsApiConnector {
    /// Static connector key for orchestrator configuration and logs.
    pub const KEY: ConnectorKey = ConnectorKey::new("newsapi");

    /// Production API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://newsapi.org/";

    /// Environment variable read by [`from_env`](Self::from_env).
    pub const API_KEY_ENV: &'static str = "NEWSAPI_KEY";

    /// Create a connector for the production API.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `api_key` is blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GazetteError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GazetteError::invalid_arg("NewsAPI key must not be empty"));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parse_base_url(Self::DEFAULT_BASE_URL)?,
            api_key,
        })
    }

    /// Create a connector using the key in `NEWSAPI_KEY`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the variable is unset or blank.
    pub fn from_env() -> Result<Self, GazetteError> {
        let key = std::env::var(Self::API_KEY_ENV).map_err(|_| {
            GazetteError::invalid_arg(format!("{} is not set", Self::API_KEY_ENV))
        })?;
        Self::new(key)
    }

    /// Point the connector at another API root (a proxy or a test server).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, GazetteError> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Use a preconfigured HTTP client (proxies, custom TLS, default timeouts).
    #[must_use]
    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
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
            .header("X-Api-Key", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| GazetteError::connector(Self::KEY.as_str(), format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.code))
                .unwrap_or(body);
            return Err(GazetteError::connector(
                Self::KEY.as_str(),
                format!("HTTP {status}: {detail}"),
            ));
        }
        resp.json::<T>()
            .await
            .map_err(|e| GazetteError::Data(format!("malformed NewsAPI response: {e}")))
    }

    fn ensure_ok(
        status: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), GazetteError> {
        if status == Some("error") {
            return Err(GazetteError::connector(
                Self::KEY.as_str(),
                message.or(code).unwrap_or("unspecified error").to_string(),
            ));
        }
        Ok(())
    }

    async fn articles(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<RawArticle>, GazetteError> {
        let body: ArticlesResponse = self.get_json(path, params).await?;
        Self::ensure_ok(
            body.status.as_deref(),
            body.code.as_deref(),
            body.message.as_deref(),
        )?;
        let Some(articles) = body.articles else {
            #[cfg(feature = "tracing")]
            tracing::warn!(endpoint = path, "NewsAPI response has no articles field");
            return Ok(vec![]);
        };
        Ok(articles.into_iter().map(RawArticle::from).collect())
    }

    async fn source_list(
        &self,
        path: &str,
        lang: &Language,
    ) -> Result<Vec<wire::WireSource>, GazetteError> {
        let body: SourcesResponse = self.get_json(path, &[("language", lang.as_str())]).await?;
        Self::ensure_ok(
            body.status.as_deref(),
            body.code.as_deref(),
            body.message.as_deref(),
        )?;
        if body.sources.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!(endpoint = path, "NewsAPI response has no sources field");
        }
        Ok(body.sources.unwrap_or_default())
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
impl NewsConnector for NewsApiConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "NewsAPI"
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
    fn as_sources_provider(&self) -> Option<&dyn SourcesProvider> {
        Some(self as &dyn SourcesProvider)
    }
    fn as_categories_provider(&self) -> Option<&dyn CategoriesProvider> {
        Some(self as &dyn CategoriesProvider)
    }
}

#[async_trait]
impl QueryProvider for NewsApiConnector {
    async fn search(&self, query: &str, lang: &Language) -> Result<Vec<RawArticle>, GazetteError> {
        self.articles(
            "v2/everything",
            &[
                ("q", query),
                ("language", lang.as_str()),
                ("sortBy", "publishedAt"),
            ],
        )
        .await
    }
}

#[async_trait]
impl SourceProvider for NewsApiConnector {
    async fn by_source(
        &self,
        source: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        let wanted = source.trim().to_lowercase();
        let id = self
            .source_list("v2/top-headlines/sources", lang)
            .await?
            .into_iter()
            .find(|s| {
                s.name
                    .as_deref()
                    .is_some_and(|n| n.trim().to_lowercase() == wanted)
            })
            .and_then(|s| s.id)
            .filter(|id| !id.trim().is_empty());

        let Some(id) = id else {
            return Err(GazetteError::not_found(format!(
                "NewsAPI source id for '{}' ({lang})",
                source.trim()
            )));
        };
        self.articles(
            "v2/everything",
            &[("sources", id.as_str()), ("language", lang.as_str())],
        )
        .await
    }
}

#[async_trait]
impl CategoryProvider for NewsApiConnector {
    async fn by_category(
        &self,
        category: &str,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        self.articles(
            "v2/top-headlines",
            &[("category", category), ("language", lang.as_str())],
        )
        .await
    }
}

#[async_trait]
impl DateRangeProvider for NewsApiConnector {
    async fn by_date_range(
        &self,
        query: &str,
        range: DateRange,
        lang: &Language,
    ) -> Result<Vec<RawArticle>, GazetteError> {
        let from = range.from().format(DATE_FORMAT).to_string();
        let to = range.to().format(DATE_FORMAT).to_string();
        self.articles(
            "v2/everything",
            &[
                ("q", query),
                ("from", from.as_str()),
                ("to", to.as_str()),
                ("language", lang.as_str()),
            ],
        )
        .await
    }
}

#[async_trait]
impl SourcesProvider for NewsApiConnector {
    async fn sources(&self, lang: &Language) -> Result<Vec<String>, GazetteError> {
        let names = self
            .source_list("v2/top-headlines/sources", lang)
            .await?
            .into_iter()
            .filter_map(|s| s.name);
        Ok(merge_labels([names]))
    }
}

#[async_trait]
impl CategoriesProvider for NewsApiConnector {
    async fn categories(&self, lang: &Language) -> Result<Vec<String>, GazetteError> {
        let cats = self
            .source_list("v2/sources", lang)
            .await?
            .into_iter()
            .filter_map(|s| s.category);
        Ok(merge_labels([cats]))
    }
}
