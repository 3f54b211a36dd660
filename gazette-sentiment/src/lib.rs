//! gazette-sentiment
//!
//! HTTP client for an external sentiment classification service, implementing
//! `SentimentClassifier`. The service accepts `POST {base}/analyze` with
//! `{"text": "..."}` and answers `{"sentiment": "<label>"}`.
#![warn(missing_docs)]

use async_trait::async_trait;
use gazette_core::{GazetteError, SentimentClassifier};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    sentiment: Option<String>,
}

/// Sentiment classifier backed by an HTTP service.
#[derive(Clone)]
pub struct HttpSentimentClassifier {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpSentimentClassifier {
    /// Environment variable read by [`from_env`](Self::from_env).
    pub const BASE_URL_ENV: &'static str = "SENTIMENT_API_URL";

    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, GazetteError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Create a client for the service URL in `SENTIMENT_API_URL`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the variable is unset or not a valid URL.
    pub fn from_env() -> Result<Self, GazetteError> {
        let url = std::env::var(Self::BASE_URL_ENV).map_err(|_| {
            GazetteError::invalid_arg(format!("{} is not set", Self::BASE_URL_ENV))
        })?;
        Self::new(&url)
    }

    /// Point the client at another service root.
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
}

fn parse_base_url(raw: &str) -> Result<Url, GazetteError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash)
        .map_err(|e| GazetteError::invalid_arg(format!("invalid base url '{raw}': {e}")))
}

#[async_trait]
impl SentimentClassifier for HttpSentimentClassifier {
    fn name(&self) -> &'static str {
        "http-sentiment"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "gazette_sentiment::classify", skip_all, fields(len = text.len()))
    )]
    async fn classify(&self, text: &str) -> Result<Option<String>, GazetteError> {
        let url = self
            .base_url
            .join("analyze")
            .map_err(|e| GazetteError::Classifier(format!("bad endpoint: {e}")))?;
        let resp = self
            .http
            .post(url)
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(|e| GazetteError::Classifier(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GazetteError::Classifier(format!("HTTP {status}")));
        }
        let body: AnalyzeResponse = resp
            .json()
            .await
            .map_err(|e| GazetteError::Classifier(format!("malformed response: {e}")))?;
        Ok(body.sentiment.filter(|s| !s.trim().is_empty()))
    }
}
