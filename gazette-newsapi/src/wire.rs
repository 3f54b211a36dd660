//! NewsAPI response payloads.

use gazette_core::RawArticle;
use serde::Deserialize;

/// Body returned by `/v2/everything` and `/v2/top-headlines`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub articles: Option<Vec<WireArticle>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireArticle {
    #[serde(default)]
    pub source: Option<SourceRef>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body returned by `/v2/sources` and `/v2/top-headlines/sources`.
#[derive(Debug, Deserialize)]
pub struct SourcesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<WireSource>>,
}

#[derive(Debug, Deserialize)]
pub struct WireSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Error body NewsAPI sends with `"status": "error"`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<WireArticle> for RawArticle {
    fn from(a: WireArticle) -> Self {
        Self {
            title: a.title,
            description: a.description,
            content: a.content,
            url: a.url,
            image_url: a.url_to_image,
            source_name: a.source.and_then(|s| s.name),
            published_at: a.published_at,
            language: None,
        }
    }
}
