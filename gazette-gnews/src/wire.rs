//! GNews response payloads.

use gazette_core::RawArticle;
use serde::Deserialize;

/// Body returned by `/api/v4/search` and `/api/v4/top-headlines`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    #[serde(default)]
    pub articles: Option<Vec<WireArticle>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: Option<SourceRef>,
}

#[derive(Debug, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body returned by `/api/v4/sources`.
#[derive(Debug, Deserialize)]
pub struct SourcesResponse {
    #[serde(default)]
    pub sources: Option<Vec<WireSource>>,
}

#[derive(Debug, Deserialize)]
pub struct WireSource {
    #[serde(default)]
    pub category: Option<String>,
}

/// GNews reports failures as `{"errors": [...]}` or `{"errors": {...}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn summary(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        let parts: Vec<String> = match errors {
            serde_json::Value::Array(items) => items.iter().map(value_text).collect(),
            serde_json::Value::Object(map) => map.values().map(value_text).collect(),
            other => vec![value_text(other)],
        };
        Some(parts.join("; "))
    }
}

fn value_text(v: &serde_json::Value) -> String {
    v.as_str().map_or_else(|| v.to_string(), str::to_string)
}

impl WireArticle {
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

impl From<WireArticle> for RawArticle {
    fn from(a: WireArticle) -> Self {
        Self {
            title: a.title,
            description: a.description,
            content: a.content,
            url: a.url,
            image_url: a.image,
            source_name: a.source.and_then(|s| s.name),
            published_at: a.published_at,
            language: None,
        }
    }
}
