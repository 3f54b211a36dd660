use async_trait::async_trait;

use crate::GazetteError;

/// External text classifier returning a sentiment label.
///
/// `Ok(None)` means the classifier answered without a label. Callers treat
/// any `Err` the same way: the article simply carries no sentiment.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classifier name for logs.
    fn name(&self) -> &'static str;

    /// Classify arbitrary UTF-8 `text`.
    async fn classify(&self, text: &str) -> Result<Option<String>, GazetteError>;
}
