use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use gazette_core::{Article, Capability, GazetteError, SentimentClassifier};

/// Labels articles with a sentiment using an external classifier.
///
/// Behavior and trade-offs:
/// - One classifier call per article on `title + " " + description`.
/// - At most `concurrency` calls are in flight; output order matches input order.
/// - A failed, timed-out or blank classification leaves `sentiment` as `None`
///   and never fails the batch.
/// - Without a classifier, articles pass through unchanged.
pub struct SentimentAnnotator {
    classifier: Option<Arc<dyn SentimentClassifier>>,
    timeout: Duration,
    concurrency: usize,
}

impl SentimentAnnotator {
    /// Create an annotator. A `concurrency` of zero is treated as one.
    #[must_use]
    pub fn new(
        classifier: Option<Arc<dyn SentimentClassifier>>,
        timeout: Duration,
        concurrency: usize,
    ) -> Self {
        Self {
            classifier,
            timeout,
            concurrency: concurrency.max(1),
        }
    }

    /// Whether a classifier is attached.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.classifier.is_some()
    }

    /// Annotate a batch, overwriting any existing `sentiment`.
    pub async fn annotate(&self, articles: Vec<Article>) -> Vec<Article> {
        let Some(classifier) = self.classifier.as_ref() else {
            return articles;
        };
        futures::stream::iter(articles)
            .map(|mut article| async move {
                article.sentiment = self.label(classifier.as_ref(), &article.sentiment_input()).await;
                article
            })
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn label(&self, classifier: &dyn SentimentClassifier, text: &str) -> Option<String> {
        let outcome = tokio::time::timeout(self.timeout, classifier.classify(text))
            .await
            .unwrap_or_else(|_| {
                Err(GazetteError::provider_timeout(
                    classifier.name(),
                    Capability::Sentiment.as_str(),
                ))
            });
        match outcome {
            Ok(Some(label)) if !label.trim().is_empty() => Some(label),
            Ok(_) => None,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    classifier = classifier.name(),
                    error = %e,
                    "classification failed; leaving sentiment empty"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = e;
                None
            }
        }
    }
}
