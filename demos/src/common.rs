use std::sync::Arc;

use gazette::{Gazette, GazetteError};
use tracing_subscriber::fmt::format::FmtSpan;

/// Build a gazette for examples.
///
/// With `GAZETTE_EXAMPLES_USE_MOCK` set, both tiers and the classifier are
/// fixture-backed mocks. Otherwise NewsAPI is the primary tier, GNews the
/// secondary tier, and a sentiment service is attached when
/// `SENTIMENT_API_URL` is set.
///
/// # Errors
/// Returns `InvalidArg` if a required API key is missing.
pub fn get_gazette() -> Result<Gazette, GazetteError> {
    if std::env::var("GAZETTE_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connectors for CI) ---");
        return Gazette::builder()
            .with_primary(Arc::new(gazette_mock::MockConnector::primary()))
            .with_secondary(Arc::new(gazette_mock::MockConnector::secondary()))
            .classifier(Arc::new(gazette_mock::MockClassifier::new()))
            .build();
    }

    // GNews emulates source search with its own broad query; keep it aligned.
    let broad_query = std::env::var("GAZETTE_BROAD_QUERY")
        .unwrap_or_else(|_| gazette_gnews::GNewsConnector::DEFAULT_BROAD_QUERY.to_string());
    let gnews = gazette_gnews::GNewsConnector::from_env()?.with_broad_query(broad_query.clone());
    let mut builder = Gazette::builder()
        .with_primary(Arc::new(gazette_newsapi::NewsApiConnector::from_env()?))
        .with_secondary(Arc::new(gnews))
        .broad_query(broad_query);
    match gazette_sentiment::HttpSentimentClassifier::from_env() {
        Ok(classifier) => builder = builder.classifier(Arc::new(classifier)),
        Err(e) => tracing::warn!(error = %e, "running without sentiment classification"),
    }
    builder.build()
}

/// Install a human-friendly subscriber filtered by `RUST_LOG`.
///
/// Suggested: `RUST_LOG=info,gazette=debug,gazette_newsapi=debug,gazette_gnews=debug`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Print one line per article.
pub fn print_articles(articles: &[gazette::Article]) {
    for a in articles {
        let when = a
            .published_at
            .map_or_else(|| "undated".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());
        println!(
            "{when:<16}  {:<9}  {:<16}  {}",
            a.sentiment.as_deref().unwrap_or("-"),
            a.source_name.as_deref().unwrap_or("-"),
            a.title
        );
    }
}
