//! Gazette aggregates news articles across multiple providers.
//!
//! Overview
//! - Routes each request to the providers the routing policy admits, split into a
//!   primary and a secondary tier.
//! - Queries eligible providers concurrently with a per-provider timeout; a failing
//!   provider is logged and contributes nothing.
//! - Normalizes provider records, labels each article with a sentiment through an
//!   optional classifier, then merges with first-writer-wins deduplication.
//! - Sorts free-text search results newest first; other operations keep merge order.
//!
//! Key behaviors and trade-offs
//! - Precedence: primary results come first, so when both tiers report the same
//!   article (same title, source and URL, ignoring case) the primary copy wins.
//! - Routing: gated operations reach the primary tier only for its configured
//!   language; old date ranges and top headlines skip it entirely.
//! - Errors: only argument validation fails a request. Provider and classifier
//!   failures degrade to fewer results or missing labels.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use gazette::Gazette;
//!
//! let gazette = Gazette::builder()
//!     .with_primary(Arc::new(gazette_newsapi::NewsApiConnector::from_env()?))
//!     .with_secondary(Arc::new(gazette_gnews::GNewsConnector::from_env()?))
//!     .classifier(Arc::new(gazette_sentiment::HttpSentimentClassifier::from_env()?))
//!     .build()?;
//!
//! let latest = gazette.search("open source", "en").await?;
//! let happy = gazette.search_by_sentiment("positive", "en").await?;
//! let june = gazette.search_by_date_range("2025-06-01", "2025-06-30", "en").await?;
//! ```
#![warn(missing_docs)]

mod annotate;
pub(crate) mod core;
mod router;

pub use annotate::SentimentAnnotator;
pub use core::{Gazette, GazetteBuilder};

pub use gazette_core::{
    Article, Capability, DateRange, GazetteConfig, GazetteError, Language, NewsConnector,
    RoutingPolicy, SentimentClassifier, Tier,
};
