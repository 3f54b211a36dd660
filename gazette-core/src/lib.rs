//! gazette-core
//!
//! Core types, traits, and utilities shared across the gazette ecosystem.
//!
//! - `types`: re-exports of the data model (articles, requests, config, errors).
//! - `connector`: the `NewsConnector` trait and capability provider traits.
//! - `sentiment`: the `SentimentClassifier` trait.
//! - `normalize`: raw provider records to canonical articles.
//! - `merge`: precedence-ordered deduplication of per-provider results.
//! - `filter`: post-merge sentiment filter and recency sort.
//!
//! Async runtime
//! -------------
//! The traits are `async_trait` based and runtime-agnostic; the orchestrator
//! in the `gazette` crate drives them on Tokio.
#![warn(missing_docs)]

/// Connector capability traits and the primary `NewsConnector` interface.
pub mod connector;
/// Post-merge filtering and ordering.
pub mod filter;
/// Precedence-ordered merge and deduplication.
pub mod merge;
/// Raw record normalization.
pub mod normalize;
/// External sentiment classifier contract.
pub mod sentiment;
pub mod types;

pub use connector::NewsConnector;
pub use filter::{retain_sentiment, sentiment_matches, sort_by_recency};
pub use merge::{merge_articles, merge_labels};
pub use normalize::{NormalizeContext, normalize_article, normalize_batch, parse_timestamp};
pub use sentiment::SentimentClassifier;
pub use types::*;
