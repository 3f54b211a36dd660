use gazette_core::{
    Article, GazetteError, Language, Operation, merge_articles, require_text, retain_sentiment,
    sort_by_recency,
};

use crate::Gazette;
use crate::router::macros::gazette_provider_call;

impl Gazette {
    /// Search every eligible provider for `query` in language `lang`.
    ///
    /// Behavior: results are merged in precedence order (first copy of an
    /// article wins), then sorted newest first with undated articles last.
    /// A failing provider contributes nothing.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `query` or `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(query = %query, lang = %lang))
    )]
    pub async fn search(&self, query: &str, lang: &str) -> Result<Vec<Article>, GazetteError> {
        let query = require_text("query", query)?.to_string();
        let lang = Language::new(lang)?;
        let call_lang = lang.clone();
        let op = Operation::Search;
        let lists = self
            .fetch_articles(
                op,
                &lang,
                None,
                gazette_provider_call!(
                    accessor: as_query_provider,
                    operation: op,
                    clone: [query, call_lang],
                    call: |p| p.search(&query, &call_lang)
                ),
            )
            .await;
        let mut merged = merge_articles(lists);
        sort_by_recency(&mut merged);
        Ok(merged)
    }

    /// Articles whose derived sentiment equals `sentiment`, ignoring case.
    ///
    /// Behavior: runs a broad search (the routing policy's `broad_query`),
    /// merges, and keeps only articles whose classifier label matches.
    /// Articles the classifier could not label never match. The merge order is
    /// kept; no recency sort is applied.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `sentiment` or `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(sentiment = %sentiment, lang = %lang))
    )]
    pub async fn search_by_sentiment(
        &self,
        sentiment: &str,
        lang: &str,
    ) -> Result<Vec<Article>, GazetteError> {
        let sentiment = require_text("sentiment", sentiment)?;
        let lang = Language::new(lang)?;
        #[cfg(feature = "tracing")]
        if !self.annotator.is_enabled() {
            tracing::warn!("no sentiment classifier configured; every article will be filtered out");
        }
        let query = self.cfg.routing_policy.broad_query.clone();
        let call_lang = lang.clone();
        let op = Operation::BySentiment;
        let lists = self
            .fetch_articles(
                op,
                &lang,
                None,
                gazette_provider_call!(
                    accessor: as_query_provider,
                    operation: op,
                    clone: [query, call_lang],
                    call: |p| p.search(&query, &call_lang)
                ),
            )
            .await;
        Ok(retain_sentiment(merge_articles(lists), sentiment))
    }
}
