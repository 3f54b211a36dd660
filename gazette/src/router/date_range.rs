use gazette_core::{Article, DateRange, GazetteError, Language, Operation, merge_articles};

use crate::Gazette;
use crate::router::macros::gazette_provider_call;

impl Gazette {
    /// Articles published between `from` and `to` (inclusive, `YYYY-MM-DD`).
    ///
    /// Behavior and trade-offs:
    /// - Issues the routing policy's `broad_query` restricted to the range.
    /// - The primary tier is only queried when `from` is on or after the
    ///   policy's `date_range_cutoff` and `lang` is the primary language;
    ///   older ranges are served by the secondary tier alone.
    /// - Results keep merge order; no recency sort is applied.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a date is malformed, `from > to`, or `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(from = %from, to = %to, lang = %lang))
    )]
    pub async fn search_by_date_range(
        &self,
        from: &str,
        to: &str,
        lang: &str,
    ) -> Result<Vec<Article>, GazetteError> {
        let range = DateRange::parse(from, to)?;
        let lang = Language::new(lang)?;
        let query = self.cfg.routing_policy.broad_query.clone();
        let call_lang = lang.clone();
        let op = Operation::ByDateRange { from: range.from() };
        let lists = self
            .fetch_articles(
                op,
                &lang,
                None,
                gazette_provider_call!(
                    accessor: as_date_range_provider,
                    operation: op,
                    clone: [query, call_lang],
                    call: |p| p.by_date_range(&query, range, &call_lang)
                ),
            )
            .await;
        Ok(merge_articles(lists))
    }
}
