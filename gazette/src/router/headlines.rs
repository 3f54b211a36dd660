use gazette_core::{Article, GazetteError, Language, Operation, merge_articles};

use crate::Gazette;
use crate::router::macros::gazette_provider_call;

impl Gazette {
    /// Current top headlines in `lang`.
    ///
    /// Behavior: served by the secondary tier only; results still go through
    /// the merge so duplicate headlines are collapsed, and keep merge order.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(lang = %lang))
    )]
    pub async fn top_headlines(&self, lang: &str) -> Result<Vec<Article>, GazetteError> {
        let lang = Language::new(lang)?;
        let call_lang = lang.clone();
        let op = Operation::TopHeadlines;
        let lists = self
            .fetch_articles(
                op,
                &lang,
                None,
                gazette_provider_call!(
                    accessor: as_top_headlines_provider,
                    operation: op,
                    clone: [call_lang],
                    call: |p| p.top_headlines(&call_lang)
                ),
            )
            .await;
        Ok(merge_articles(lists))
    }
}
