use gazette_core::{Article, GazetteError, Language, Operation, merge_articles, require_text};

use crate::Gazette;
use crate::router::macros::gazette_provider_call;

impl Gazette {
    /// Articles published by the source named `source`.
    ///
    /// Behavior: each provider resolves the human-readable name its own way
    /// (id lookup or filtering a broad result set); an unknown source simply
    /// yields nothing from that provider. Results keep merge order.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `source` or `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(source = %source, lang = %lang))
    )]
    pub async fn search_by_source(
        &self,
        source: &str,
        lang: &str,
    ) -> Result<Vec<Article>, GazetteError> {
        let source = require_text("source", source)?.to_string();
        let lang = Language::new(lang)?;
        let call_lang = lang.clone();
        let op = Operation::BySource;
        let lists = self
            .fetch_articles(
                op,
                &lang,
                None,
                gazette_provider_call!(
                    accessor: as_source_provider,
                    operation: op,
                    clone: [source, call_lang],
                    call: |p| p.by_source(&source, &call_lang)
                ),
            )
            .await;
        Ok(merge_articles(lists))
    }
}
