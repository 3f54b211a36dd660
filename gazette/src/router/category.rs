use gazette_core::{Article, GazetteError, Language, Operation, merge_articles, require_text};

use crate::Gazette;
use crate::router::macros::gazette_provider_call;

impl Gazette {
    /// Articles in `category`.
    ///
    /// Behavior: every returned article carries the requested category, since
    /// providers do not echo it back per article. Results keep merge order.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `category` or `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(category = %category, lang = %lang))
    )]
    pub async fn search_by_category(
        &self,
        category: &str,
        lang: &str,
    ) -> Result<Vec<Article>, GazetteError> {
        let category = require_text("category", category)?.to_string();
        let lang = Language::new(lang)?;
        let call_lang = lang.clone();
        let op = Operation::ByCategory;
        let lists = self
            .fetch_articles(
                op,
                &lang,
                Some(&category),
                gazette_provider_call!(
                    accessor: as_category_provider,
                    operation: op,
                    clone: [category, call_lang],
                    call: |p| p.by_category(&category, &call_lang)
                ),
            )
            .await;
        Ok(merge_articles(lists))
    }
}
