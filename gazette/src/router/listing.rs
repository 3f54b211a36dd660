use gazette_core::{GazetteError, Language, Operation, merge_labels};

use crate::Gazette;
use crate::router::macros::gazette_provider_call;

impl Gazette {
    /// Names of the publishers known to the eligible providers.
    ///
    /// Behavior: lists are concatenated in precedence order; blanks are
    /// dropped and each exact name is kept once, at its first position.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(lang = %lang))
    )]
    pub async fn sources(&self, lang: &str) -> Result<Vec<String>, GazetteError> {
        let lang = Language::new(lang)?;
        let call_lang = lang.clone();
        let op = Operation::Sources;
        let lists = self
            .fan_out(
                op,
                &lang,
                gazette_provider_call!(
                    accessor: as_sources_provider,
                    operation: op,
                    clone: [call_lang],
                    call: |p| p.sources(&call_lang)
                ),
            )
            .await;
        Ok(merge_labels(lists))
    }

    /// Names of the categories known to the eligible providers.
    ///
    /// Behavior: same concatenate-then-distinct rule as [`sources`](Self::sources).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `lang` is blank.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "gazette::router", skip_all, fields(lang = %lang))
    )]
    pub async fn categories(&self, lang: &str) -> Result<Vec<String>, GazetteError> {
        let lang = Language::new(lang)?;
        let call_lang = lang.clone();
        let op = Operation::Categories;
        let lists = self
            .fan_out(
                op,
                &lang,
                gazette_provider_call!(
                    accessor: as_categories_provider,
                    operation: op,
                    clone: [call_lang],
                    call: |p| p.categories(&call_lang)
                ),
            )
            .await;
        Ok(merge_labels(lists))
    }
}
