#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use gazette_core::{
    Article, GazetteConfig, GazetteError, Language, NewsConnector, NormalizeContext, Operation,
    RawArticle, RoutingPolicy, SentimentClassifier, Tier, normalize_batch,
};

use crate::annotate::SentimentAnnotator;

/// Orchestrator that routes news requests across registered providers.
pub struct Gazette {
    pub(crate) connectors: Vec<(Tier, Arc<dyn NewsConnector>)>,
    pub(crate) annotator: SentimentAnnotator,
    pub(crate) cfg: GazetteConfig,
}

/// Builder for constructing a `Gazette` orchestrator with custom configuration.
pub struct GazetteBuilder {
    connectors: Vec<(Tier, Arc<dyn NewsConnector>)>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
    cfg: GazetteConfig,
}

impl Default for GazetteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GazetteBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; register at least one via [`with_primary`](Self::with_primary)
    ///   or [`with_secondary`](Self::with_secondary).
    /// - Without a classifier, articles are returned without sentiment labels and
    ///   sentiment searches come back empty.
    /// - Defaults: 5s provider timeout, 5s classifier timeout, 8 classifier calls in flight.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            classifier: None,
            cfg: GazetteConfig::default(),
        }
    }

    /// Register a connector in the given tier.
    ///
    /// Behavior and trade-offs:
    /// - Within a tier, registration order is merge precedence order.
    /// - Duplicates are not deduplicated; avoid registering the same connector twice.
    #[must_use]
    pub fn with_connector(mut self, tier: Tier, c: Arc<dyn NewsConnector>) -> Self {
        self.connectors.push((tier, c));
        self
    }

    /// Register a primary-tier connector.
    ///
    /// Primary results win over secondary ones when both report the same article,
    /// but the routing policy restricts which operations reach this tier.
    #[must_use]
    pub fn with_primary(self, c: Arc<dyn NewsConnector>) -> Self {
        self.with_connector(Tier::Primary, c)
    }

    /// Register a secondary-tier connector, eligible for every operation.
    #[must_use]
    pub fn with_secondary(self, c: Arc<dyn NewsConnector>) -> Self {
        self.with_connector(Tier::Secondary, c)
    }

    /// Attach a sentiment classifier used to label every fetched article.
    ///
    /// Behavior and trade-offs:
    /// - One classifier call per article; batches are bounded by
    ///   [`annotation_concurrency`](Self::annotation_concurrency).
    /// - Classifier failures never fail a request; the article simply carries no label.
    #[must_use]
    pub fn classifier(mut self, c: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: GazetteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the routing policy.
    #[must_use]
    pub fn routing_policy(mut self, policy: RoutingPolicy) -> Self {
        self.cfg.routing_policy = policy;
        self
    }

    /// Language the primary tier is restricted to for gated operations.
    #[must_use]
    pub fn primary_language(mut self, code: impl Into<String>) -> Self {
        self.cfg.routing_policy.primary_language = code.into();
        self
    }

    /// Earliest range start the primary tier can serve for date-range searches.
    ///
    /// Behavior and trade-offs:
    /// - Ranges starting before this date only reach the secondary tier.
    /// - The comparison is inclusive: a range starting on the cutoff still uses primary.
    #[must_use]
    pub const fn date_range_cutoff(mut self, cutoff: NaiveDate) -> Self {
        self.cfg.routing_policy.date_range_cutoff = cutoff;
        self
    }

    /// Query text used by operations that carry no free text of their own.
    ///
    /// Behavior and trade-offs:
    /// - Applies to sentiment and date-range searches, which the orchestrator
    ///   issues as broad searches.
    /// - Connectors that emulate a capability with their own broad search keep
    ///   their own setting (e.g. `GNewsConnector::with_broad_query` for GNews
    ///   source search and source listing); configure both together.
    #[must_use]
    pub fn broad_query(mut self, query: impl Into<String>) -> Self {
        self.cfg.routing_policy.broad_query = query.into();
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Behavior and trade-offs:
    /// - A provider exceeding it counts as failed and contributes nothing.
    /// - Providers are queried concurrently, so this also bounds request latency
    ///   before annotation.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set the timeout for a single classifier call.
    #[must_use]
    pub const fn classifier_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.classifier_timeout = timeout;
        self
    }

    /// Maximum classifier calls in flight per provider batch.
    #[must_use]
    pub const fn annotation_concurrency(mut self, n: usize) -> Self {
        self.cfg.annotation_concurrency = n;
        self
    }

    /// Build the `Gazette` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered, if
    /// `annotation_concurrency` is zero, or if the broad query or primary
    /// language is blank.
    pub fn build(self) -> Result<Gazette, GazetteError> {
        if self.connectors.is_empty() {
            return Err(GazetteError::InvalidArg(
                "no connectors registered; add at least one via with_primary(...) or with_secondary(...)"
                    .to_string(),
            ));
        }
        if self.cfg.annotation_concurrency == 0 {
            return Err(GazetteError::invalid_arg(
                "annotation_concurrency must be at least 1",
            ));
        }
        gazette_core::require_text("broad_query", &self.cfg.routing_policy.broad_query)?;
        gazette_core::require_text(
            "primary_language",
            &self.cfg.routing_policy.primary_language,
        )?;

        let annotator = SentimentAnnotator::new(
            self.classifier,
            self.cfg.classifier_timeout,
            self.cfg.annotation_concurrency,
        );
        Ok(Gazette {
            connectors: self.connectors,
            annotator,
            cfg: self.cfg,
        })
    }
}

/// Tag an error with the connector that produced it, leaving already-tagged errors alone.
pub(crate) fn tag_err(connector: &str, e: GazetteError) -> GazetteError {
    match e {
        e @ (GazetteError::NotFound { .. }
        | GazetteError::Unsupported { .. }
        | GazetteError::ProviderTimeout { .. }
        | GazetteError::Connector { .. }
        | GazetteError::AllProvidersFailed(_)) => e,
        other => GazetteError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Gazette {
    /// Start building a new `Gazette` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let gazette = gazette::Gazette::builder()
    ///     .with_primary(Arc::new(NewsApiConnector::from_env()?))
    ///     .with_secondary(Arc::new(GNewsConnector::from_env()?))
    ///     .classifier(Arc::new(HttpSentimentClassifier::from_env()?))
    ///     .build()?;
    /// let articles = gazette.search("climate", "en").await?;
    /// ```
    #[must_use]
    pub fn builder() -> GazetteBuilder {
        GazetteBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GazetteConfig {
        &self.cfg
    }

    /// The annotator applied to every fetched batch.
    #[must_use]
    pub const fn annotator(&self) -> &SentimentAnnotator {
        &self.annotator
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "gazette::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, GazetteError>
    where
        Fut: core::future::Future<Output = Result<T, GazetteError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(GazetteError::provider_timeout(connector_name, capability)))
    }

    /// Connectors eligible for `op` in merge precedence order.
    ///
    /// Tiers come in the order the routing policy returns them; within a tier,
    /// connectors keep their registration order.
    pub(crate) fn ordered_for(
        &self,
        op: Operation,
        lang: &Language,
    ) -> Vec<(Tier, Arc<dyn NewsConnector>)> {
        self.cfg
            .routing_policy
            .tiers(op, lang)
            .into_iter()
            .flat_map(|tier| {
                self.connectors
                    .iter()
                    .filter(move |(t, _)| *t == tier)
                    .map(|(t, c)| (*t, Arc::clone(c)))
            })
            .collect()
    }

    /// Query every eligible connector concurrently and collect the successes.
    ///
    /// - `call` returns `None` when a connector lacks the capability; it is skipped.
    /// - Each call is bounded by the provider timeout; failures are logged and
    ///   contribute an empty list.
    /// - The result keeps precedence order, one entry per attempted connector.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "gazette::core::fan_out",
            skip_all,
            fields(capability = %op.capability(), lang = %lang),
        )
    )]
    pub(crate) async fn fan_out<T, F, Fut>(
        &self,
        op: Operation,
        lang: &Language,
        call: F,
    ) -> Vec<Vec<T>>
    where
        F: Fn(Arc<dyn NewsConnector>) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<Vec<T>, GazetteError>>,
    {
        let capability = op.capability().as_str();
        let call_timeout = self.cfg.provider_timeout;
        let ordered = self.ordered_for(op, lang);

        #[cfg(feature = "tracing")]
        if ordered.is_empty() {
            tracing::debug!("routing policy admitted no connector");
        }

        let tasks: Vec<_> = ordered
            .into_iter()
            .filter_map(|(tier, c)| {
                let name = c.name();
                let Some(fut) = call(c) else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        connector = name,
                        tier = %tier,
                        "connector lacks capability; skipped"
                    );
                    return None;
                };
                Some(async move {
                    let res = Self::provider_call_with_timeout(name, capability, call_timeout, fut)
                        .await
                        .map_err(|e| tag_err(name, e));
                    (name, tier, res)
                })
            })
            .collect();

        let joined = futures::future::join_all(tasks).await;

        let mut lists: Vec<Vec<T>> = Vec::with_capacity(joined.len());
        let mut failures: Vec<GazetteError> = Vec::new();
        for (name, tier, res) in joined {
            match res {
                Ok(items) => lists.push(items),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    if e.is_actionable() {
                        tracing::warn!(
                            connector = name,
                            tier = %tier,
                            error = %e,
                            "provider failed; continuing without its results"
                        );
                    } else {
                        tracing::debug!(
                            connector = name,
                            tier = %tier,
                            error = %e,
                            "provider had nothing to serve"
                        );
                    }
                    #[cfg(not(feature = "tracing"))]
                    let _ = (name, tier);
                    failures.push(e);
                    lists.push(Vec::new());
                }
            }
        }

        if !failures.is_empty() && failures.len() == lists.len() {
            let all = GazetteError::AllProvidersFailed(failures);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                actionable = all.is_actionable(),
                failures = all.clone().flatten().len(),
                "every eligible provider failed; returning no results"
            );
            #[cfg(not(feature = "tracing"))]
            let _ = all;
        }
        lists
    }

    /// Fan out an article operation, then normalize and annotate each batch.
    ///
    /// The returned lists are still in precedence order and ready for merging.
    pub(crate) async fn fetch_articles<F, Fut>(
        &self,
        op: Operation,
        lang: &Language,
        category: Option<&str>,
        call: F,
    ) -> Vec<Vec<Article>>
    where
        F: Fn(Arc<dyn NewsConnector>) -> Option<Fut>,
        Fut: core::future::Future<Output = Result<Vec<RawArticle>, GazetteError>>,
    {
        let raw_lists = self.fan_out(op, lang, call).await;
        let mut ctx = NormalizeContext::new(lang);
        if let Some(cat) = category {
            ctx = ctx.with_category(cat);
        }
        let batches = raw_lists
            .into_iter()
            .map(|raws| self.annotator.annotate(normalize_batch(raws, &ctx)));
        futures::future::join_all(batches).await
    }
}
