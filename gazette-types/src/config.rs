//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use crate::routing_policy::RoutingPolicy;
use serde::{Deserialize, Serialize};

/// Global configuration for the `Gazette` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazetteConfig {
    /// Per-operation provider eligibility rules.
    pub routing_policy: RoutingPolicy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Timeout for a single sentiment classification call.
    pub classifier_timeout: Duration,
    /// Maximum classifier calls in flight for one provider batch.
    pub annotation_concurrency: usize,
}

impl Default for GazetteConfig {
    fn default() -> Self {
        Self {
            routing_policy: RoutingPolicy::default(),
            provider_timeout: Duration::from_secs(5),
            classifier_timeout: Duration::from_secs(5),
            annotation_concurrency: 8,
        }
    }
}
