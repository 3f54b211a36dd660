//! Re-export of foundational types from `gazette-types`.
// Consolidated re-exports so downstream crates can depend on `gazette-core` only

pub use gazette_types::routing_policy::{Operation, RoutingPolicy};
pub use gazette_types::{Article, ArticleKey, RawArticle};
pub use gazette_types::{Capability, ConnectorKey, GazetteError, Tier};
pub use gazette_types::{DATE_FORMAT, DateRange, GazetteConfig, Language, require_text};

pub use chrono::{DateTime, NaiveDate, Utc};
