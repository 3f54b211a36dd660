//! Gazette-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod article;
mod capability;
mod config;
mod connector;
mod error;
mod request;
pub mod routing_policy;

pub use article::{Article, ArticleKey, RawArticle};
pub use capability::Capability;
pub use config::GazetteConfig;
pub use connector::{ConnectorKey, Tier};
pub use error::GazetteError;
pub use request::{DATE_FORMAT, DateRange, Language, require_text};
pub use routing_policy::{Operation, RoutingPolicy};
