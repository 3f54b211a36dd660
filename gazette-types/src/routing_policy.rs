//! Per-operation provider eligibility.
//!
//! The policy is a pure function of the operation and the request language:
//! it decides which [`Tier`]s are queried and always returns them in merge
//! precedence order (`Primary` before `Secondary`).
//!
//! Rules:
//! - Free-text search and category listing query every tier.
//! - Source, category and sentiment searches and source listing query the
//!   primary tier only when the request language equals `primary_language`.
//! - Date-range searches additionally require `from >= date_range_cutoff`
//!   for the primary tier, reflecting its retention window.
//! - Top headlines never query the primary tier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::connector::Tier;
use crate::request::Language;

/// Operation being routed, with the only parameters routing depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Free-text search.
    Search,
    /// Search by publisher name.
    BySource,
    /// Search by category.
    ByCategory,
    /// Broad search post-filtered by sentiment.
    BySentiment,
    /// Search within a date range starting at `from`.
    ByDateRange {
        /// First day of the requested range.
        from: NaiveDate,
    },
    /// Top headlines.
    TopHeadlines,
    /// Publisher name listing.
    Sources,
    /// Category name listing.
    Categories,
}

impl Operation {
    /// Capability label used in logs and errors.
    #[must_use]
    pub const fn capability(self) -> Capability {
        match self {
            Self::Search => Capability::Search,
            Self::BySource => Capability::SearchBySource,
            Self::ByCategory => Capability::SearchByCategory,
            Self::BySentiment => Capability::SearchBySentiment,
            Self::ByDateRange { .. } => Capability::SearchByDateRange,
            Self::TopHeadlines => Capability::TopHeadlines,
            Self::Sources => Capability::Sources,
            Self::Categories => Capability::Categories,
        }
    }
}

/// Routing rules for the primary/secondary provider split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    /// Only language the primary tier is queried with for gated operations.
    pub primary_language: String,
    /// Earliest `from` date the primary tier can serve for date-range searches.
    pub date_range_cutoff: NaiveDate,
    /// Query sent when an operation carries no free text of its own.
    pub broad_query: String,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self {
            primary_language: "en".to_string(),
            date_range_cutoff: NaiveDate::from_ymd_opt(2025, 6, 20).unwrap_or_default(),
            broad_query: "latest".to_string(),
        }
    }
}

impl RoutingPolicy {
    /// Whether `tier` should be queried for `op` in language `lang`.
    #[must_use]
    pub fn admits(&self, tier: Tier, op: Operation, lang: &Language) -> bool {
        match tier {
            Tier::Secondary => true,
            Tier::Primary => {
                let lang_ok = lang.as_str() == self.primary_language;
                match op {
                    Operation::Search | Operation::Categories => true,
                    Operation::BySource
                    | Operation::ByCategory
                    | Operation::BySentiment
                    | Operation::Sources => lang_ok,
                    Operation::ByDateRange { from } => lang_ok && from >= self.date_range_cutoff,
                    Operation::TopHeadlines => false,
                }
            }
        }
    }

    /// Eligible tiers for `op` in precedence order.
    #[must_use]
    pub fn tiers(&self, op: Operation, lang: &Language) -> Vec<Tier> {
        [Tier::Primary, Tier::Secondary]
            .into_iter()
            .filter(|t| self.admits(*t, op, lang))
            .collect()
    }
}
