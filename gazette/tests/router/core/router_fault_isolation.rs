use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use crate::helpers::{MockConnector, raw, titles};
use gazette::{Gazette, GazetteError, Language, NewsConnector};
use gazette_core::RawArticle;
use gazette_core::connector::QueryProvider;

#[tokio::test]
async fn failing_secondary_still_returns_primary_results() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_search_ok(vec![raw("P1", "S", "u1", None), raw("P2", "S", "u2", None)])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_search_fn(|_, _| Err(GazetteError::connector("secondary", "boom")))
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary)
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(titles(&out), vec!["P1", "P2"]);
}

#[tokio::test]
async fn every_provider_failing_yields_empty_success() {
    let a = MockConnector::builder()
        .name("a")
        .with_search_fn(|_, _| Err(GazetteError::Data("bad payload".into())))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .with_search_fn(|_, _| Err(GazetteError::connector("b", "down")))
        .build();
    let gazette = Gazette::builder()
        .with_primary(a)
        .with_secondary(b)
        .build()
        .unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test(start_paused = true)]
async fn timed_out_provider_is_treated_as_failed() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(10))
        .returns_search_ok(vec![raw("late", "S", "u0", None)])
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_search_ok(vec![raw("on time", "S", "u1", None)])
        .build();

    let gazette = Gazette::builder()
        .with_primary(slow)
        .with_secondary(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["on time"]);
}

#[tokio::test(start_paused = true)]
async fn precedence_holds_regardless_of_completion_order() {
    // Primary answers last but its copy must still win.
    let primary = MockConnector::builder()
        .name("primary")
        .delay(Duration::from_millis(50))
        .returns_search_ok(vec![crate::helpers::raw_marked("A", "X", "u", "primary")])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_search_ok(vec![crate::helpers::raw_marked("A", "X", "u", "secondary")])
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary)
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].content.as_deref(), Some("primary"));
}

#[tokio::test]
async fn connector_without_capability_is_skipped() {
    // Only offers listings; search must skip it rather than fail.
    let listing_only = MockConnector::builder()
        .name("listing_only")
        .returns_sources_ok(&["BBC News"])
        .build();
    let searcher = MockConnector::builder()
        .name("searcher")
        .returns_search_ok(vec![raw("found", "S", "u", None)])
        .build();

    let gazette = Gazette::builder()
        .with_primary(listing_only.clone())
        .with_secondary(searcher)
        .build()
        .unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["found"]);
    assert_eq!(listing_only.calls(), 0);
}

/// Offers search when selected, then withdraws it before the call runs.
struct WithdrawnSearch {
    offered: AtomicBool,
}

impl NewsConnector for WithdrawnSearch {
    fn name(&self) -> &'static str {
        "withdrawn"
    }

    fn as_query_provider(&self) -> Option<&dyn QueryProvider> {
        self.offered
            .swap(false, Ordering::SeqCst)
            .then_some(self as &dyn QueryProvider)
    }
}

#[async_trait]
impl QueryProvider for WithdrawnSearch {
    async fn search(&self, _: &str, _: &Language) -> Result<Vec<RawArticle>, GazetteError> {
        Ok(vec![raw("never returned", "S", "u0", None)])
    }
}

#[tokio::test]
async fn capability_withdrawn_mid_call_counts_as_unsupported_not_fatal() {
    let withdrawn = Arc::new(WithdrawnSearch {
        offered: AtomicBool::new(true),
    });
    let searcher = MockConnector::builder()
        .name("searcher")
        .returns_search_ok(vec![raw("found", "S", "u1", None)])
        .build();

    let gazette = Gazette::builder()
        .with_primary(withdrawn.clone())
        .with_secondary(searcher)
        .build()
        .unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["found"]);
    assert!(!withdrawn.offered.load(Ordering::SeqCst));
}
