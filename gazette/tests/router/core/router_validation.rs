use crate::helpers::{MockConnector, raw};
use gazette::{Gazette, GazetteError};

fn gazette_with_counter() -> (Gazette, std::sync::Arc<MockConnector>) {
    let c = MockConnector::builder()
        .returns_search_ok(vec![raw("A", "S", "u", None)])
        .returns_date_range_ok(vec![raw("A", "S", "u", None)])
        .build();
    let g = Gazette::builder().with_secondary(c.clone()).build().unwrap();
    (g, c)
}

fn is_invalid_arg<T>(r: &Result<T, GazetteError>) -> bool {
    matches!(r, Err(GazetteError::InvalidArg(_)))
}

#[tokio::test]
async fn blank_parameters_are_rejected_before_any_call() {
    let (g, c) = gazette_with_counter();
    assert!(is_invalid_arg(&g.search("   ", "en").await));
    assert!(is_invalid_arg(&g.search("q", "").await));
    assert!(is_invalid_arg(&g.search_by_source("", "en").await));
    assert!(is_invalid_arg(&g.search_by_category(" ", "en").await));
    assert!(is_invalid_arg(&g.search_by_sentiment("", "en").await));
    assert!(is_invalid_arg(&g.top_headlines(" ").await));
    assert!(is_invalid_arg(&g.sources("").await));
    assert!(is_invalid_arg(&g.categories("").await));
    assert_eq!(c.calls(), 0);
}

#[tokio::test]
async fn malformed_or_inverted_dates_are_rejected() {
    let (g, c) = gazette_with_counter();
    assert!(is_invalid_arg(&g.search_by_date_range("2025/06/01", "2025-06-02", "en").await));
    assert!(is_invalid_arg(&g.search_by_date_range("2025-06-01", "June 2", "en").await));
    assert!(is_invalid_arg(&g.search_by_date_range("2025-02-30", "2025-03-01", "en").await));
    assert!(is_invalid_arg(&g.search_by_date_range("2025-06-02", "2025-06-01", "en").await));
    assert_eq!(c.calls(), 0);

    // A single-day range is valid.
    let out = g.search_by_date_range("2025-06-01", "2025-06-01", "en").await.unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn builder_requires_a_connector() {
    assert!(matches!(
        Gazette::builder().build(),
        Err(GazetteError::InvalidArg(_))
    ));
}
