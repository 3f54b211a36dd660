use std::sync::Arc;

use chrono::NaiveDate;
use crate::helpers::{MockConnector, raw, titles};
use gazette::Gazette;

fn setup() -> (Gazette, Arc<MockConnector>, Arc<MockConnector>) {
    let primary = MockConnector::builder()
        .name("primary")
        .with_date_range_fn(|q, range, _| {
            assert_eq!(q, "latest");
            assert!(range.from() <= range.to());
            Ok(vec![raw("P", "S", "u1", None)])
        })
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_date_range_ok(vec![raw("S", "S", "u2", None)])
        .build();
    let g = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary.clone())
        .build()
        .unwrap();
    (g, primary, secondary)
}

#[tokio::test]
async fn range_starting_before_cutoff_skips_primary() {
    let (g, primary, secondary) = setup();
    let out = g
        .search_by_date_range("2025-06-19", "2025-06-30", "en")
        .await
        .unwrap();
    assert_eq!(titles(&out), vec!["S"]);
    assert_eq!(primary.calls(), 0);
    assert_eq!(secondary.calls(), 1);
}

#[tokio::test]
async fn range_starting_on_cutoff_uses_both_tiers() {
    let (g, primary, _) = setup();
    let out = g
        .search_by_date_range("2025-06-20", "2025-06-30", "en")
        .await
        .unwrap();
    assert_eq!(titles(&out), vec!["P", "S"]);
    assert_eq!(primary.calls(), 1);
}

#[tokio::test]
async fn recent_range_in_other_language_skips_primary() {
    let (g, primary, _) = setup();
    let out = g
        .search_by_date_range("2025-07-01", "2025-07-02", "fr")
        .await
        .unwrap();
    assert_eq!(titles(&out), vec!["S"]);
    assert_eq!(primary.calls(), 0);
}

#[tokio::test]
async fn cutoff_and_broad_query_are_configurable() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_date_range_fn(|q, _, _| {
            assert_eq!(q, "news");
            Ok(vec![raw("P", "S", "u1", None)])
        })
        .build();
    let g = Gazette::builder()
        .with_primary(primary.clone())
        .date_range_cutoff(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .broad_query("news")
        .build()
        .unwrap();

    let out = g
        .search_by_date_range("2024-01-01", "2024-01-31", "en")
        .await
        .unwrap();
    assert_eq!(titles(&out), vec!["P"]);
}
