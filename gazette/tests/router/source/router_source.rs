use crate::helpers::{MockConnector, raw, titles};
use gazette::Gazette;

fn connectors() -> (
    std::sync::Arc<MockConnector>,
    std::sync::Arc<MockConnector>,
) {
    let primary = MockConnector::builder()
        .name("primary")
        .with_source_fn(|source, _| {
            assert_eq!(source, "BBC News");
            Ok(vec![raw("from primary", "BBC News", "u1", None)])
        })
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_source_fn(|_, _| Ok(vec![raw("from secondary", "BBC News", "u2", None)]))
        .build();
    (primary, secondary)
}

#[tokio::test]
async fn source_search_uses_both_tiers_for_primary_language() {
    let (primary, secondary) = connectors();
    let gazette = Gazette::builder()
        .with_primary(primary)
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search_by_source("BBC News", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["from primary", "from secondary"]);
}

#[tokio::test]
async fn source_search_skips_primary_for_other_languages() {
    let (primary, secondary) = connectors();
    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search_by_source("BBC News", "fr").await.unwrap();
    assert_eq!(titles(&out), vec!["from secondary"]);
    assert_eq!(primary.calls(), 0);
}

#[tokio::test]
async fn language_gate_is_case_sensitive() {
    let (primary, secondary) = connectors();
    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .build()
        .unwrap();

    let _ = gazette.search_by_source("BBC News", "EN").await.unwrap();
    assert_eq!(primary.calls(), 0);
}

#[tokio::test]
async fn source_search_keeps_merge_order() {
    let secondary = MockConnector::builder()
        .with_source_fn(|_, _| {
            Ok(vec![
                raw("old", "S", "u1", Some("2020-01-01T00:00:00Z")),
                raw("new", "S", "u2", Some("2025-01-01T00:00:00Z")),
            ])
        })
        .build();
    let gazette = Gazette::builder().with_secondary(secondary).build().unwrap();

    let out = gazette.search_by_source("S", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["old", "new"]);
}

#[tokio::test]
async fn unknown_source_at_one_provider_does_not_hide_the_others() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_source_fn(|source, _| {
            Err(gazette::GazetteError::not_found(format!("source id for '{source}'")))
        })
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_source_fn(|_, _| Ok(vec![raw("local story", "Unknown Daily", "u1", None)]))
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search_by_source("Unknown Daily", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["local story"]);
    assert_eq!(primary.calls(), 1);
}
