use crate::helpers::{MockConnector, raw, raw_marked, titles};
use gazette::Gazette;

#[tokio::test]
async fn primary_copy_wins_and_unique_secondary_article_follows() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_search_ok(vec![raw_marked("A", "X", "u1", "from primary")])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_search_ok(vec![
            raw_marked("A", "X", "u1", "from secondary"),
            raw_marked("B", "Y", "u2", "b"),
        ])
        .build();

    let gazette = Gazette::builder()
        .with_secondary(secondary)
        .with_primary(primary)
        .build()
        .unwrap();

    let out = gazette.search("anything", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["A", "B"]);
    assert_eq!(out[0].content.as_deref(), Some("from primary"));
    assert!(out.iter().all(|a| a.language == "en"));
}

#[tokio::test]
async fn search_sorts_newest_first_with_undated_last() {
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_search_ok(vec![
            raw("T1", "S", "u1", Some("2024-01-01T00:00:00Z")),
            raw("T2", "S", "u2", None),
            raw("T3", "S", "u3", Some("2025-01-01T00:00:00Z")),
            raw("T4", "S", "u4", Some("not a date")),
        ])
        .build();
    let gazette = Gazette::builder().with_secondary(secondary).build().unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["T3", "T1", "T2", "T4"]);
}

#[tokio::test]
async fn search_passes_trimmed_query_and_language() {
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_search_fn(|q, lang| {
            assert_eq!(q, "rust lang");
            assert_eq!(lang.as_str(), "de");
            Ok(vec![raw("Hallo", "S", "u", None)])
        })
        .build();
    let gazette = Gazette::builder().with_secondary(secondary).build().unwrap();

    let out = gazette.search("  rust lang ", " de ").await.unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].language, "de");
}

#[tokio::test]
async fn untitled_articles_are_dropped() {
    let secondary = MockConnector::builder()
        .returns_search_ok(vec![
            raw("", "S", "u1", None),
            raw("   ", "S", "u2", None),
            raw("kept", "S", "u3", None),
        ])
        .build();
    let gazette = Gazette::builder().with_secondary(secondary).build().unwrap();

    let out = gazette.search("q", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["kept"]);
}

#[tokio::test]
async fn search_queries_primary_for_any_language() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_search_ok(vec![raw("P", "S", "u", None)])
        .build();
    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .build()
        .unwrap();

    let out = gazette.search("q", "fr").await.unwrap();
    assert_eq!(titles(&out), vec!["P"]);
    assert_eq!(primary.calls(), 1);
}
