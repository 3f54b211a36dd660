use std::sync::Arc;

use crate::helpers::{MockConnector, TableClassifier, raw, titles};
use gazette::Gazette;

// Classifier input is "title + ' ' + description"; `raw` sets the description
// to "about {title}".
fn classifier() -> Arc<TableClassifier> {
    TableClassifier::new(&[
        ("one about one", Some("positive")),
        ("two about two", None),
        ("three about three", Some("Positive")),
        ("four about four", Some("negative")),
    ])
}

#[tokio::test]
async fn sentiment_filter_is_case_insensitive_and_drops_unlabelled() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_search_fn(|q, _| {
            assert_eq!(q, "latest");
            Ok(vec![raw("one", "S", "u1", None), raw("two", "S", "u2", None)])
        })
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_search_ok(vec![raw("three", "S", "u3", None), raw("four", "S", "u4", None)])
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary)
        .with_secondary(secondary)
        .classifier(classifier())
        .build()
        .unwrap();

    let out = gazette.search_by_sentiment("POSITIVE", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["one", "three"]);
    assert_eq!(out[1].sentiment.as_deref(), Some("Positive"));
}

#[tokio::test]
async fn sentiment_search_keeps_merge_order() {
    let secondary = MockConnector::builder()
        .returns_search_ok(vec![
            raw("one", "S", "u1", Some("2020-01-01T00:00:00Z")),
            raw("three", "S", "u3", Some("2025-01-01T00:00:00Z")),
        ])
        .build();
    let gazette = Gazette::builder()
        .with_secondary(secondary)
        .classifier(classifier())
        .build()
        .unwrap();

    let out = gazette.search_by_sentiment("positive", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["one", "three"]);
}

#[tokio::test]
async fn sentiment_search_skips_primary_outside_primary_language() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_search_ok(vec![raw("one", "S", "u1", None)])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_search_ok(vec![raw("three", "S", "u3", None)])
        .build();
    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .classifier(classifier())
        .build()
        .unwrap();

    let out = gazette.search_by_sentiment("positive", "es").await.unwrap();
    assert_eq!(titles(&out), vec!["three"]);
    assert_eq!(primary.calls(), 0);
}

#[tokio::test]
async fn classifier_failure_leaves_article_unlabelled() {
    let secondary = MockConnector::builder()
        .returns_search_ok(vec![raw("one", "S", "u1", None), raw("three", "S", "u3", None)])
        .build();
    let mut table = TableClassifier::new(&[
        ("one about one", Some("positive")),
        ("three about three", Some("positive")),
    ]);
    Arc::get_mut(&mut table).unwrap().fail_on = Some("one about one".into());

    let gazette = Gazette::builder()
        .with_secondary(secondary)
        .classifier(table)
        .build()
        .unwrap();

    let all = gazette.search("q", "en").await.unwrap();
    let one = all.iter().find(|a| a.title == "one").unwrap();
    assert_eq!(one.sentiment, None);

    let out = gazette.search_by_sentiment("positive", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["three"]);
}

#[tokio::test]
async fn without_classifier_sentiment_search_is_empty() {
    let secondary = MockConnector::builder()
        .returns_search_ok(vec![raw("one", "S", "u1", None)])
        .build();
    let gazette = Gazette::builder().with_secondary(secondary).build().unwrap();

    let out = gazette.search_by_sentiment("positive", "en").await.unwrap();
    assert!(out.is_empty());
}
