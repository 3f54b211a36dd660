use crate::helpers::{MockConnector, raw, titles};
use gazette::Gazette;

#[tokio::test]
async fn headlines_never_reach_primary_and_are_deduplicated() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_headlines_fn(|_| Ok(vec![raw("P", "S", "u0", None)]))
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_headlines_fn(|lang| {
            assert_eq!(lang.as_str(), "en");
            Ok(vec![
                raw("H1", "S", "u1", None),
                raw("h1", "s", "U1", None),
                raw("H2", "S", "u2", None),
            ])
        })
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.top_headlines("en").await.unwrap();
    assert_eq!(titles(&out), vec!["H1", "H2"]);
    assert_eq!(primary.calls(), 0);
}

#[tokio::test]
async fn headlines_without_secondary_are_empty() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_headlines_fn(|_| Ok(vec![raw("P", "S", "u0", None)]))
        .build();
    let gazette = Gazette::builder().with_primary(primary).build().unwrap();

    let out = gazette.top_headlines("en").await.unwrap();
    assert!(out.is_empty());
}
