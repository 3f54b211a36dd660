use crate::helpers::{MockConnector, raw, titles};
use gazette::Gazette;

#[tokio::test]
async fn category_is_stamped_on_every_article() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_category_fn(|cat, _| {
            assert_eq!(cat, "technology");
            Ok(vec![raw("chips", "S", "u1", None)])
        })
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_category_fn(|_, _| Ok(vec![raw("phones", "S", "u2", None)]))
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary)
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search_by_category(" technology ", "en").await.unwrap();
    assert_eq!(titles(&out), vec!["chips", "phones"]);
    assert!(out.iter().all(|a| a.category.as_deref() == Some("technology")));
}

#[tokio::test]
async fn category_search_skips_primary_for_other_languages() {
    let primary = MockConnector::builder()
        .name("primary")
        .with_category_fn(|_, _| Ok(vec![raw("p", "S", "u1", None)]))
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .with_category_fn(|_, _| Ok(vec![raw("s", "S", "u2", None)]))
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.search_by_category("sports", "it").await.unwrap();
    assert_eq!(titles(&out), vec!["s"]);
    assert_eq!(primary.calls(), 0);
}
