use crate::helpers::MockConnector;
use gazette::{Gazette, GazetteError};

#[tokio::test]
async fn sources_concatenate_then_dedupe_in_precedence_order() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_sources_ok(&["BBC News", "CNN", ""])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_sources_ok(&["Reuters", "CNN", "BBC News"])
        .build();

    let gazette = Gazette::builder()
        .with_secondary(secondary)
        .with_primary(primary)
        .build()
        .unwrap();

    let out = gazette.sources("en").await.unwrap();
    assert_eq!(out, vec!["BBC News", "CNN", "Reuters"]);
}

#[tokio::test]
async fn sources_skip_primary_for_other_languages() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_sources_ok(&["BBC News"])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_sources_ok(&["Le Monde"])
        .build();
    let gazette = Gazette::builder()
        .with_primary(primary.clone())
        .with_secondary(secondary)
        .build()
        .unwrap();

    assert_eq!(gazette.sources("fr").await.unwrap(), vec!["Le Monde"]);
    assert_eq!(primary.calls(), 0);
}

#[tokio::test]
async fn categories_query_primary_for_any_language_and_tolerate_failures() {
    let primary = MockConnector::builder()
        .name("primary")
        .returns_categories_ok(&["business", "general"])
        .build();
    let secondary = MockConnector::builder()
        .name("secondary")
        .returns_categories_ok(&["general", "sports"])
        .build();
    let broken = MockConnector::builder()
        .name("broken")
        .with_categories_fn(|_| Err(GazetteError::connector("broken", "503")))
        .build();

    let gazette = Gazette::builder()
        .with_primary(primary)
        .with_secondary(broken)
        .with_secondary(secondary)
        .build()
        .unwrap();

    let out = gazette.categories("fr").await.unwrap();
    assert_eq!(out, vec!["business", "general", "sports"]);
}
