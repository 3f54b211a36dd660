use gazette_demos::common::{get_gazette, init_tracing, print_articles};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let gazette = get_gazette()?;

    for label in ["positive", "negative", "neutral"] {
        let articles = gazette.search_by_sentiment(label, "en").await?;
        println!("== {label}: {} article(s) ==", articles.len());
        print_articles(&articles);
        println!();
    }

    Ok(())
}
