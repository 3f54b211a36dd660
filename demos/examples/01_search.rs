use gazette_demos::common::{get_gazette, init_tracing, print_articles};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let gazette = get_gazette()?;

    println!("== search: latest (en) ==");
    let articles = gazette.search("latest", "en").await?;
    print_articles(&articles);

    println!("\n== search: latest (fr) ==");
    print_articles(&gazette.search("latest", "fr").await?);

    println!("\n== search by category: science (en) ==");
    print_articles(&gazette.search_by_category("science", "en").await?);

    println!("\n== top headlines (en) ==");
    print_articles(&gazette.top_headlines("en").await?);

    Ok(())
}
