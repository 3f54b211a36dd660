use gazette_demos::common::{get_gazette, init_tracing, print_articles};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let gazette = get_gazette()?;

    // Starts before the primary tier's retention window: secondary only.
    println!("== 2025-06-01 .. 2025-06-30 ==");
    print_articles(&gazette.search_by_date_range("2025-06-01", "2025-06-30", "en").await?);

    // Inside the window: both tiers.
    println!("\n== 2025-06-20 .. 2025-07-05 ==");
    print_articles(&gazette.search_by_date_range("2025-06-20", "2025-07-05", "en").await?);

    match gazette.search_by_date_range("2025-07-05", "2025-06-20", "en").await {
        Ok(_) => println!("\ninverted range unexpectedly accepted"),
        Err(e) => println!("\ninverted range rejected: {e}"),
    }

    Ok(())
}
