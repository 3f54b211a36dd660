use gazette_demos::common::{get_gazette, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let gazette = get_gazette()?;

    for lang in ["en", "fr"] {
        println!("[{lang}] sources:    {}", gazette.sources(lang).await?.join(", "));
        println!("[{lang}] categories: {}", gazette.categories(lang).await?.join(", "));
    }

    let energy = gazette.search_by_source("Energy Wire", "en").await?;
    println!("\nEnergy Wire articles: {}", energy.len());
    for a in &energy {
        println!("  {}", a.title);
    }

    Ok(())
}
