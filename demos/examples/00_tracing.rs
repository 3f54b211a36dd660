use gazette_demos::common::{get_gazette, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,gazette=trace
    init_tracing();

    let gazette = get_gazette()?;

    let _ = gazette.search("solar", "en").await?;
    let _ = gazette.top_headlines("en").await?;
    // Forced provider failures are logged and contribute nothing.
    let _ = gazette.search("fail", "en").await?;

    Ok(())
}
