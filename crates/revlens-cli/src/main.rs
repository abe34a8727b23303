use clap::{Parser, Subcommand};

use revlens_extractor::PageFetcher;
use revlens_pipeline::DataOrigin;

#[derive(Debug, Parser)]
#[command(name = "revlens-cli")]
#[command(about = "Revlens command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape a product page and print its review sentiment breakdown.
    Analyze { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { url } => analyze(&url).await,
    }
}

async fn analyze(url: &str) -> anyhow::Result<()> {
    let config = revlens_core::load_app_config_from_env()?;
    let fetcher = PageFetcher::new(config.fetch_timeout_secs, &config.user_agent)?;
    let outcome = revlens_pipeline::run(&fetcher, url).await;

    let summary = outcome.summary();
    let origin = match outcome.origin {
        DataOrigin::Live => "live",
        DataOrigin::Fallback => "demo (live extraction yielded nothing)",
    };

    println!("source: {origin}");
    println!(
        "reviews: {} total ({} positive / {} negative / {} neutral)",
        summary.total, summary.positive, summary.negative, summary.neutral
    );
    println!();
    for record in &outcome.records {
        println!(
            "[{}] {} ({}): {}",
            record.sentiment, record.reviewer, record.rating, record.review_text
        );
    }

    Ok(())
}
