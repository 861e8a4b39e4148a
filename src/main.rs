use clap::Parser;
use std::env;
use std::sync::Arc;
use tracing::{error, info};
use vidstrat::{HttpSearchProvider, ProviderConfig, StrategyPipeline, TopicRequest};

/// Generate a content-strategy document for a topic from a live
/// video-search snapshot.
#[derive(Debug, Parser)]
#[command(name = "vidstrat")]
struct Cli {
    /// Topic to build a strategy for
    topic: String,

    /// Free-text context added to the keyword pool
    #[arg(long)]
    description: Option<String>,

    /// Target audience, woven into hooks and script
    #[arg(long)]
    audience: Option<String>,

    /// Tone/style of the generated prose
    #[arg(long)]
    style: Option<String>,

    /// Intended video duration (echoed in the document metadata)
    #[arg(long)]
    duration: Option<String>,

    /// Content language (echoed in the document metadata)
    #[arg(long)]
    language: Option<String>,

    /// Search provider endpoint; overrides VIDSTRAT_PROVIDER_URL
    #[arg(long)]
    provider_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let endpoint = cli
        .provider_url
        .or_else(|| env::var("VIDSTRAT_PROVIDER_URL").ok())
        .unwrap_or_else(|| ProviderConfig::default().endpoint);

    info!("Using search provider at {}", endpoint);

    let provider = HttpSearchProvider::new(ProviderConfig {
        endpoint,
        ..ProviderConfig::default()
    })?;
    let pipeline = StrategyPipeline::new(Arc::new(provider));

    let request = TopicRequest {
        topic: cli.topic,
        description: cli.description,
        audience: cli.audience,
        style: cli.style,
        duration: cli.duration,
        language: cli.language,
    };

    match pipeline.generate(&request).await {
        Ok(document) => {
            println!("{}", serde_json::to_string_pretty(&document)?);
            Ok(())
        }
        Err(e) => {
            error!("Request failed (HTTP {}): {}", e.http_status(), e);
            std::process::exit(1);
        }
    }
}
