use ai_impact::config::Config;
use ai_impact::gemini::GeminiClient;
use ai_impact::i18n::Localizer;
use ai_impact::views::Page;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ai_impact=info".parse()?),
        )
        .init();

    info!("Starting AI Impact");

    let config = Config::from_env()?;
    let i18n = Localizer::builtin().context("Failed to load translation catalogs")?;
    info!(
        "Loaded {} catalog entries, starting in {}",
        i18n.store().leaf_paths(i18n.current_language()).len(),
        i18n.current_language().name()
    );

    let client = GeminiClient::new(config);
    let mut page = Page::new(Arc::new(i18n));

    // Step 1: Run the research agent with the default query
    info!("Running research agent");
    page.research(&client).await;

    // Step 2: Render the page
    println!("{}", page.render());

    let metrics = page.localizer().metrics();
    info!(
        "Resolved {} strings ({} fallbacks)",
        metrics.resolved,
        metrics.missing + metrics.not_leaf
    );
    Ok(())
}
