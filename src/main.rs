//! Recipe Attribute Extraction Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the taxonomy, matcher, fallback
//! table, and completion provider into shared state.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recipe_attribute_extractor::api;
use recipe_attribute_extractor::extract::{Extractor, ExtractorConfig};
use recipe_attribute_extractor::fallback::FallbackTable;
use recipe_attribute_extractor::matcher::CategoryMatcher;
use recipe_attribute_extractor::taxonomy::Taxonomy;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let taxonomy = Taxonomy::load()?;
    let matcher = CategoryMatcher::new(&taxonomy);
    let fallback = FallbackTable::load()?;
    let config = ExtractorConfig::load()?;
    let provider = config.build_provider();
    info!(
        provider = provider.name(),
        labels = taxonomy.len(),
        rules = fallback.rules.len(),
        "starting extraction service"
    );

    let extractor = Arc::new(Extractor::new(provider, matcher, fallback));
    let router = api::create_router(extractor);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
