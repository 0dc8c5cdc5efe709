mod app;
mod config;
mod errors;
mod external;
mod logging;
mod models;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::Config;
use crate::external::google_finance::GoogleFinanceSource;
use crate::external::static_news::StaticNewsSource;
use crate::logging::{init_logging, LoggingConfig};
use crate::services::llm_service::VertexAiGenerator;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!("{e}"))?;

    let config = Config::from_env()?;
    tracing::info!(
        "📊 Text generation: model {} in project {} ({})",
        config.model,
        config.project,
        config.region
    );

    let generator = Arc::new(VertexAiGenerator::new(
        &config.project,
        &config.region,
        config.access_token.clone(),
        config.model.clone(),
        config.max_output_tokens,
        config.temperature,
    ));

    let state = AppState {
        generator,
        quotes: Arc::new(GoogleFinanceSource::new()),
        news: Arc::new(StaticNewsSource::new(config.news_data_source.clone())),
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Intellivest backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
