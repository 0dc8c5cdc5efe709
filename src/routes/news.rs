use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::services::prompt_builder;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/news/:ticker", get(get_news_and_filings))
}

#[derive(Debug, Serialize)]
pub struct NewsSummaryResponse {
    pub summary: String,
}

/// GET /news/:ticker
///
/// Digests recent headlines for the ticker. An unknown ticker yields an
/// empty headline list, which is still handed to the model.
async fn get_news_and_filings(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<NewsSummaryResponse>, AppError> {
    info!("GET /news/{} - Fetching news digest", ticker);

    let headlines = state.news.fetch_headlines(&ticker).await?;
    if headlines.is_empty() {
        info!("No headlines on record for {}", ticker);
    }

    let prompt = prompt_builder::news_prompt(&ticker, &headlines);

    let summary = state.generator.generate(prompt).await.map_err(|e| {
        error!("Failed to generate news digest for {}: {}", ticker, e);
        e
    })?;

    Ok(Json(NewsSummaryResponse { summary }))
}
