use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::services::prompt_builder;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/summary/:ticker", get(get_stock_summary))
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// GET /summary/:ticker
///
/// Fetches the current price for the ticker and generates a plain-language
/// summary. A quote that cannot be fetched or parsed maps to 404; the
/// generation call is never attempted in that case.
async fn get_stock_summary(
    Path(ticker): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    info!("GET /summary/{} - Fetching stock summary", ticker);

    let holding = state.quotes.fetch_price(&ticker).await.map_err(|e| {
        error!("Could not retrieve stock data for '{}': {}", ticker, e);
        e
    })?;

    let prompt = prompt_builder::price_summary_prompt(holding.price);

    let summary = state.generator.generate(prompt).await.map_err(|e| {
        error!("Failed to generate summary for {}: {}", ticker, e);
        e
    })?;

    Ok(Json(SummaryResponse { summary }))
}
