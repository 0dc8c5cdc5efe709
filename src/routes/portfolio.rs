use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::services::{portfolio_service, prompt_builder};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/portfolio/analyze", post(analyze_portfolio))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(rename = "csvData")]
    pub csv_data: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

/// POST /portfolio/analyze
///
/// Parses an uploaded `Stock,Shares,Price` portfolio, aggregates it, and
/// generates a plain-language overview. Malformed or empty uploads map to
/// 400 before any generation call is made.
async fn analyze_portfolio(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Json<AnalysisResponse>, AppError> {
    info!(
        "POST /portfolio/analyze - Received {} bytes of portfolio data",
        form.csv_data.len()
    );

    let portfolio = portfolio_service::parse_portfolio(&form.csv_data).map_err(|e| {
        error!("Rejected uploaded portfolio: {}", e);
        e
    })?;

    let summary = portfolio_service::aggregate(&portfolio);
    info!(
        "Aggregated portfolio: {} holdings, total value {:.2}",
        summary.num_holdings, summary.total_value
    );

    let table = portfolio_service::render_csv(&portfolio);
    let prompt = prompt_builder::portfolio_prompt(&table, &summary);

    let analysis = state.generator.generate(prompt).await.map_err(|e| {
        error!("Failed to generate portfolio analysis: {}", e);
        e
    })?;

    Ok(Json(AnalysisResponse { analysis }))
}
