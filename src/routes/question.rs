use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::services::prompt_builder;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/question", post(ask_question))
}

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// POST /question
///
/// Answers a free-form financial question in plain language.
async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    info!("POST /question - Question: {}", request.question);

    let prompt = prompt_builder::question_prompt(&request.question);

    let answer = state.generator.generate(prompt).await.map_err(|e| {
        error!("Failed to answer question: {}", e);
        e
    })?;

    Ok(Json(AnswerResponse { answer }))
}
