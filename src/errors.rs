use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use crate::external::quote_source::QuoteError;
use crate::services::llm_service::GenerationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Malformed portfolio data: {0}")]
    MalformedInput(String),
    #[error("Uploaded portfolio has no holdings")]
    EmptyPortfolio,
    #[error("Could not retrieve quote data: {0}")]
    Fetch(String),
    #[error("Could not extract price from quote page: {0}")]
    Extraction(String),
    #[error("Text generation failed: {0}")]
    Generation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::MalformedInput(_) | AppError::EmptyPortfolio => StatusCode::BAD_REQUEST,
            AppError::Fetch(_) | AppError::Extraction(_) => StatusCode::NOT_FOUND,
            AppError::Generation(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

impl From<QuoteError> for AppError {
    fn from(value: QuoteError) -> Self {
        match value {
            QuoteError::Fetch(msg) => AppError::Fetch(msg),
            QuoteError::Extraction(msg) => AppError::Extraction(msg),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(value: GenerationError) -> Self {
        AppError::Generation(value.to_string())
    }
}
