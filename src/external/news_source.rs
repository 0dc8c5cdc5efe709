use async_trait::async_trait;

use crate::errors::AppError;

/// A source of recent headlines for a ticker. Injected so the mock table
/// can be swapped for a real news integration without touching handlers.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns headlines for the ticker; unknown tickers yield an empty
    /// list rather than an error.
    async fn fetch_headlines(&self, ticker: &str) -> Result<Vec<String>, AppError>;
}
