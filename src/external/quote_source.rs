use async_trait::async_trait;
use thiserror::Error;

use crate::models::Holding;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("price extraction failed: {0}")]
    Extraction(String),
}

/// A source of current prices for ticker symbols.
///
/// The returned holding always carries `shares = 1.0`: quote pages only
/// supply a price, never a position size.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_price(&self, ticker: &str) -> Result<Holding, QuoteError>;
}
