use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::external::quote_source::{QuoteError, QuoteSource};
use crate::models::Holding;

/// Attribute marker preceding the price in the quote page markup. This is
/// an undocumented detail of the page and can break without notice.
const PRICE_MARKER: &str = "data-last-price=\"";

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Scrapes a current price out of the Google Finance quote page.
pub struct GoogleFinanceSource {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleFinanceSource {
    pub fn new() -> Self {
        Self::with_base_url("https://www.google.com/finance/quote".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }
}

/// Pull the quoted value that follows the price marker out of the raw page
/// body and parse it, stripping thousands separators first.
pub fn extract_price(body: &str) -> Result<f64, QuoteError> {
    let after_marker = body
        .split_once(PRICE_MARKER)
        .map(|(_, rest)| rest)
        .ok_or_else(|| QuoteError::Extraction("price marker not found in page".to_string()))?;

    let raw = after_marker
        .split_once('"')
        .map(|(value, _)| value)
        .ok_or_else(|| QuoteError::Extraction("price value is unterminated".to_string()))?;

    raw.replace(',', "")
        .parse::<f64>()
        .map_err(|_| QuoteError::Extraction(format!("price value '{}' is not numeric", raw)))
}

#[async_trait]
impl QuoteSource for GoogleFinanceSource {
    async fn fetch_price(&self, ticker: &str) -> Result<Holding, QuoteError> {
        let url = format!("{}/{}", self.base_url, ticker);
        info!("Fetching quote page for {}", ticker);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Quote fetch for {} failed: {}", ticker, e);
            if e.is_timeout() {
                QuoteError::Fetch(format!("timed out fetching quote for {}", ticker))
            } else {
                QuoteError::Fetch(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Fetch(format!(
                "quote page returned HTTP {} for {}",
                status, ticker
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::Fetch(e.to_string()))?;

        let price = extract_price(&body)?;
        info!("Extracted price {:.2} for {}", price, ticker);

        Ok(Holding {
            symbol: ticker.to_string(),
            shares: 1.0,
            price,
        })
    }
}
