use std::collections::HashMap;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::external::news_source::NewsSource;

/// Fixed headline table standing in for a real news integration. Lookup is
/// by uppercased ticker.
pub struct StaticNewsSource {
    headlines: HashMap<&'static str, Vec<&'static str>>,
    // Configured upstream URL, kept for the eventual real integration.
    #[allow(dead_code)]
    source_url: String,
}

impl StaticNewsSource {
    pub fn new(source_url: String) -> Self {
        let mut headlines: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        headlines.insert(
            "AAPL",
            vec![
                "Apple's Q1 earnings exceed expectations.",
                "Apple announces new product launch.",
            ],
        );
        headlines.insert(
            "GOOG",
            vec![
                "Google announces new AI initiatives.",
                "Google faces regulatory scrutiny.",
            ],
        );
        headlines.insert(
            "MSFT",
            vec![
                "Microsoft releases new software version.",
                "Microsoft's cloud business is growing.",
            ],
        );
        headlines.insert(
            "RELIANCE.NS",
            vec![
                "Reliance Industries announces new investment.",
                "Reliance reports quarterly profits.",
            ],
        );
        headlines.insert(
            "INFY.NS",
            vec![
                "Infosys wins a major contract.",
                "Infosys expands its operations.",
            ],
        );

        info!(
            "Using static headline table ({} tickers); configured news source: {}",
            headlines.len(),
            source_url
        );

        Self {
            headlines,
            source_url,
        }
    }
}

#[async_trait]
impl NewsSource for StaticNewsSource {
    async fn fetch_headlines(&self, ticker: &str) -> Result<Vec<String>, AppError> {
        let headlines = self
            .headlines
            .get(ticker.to_uppercase().as_str())
            .map(|items| items.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default();

        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> StaticNewsSource {
        StaticNewsSource::new("https://www.google.com/finance/?hl=en".to_string())
    }

    #[tokio::test]
    async fn known_ticker_returns_headlines() {
        let headlines = source().fetch_headlines("AAPL").await.unwrap();
        assert_eq!(headlines.len(), 2);
        assert!(headlines[0].contains("Apple"));
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let headlines = source().fetch_headlines("msft").await.unwrap();
        assert_eq!(headlines.len(), 2);
    }

    #[tokio::test]
    async fn unknown_ticker_returns_empty_list() {
        let headlines = source().fetch_headlines("ZZZZ").await.unwrap();
        assert!(headlines.is_empty());
    }
}
