use std::cmp::Ordering;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{AggregateSummary, Holding, Portfolio};

const REQUIRED_COLUMNS: [&str; 3] = ["Stock", "Shares", "Price"];

const TOP_HOLDINGS_COUNT: usize = 3;

#[derive(Debug, Deserialize)]
struct CsvHolding {
    #[serde(rename = "Stock")]
    stock: String,
    #[serde(rename = "Shares")]
    shares: f64,
    #[serde(rename = "Price")]
    price: f64,
}

/// Parse tabular `Stock,Shares,Price` text into a portfolio.
///
/// Columns are mapped by header name, not position; extra columns are
/// ignored. A header-only input is rejected as an empty portfolio so
/// callers never aggregate over zero rows.
pub fn parse_portfolio(text: &str) -> Result<Portfolio, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::MalformedInput(format!("unreadable header row: {}", e)))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::MalformedInput(format!(
                "missing required column '{}'",
                column
            )));
        }
    }

    let mut holdings = Vec::new();
    for (line, result) in reader.deserialize::<CsvHolding>().enumerate() {
        let row = result
            .map_err(|e| AppError::MalformedInput(format!("row {}: {}", line + 2, e)))?;
        holdings.push(Holding {
            symbol: row.stock,
            shares: row.shares,
            price: row.price,
        });
    }

    let portfolio = Portfolio { holdings };
    if portfolio.is_empty() {
        return Err(AppError::EmptyPortfolio);
    }

    Ok(portfolio)
}

/// Render a portfolio back to `Stock,Shares,Price` text, prices to two
/// decimals. Used to embed the parsed table in the analysis prompt.
pub fn render_csv(portfolio: &Portfolio) -> String {
    let mut out = String::from("Stock,Shares,Price\n");
    for holding in &portfolio.holdings {
        out.push_str(&format!(
            "{},{},{:.2}\n",
            holding.symbol, holding.shares, holding.price
        ));
    }
    out
}

/// Compute total value, top holdings, and row count for a non-empty
/// portfolio.
pub fn aggregate(portfolio: &Portfolio) -> AggregateSummary {
    let total_value = portfolio.holdings.iter().map(Holding::market_value).sum();

    // Ranked by share count, not market value, matching the upstream
    // behavior this service replaces. Stable sort keeps row order on ties.
    let mut ranked: Vec<Holding> = portfolio.holdings.clone();
    ranked.sort_by(|a, b| b.shares.partial_cmp(&a.shares).unwrap_or(Ordering::Equal));
    ranked.truncate(TOP_HOLDINGS_COUNT);

    AggregateSummary {
        total_value,
        top_holdings: ranked,
        num_holdings: portfolio.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Stock,Shares,Price\nAAPL,10,150.00\nGOOG,2,2800.00\nMSFT,5,300.00\n";

    #[test]
    fn parses_and_aggregates_sample_portfolio() {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        assert_eq!(portfolio.len(), 3);

        let summary = aggregate(&portfolio);
        assert_eq!(summary.total_value, 8600.0);
        assert_eq!(summary.num_holdings, 3);

        let tickers: Vec<&str> = summary
            .top_holdings
            .iter()
            .map(|h| h.symbol.as_str())
            .collect();
        assert_eq!(tickers, vec!["AAPL", "MSFT", "GOOG"]);
    }

    #[test]
    fn total_value_is_independent_of_row_order() {
        let reordered = "Stock,Shares,Price\nMSFT,5,300.00\nAAPL,10,150.00\nGOOG,2,2800.00\n";
        let a = aggregate(&parse_portfolio(SAMPLE).unwrap());
        let b = aggregate(&parse_portfolio(reordered).unwrap());
        assert_eq!(a.total_value, b.total_value);
    }

    #[test]
    fn columns_are_mapped_by_header_name() {
        let shuffled = "Price,Stock,Shares\n150.00,AAPL,10\n";
        let portfolio = parse_portfolio(shuffled).unwrap();
        assert_eq!(portfolio.holdings[0].symbol, "AAPL");
        assert_eq!(portfolio.holdings[0].shares, 10.0);
        assert_eq!(portfolio.holdings[0].price, 150.0);
    }

    #[test]
    fn top_holdings_are_largest_three_by_shares() {
        let text = "Stock,Shares,Price\nA,1,10\nB,4,10\nC,2,10\nD,5,10\nE,3,10\n";
        let summary = aggregate(&parse_portfolio(text).unwrap());
        let tickers: Vec<&str> = summary
            .top_holdings
            .iter()
            .map(|h| h.symbol.as_str())
            .collect();
        assert_eq!(tickers, vec!["D", "B", "E"]);
    }

    #[test]
    fn share_ties_keep_original_row_order() {
        let text = "Stock,Shares,Price\nA,2,10\nB,5,10\nC,2,10\nD,2,10\n";
        let summary = aggregate(&parse_portfolio(text).unwrap());
        let tickers: Vec<&str> = summary
            .top_holdings
            .iter()
            .map(|h| h.symbol.as_str())
            .collect();
        assert_eq!(tickers, vec!["B", "A", "C"]);
    }

    #[test]
    fn small_portfolios_return_all_rows_as_top_holdings() {
        let one = aggregate(&parse_portfolio("Stock,Shares,Price\nAAPL,1,150.00\n").unwrap());
        assert_eq!(one.top_holdings.len(), 1);

        let two = aggregate(
            &parse_portfolio("Stock,Shares,Price\nAAPL,1,150.00\nGOOG,2,2800.00\n").unwrap(),
        );
        assert_eq!(two.top_holdings.len(), 2);
    }

    #[test]
    fn header_only_input_is_empty_portfolio() {
        let result = parse_portfolio("Stock,Shares,Price\n");
        assert!(matches!(result, Err(AppError::EmptyPortfolio)));
    }

    #[test]
    fn missing_price_column_is_malformed() {
        let result = parse_portfolio("Stock,Shares\nAAPL,10\n");
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn empty_input_is_malformed() {
        let result = parse_portfolio("");
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let result = parse_portfolio("Stock,Shares,Price\nAAPL,10\n");
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn non_numeric_shares_is_malformed() {
        let result = parse_portfolio("Stock,Shares,Price\nAAPL,many,150.00\n");
        assert!(matches!(result, Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn render_then_parse_round_trips() {
        let portfolio = Portfolio {
            holdings: vec![Holding {
                symbol: "AAPL".to_string(),
                shares: 1.0,
                price: 150.5,
            }],
        };

        let rendered = render_csv(&portfolio);
        assert_eq!(rendered, "Stock,Shares,Price\nAAPL,1,150.50\n");

        let reparsed = parse_portfolio(&rendered).unwrap();
        assert_eq!(reparsed, portfolio);
    }
}
