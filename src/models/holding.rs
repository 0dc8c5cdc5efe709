use serde::{Deserialize, Serialize};

// One row of a portfolio: a ticker symbol with a share count and a
// per-share price. Fractional shares are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub shares: f64,
    pub price: f64,
}

impl Holding {
    pub fn market_value(&self) -> f64 {
        self.shares * self.price
    }
}

/// An ordered collection of holdings for one request. Insertion order is
/// the original row order, which breaks ties when ranking top holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

/// Derived per-request aggregate, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateSummary {
    pub total_value: f64,
    pub top_holdings: Vec<Holding>,
    pub num_holdings: usize,
}
