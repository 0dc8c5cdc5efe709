mod holding;

pub use holding::{AggregateSummary, Holding, Portfolio};
