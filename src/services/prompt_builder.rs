//! Prompt construction for the four endpoints. Pure formatting of
//! already-validated data; each builder leads with the behavioral
//! instructions for the model and ends with the facts to ground it.

use crate::models::AggregateSummary;

pub fn price_summary_prompt(price: f64) -> String {
    format!(
        r#"Summarize the following financial data for a novice investor in three concise sentences.
Do not use technical jargon. Include the company name, and current price.

Current Price: ${:.2}"#,
        price
    )
}

pub fn question_prompt(question: &str) -> String {
    format!(
        r#"Answer the following financial question in simple terms for a novice investor. Avoid jargon.
Question: {}"#,
        question
    )
}

pub fn portfolio_prompt(table: &str, summary: &AggregateSummary) -> String {
    let top_holdings = summary
        .top_holdings
        .iter()
        .map(|h| format!("{}: {} shares", h.symbol, h.shares))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Here is a simplified portfolio:

{}

Provide a brief overview for a novice investor. Include:
- Total portfolio value: ${:.2}.
- Top holdings (ticker symbols and shares): {}.
- The number of holdings: {}.

Do NOT give specific investment advice. Do not mention columns that are not in the data."#,
        table.trim_end(),
        summary.total_value,
        top_holdings,
        summary.num_holdings
    )
}

pub fn news_prompt(ticker: &str, headlines: &[String]) -> String {
    let news = headlines
        .iter()
        .map(|h| format!("- {}", h))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Summarize the following news articles for {} in three concise sentences for an investor.
Do not include information that is not in the articles.

News:
{}"#,
        ticker, news
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Holding;

    #[test]
    fn price_summary_embeds_two_decimal_price() {
        let prompt = price_summary_prompt(150.5);
        assert!(prompt.contains("Current Price: $150.50"));
        assert!(prompt.contains("novice investor"));
    }

    #[test]
    fn question_prompt_embeds_question() {
        let prompt = question_prompt("What is a dividend?");
        assert!(prompt.contains("Question: What is a dividend?"));
    }

    #[test]
    fn portfolio_prompt_embeds_table_and_aggregates() {
        let summary = AggregateSummary {
            total_value: 8600.0,
            top_holdings: vec![
                Holding {
                    symbol: "AAPL".to_string(),
                    shares: 10.0,
                    price: 150.0,
                },
                Holding {
                    symbol: "MSFT".to_string(),
                    shares: 5.0,
                    price: 300.0,
                },
            ],
            num_holdings: 3,
        };

        let prompt = portfolio_prompt("Stock,Shares,Price\nAAPL,10,150.00\n", &summary);
        assert!(prompt.contains("Stock,Shares,Price"));
        assert!(prompt.contains("Total portfolio value: $8600.00."));
        assert!(prompt.contains("AAPL: 10 shares, MSFT: 5 shares"));
        assert!(prompt.contains("The number of holdings: 3."));
        assert!(prompt.contains("Do NOT give specific investment advice."));
    }

    #[test]
    fn news_prompt_lists_headlines() {
        let headlines = vec![
            "Apple's Q1 earnings exceed expectations.".to_string(),
            "Apple announces new product launch.".to_string(),
        ];
        let prompt = news_prompt("AAPL", &headlines);
        assert!(prompt.contains("news articles for AAPL"));
        assert!(prompt.contains("- Apple's Q1 earnings exceed expectations."));
    }

    #[test]
    fn news_prompt_tolerates_empty_headlines() {
        let prompt = news_prompt("ZZZZ", &[]);
        assert!(prompt.contains("News:"));
    }
}
