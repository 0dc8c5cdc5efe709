use anyhow::Context;

/// Process-wide configuration, read once at startup and passed explicitly
/// into the collaborators that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub project: String,
    pub region: String,
    pub news_data_source: String,
    pub access_token: String,
    pub model: String,
    pub max_output_tokens: usize,
    pub temperature: f32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            project: std::env::var("GOOGLE_CLOUD_PROJECT")
                .context("GOOGLE_CLOUD_PROJECT is not set")?,
            region: std::env::var("GOOGLE_CLOUD_REGION")
                .unwrap_or_else(|_| "asia-south1".to_string()),
            news_data_source: std::env::var("NEWS_DATA_SOURCE")
                .unwrap_or_else(|_| "https://www.google.com/finance/?hl=en".to_string()),
            access_token: std::env::var("GOOGLE_ACCESS_TOKEN")
                .context("GOOGLE_ACCESS_TOKEN is not set")?,
            model: std::env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            max_output_tokens: std::env::var("GENERATION_MAX_TOKENS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(500),
            temperature: std::env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.7),
        })
    }
}
