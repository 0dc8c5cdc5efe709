use std::sync::Arc;

use crate::external::news_source::NewsSource;
use crate::external::quote_source::QuoteSource;
use crate::services::llm_service::TextGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub quotes: Arc<dyn QuoteSource>,
    pub news: Arc<dyn NewsSource>,
}
