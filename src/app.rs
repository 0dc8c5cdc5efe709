use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{health, news, portfolio, question, summary};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // Open CORS: the client is a browser app served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .merge(summary::router())
        .merge(question::router())
        .merge(portfolio::router())
        .merge(news::router())
        .layer(cors)
        .with_state(state)
}
