use axum::{routing::get, Router};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // `/` and `/news` are the same operation
    Router::new()
        .route("/", get(handlers::news))
        .route("/news", get(handlers::news))
        .with_state(state)
}
