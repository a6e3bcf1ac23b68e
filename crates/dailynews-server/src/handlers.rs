use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use dailynews_core::feed::FeedItem;
use dailynews_core::Error;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub result: Vec<FeedItem>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Fetch the upstream feed and return its headlines
pub async fn news(State(state): State<AppState>) -> impl IntoResponse {
    match state.fetcher.fetch().await {
        Ok(result) => (StatusCode::OK, Json(NewsResponse { result })).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch feed from {}: {}", state.fetcher.feed_url(), e);
            // Upstream failures are gateway errors; details stay in the log
            let status = match e {
                Error::Http(_) | Error::FeedStatus { .. } | Error::FeedParse(_) => {
                    StatusCode::BAD_GATEWAY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: "Failed to fetch feed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
