pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

use dailynews_core::feed::FeedFetcher;
use dailynews_core::{AppConfig, Result};

pub async fn run_server(config: AppConfig) -> Result<()> {
    let fetcher = FeedFetcher::new(&config)?;
    let state = AppState::new(fetcher);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(
        "Serving headlines from {} on http://{}",
        config.feed.url,
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;

    Ok(())
}
