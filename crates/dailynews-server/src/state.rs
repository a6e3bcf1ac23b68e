use std::sync::Arc;

use dailynews_core::feed::FeedFetcher;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<FeedFetcher>,
}

impl AppState {
    pub fn new(fetcher: FeedFetcher) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }
}
