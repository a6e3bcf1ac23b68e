mod fetcher;
mod models;
mod parser;

pub use fetcher::FeedFetcher;
pub use models::FeedItem;
pub use parser::extract_items;
