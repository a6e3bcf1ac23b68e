use serde::{Deserialize, Serialize};

/// A single headline extracted from a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    /// Feed-provided date string, kept verbatim (not parsed into a datetime)
    pub date: String,
}
