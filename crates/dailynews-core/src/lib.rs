pub mod config;
pub mod error;
pub mod feed;

pub use config::AppConfig;
pub use error::{Error, Result};
