mod http;
mod local;

pub use http::HttpSource;
pub use local::LocalFileSource;

use anyhow::Result;
use async_trait::async_trait;

/// Trait for fetching the raw bytes of a coverage resource
#[async_trait]
pub trait FetchSource: Send + Sync {
    /// Fetch the entire resource into memory
    async fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable name of the resource, for diagnostics
    fn origin(&self) -> &str;
}
