use super::FetchSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Local file source for coverage data
pub struct LocalFileSource {
    path: PathBuf,
    origin: String,
}

impl LocalFileSource {
    pub fn new(path: PathBuf) -> Self {
        let origin = path.display().to_string();
        Self { path, origin }
    }
}

#[async_trait]
impl FetchSource for LocalFileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read coverage file: {}", self.origin))
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}
