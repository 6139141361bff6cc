use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use std::time::Duration;

use super::FetchSource;
use anyhow::{bail, Result};

/// HTTP source for remote coverage data
pub struct HttpSource {
    client: Client,
    url: String,
    max_retry: u32,
}

impl HttpSource {
    /// Create a new HTTP source
    ///
    /// The coverage resource is fetched with a single GET request;
    /// connection and timeout errors are retried with linear backoff.
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            url,
            max_retry: 3,
        })
    }
}

#[async_trait]
impl FetchSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        let mut retry_count = 0;

        loop {
            let result = self.client.get(&self.url).send().await;

            match result {
                Ok(resp) => {
                    if !resp.status().is_success() {
                        bail!("HTTP request failed with status: {}", resp.status());
                    }

                    let bytes = resp.bytes().await?;
                    return Ok(bytes.to_vec());
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    retry_count += 1;
                    if retry_count >= self.max_retry {
                        bail!("Max retries exceeded fetching {}", self.url);
                    }
                    warn!(
                        "Connection error, retry {}/{}: {}",
                        retry_count, self.max_retry, e
                    );
                    tokio::time::sleep(Duration::from_millis(500 * retry_count as u64)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn origin(&self) -> &str {
        &self.url
    }
}
