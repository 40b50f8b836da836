use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::app::ports::TableSource;
use crate::error::{Result, SiteError};

/// Fetches published sheet exports over HTTP(S).
pub struct ReqwestTableSource {
    client: reqwest::Client,
}

impl ReqwestTableSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TableSource for ReqwestTableSource {
    async fn fetch_csv(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SiteError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let body = resp.text().await?;
        debug!(url, bytes = body.len(), "fetched sheet export");
        Ok(body)
    }
}
