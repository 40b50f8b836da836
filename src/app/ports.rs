use async_trait::async_trait;

use crate::error::Result;

/// Where the sheet export comes from.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Fetch the raw CSV text published at `url`.
    async fn fetch_csv(&self, url: &str) -> Result<String>;
}
