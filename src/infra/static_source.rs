use async_trait::async_trait;
use std::fs;
use std::path::Path;

use crate::app::ports::TableSource;
use crate::error::{Result, SiteError};

/// Serves fixed CSV text regardless of URL, or fails every fetch.
///
/// Used for offline builds (`--csv-file`) and by tests.
#[derive(Debug, Clone)]
pub enum StaticTableSource {
    Csv(String),
    Unavailable { status: u16 },
}

impl StaticTableSource {
    pub fn csv(text: impl Into<String>) -> Self {
        StaticTableSource::Csv(text.into())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(StaticTableSource::Csv(fs::read_to_string(path)?))
    }

    pub fn unavailable() -> Self {
        StaticTableSource::Unavailable { status: 503 }
    }
}

#[async_trait]
impl TableSource for StaticTableSource {
    async fn fetch_csv(&self, url: &str) -> Result<String> {
        match self {
            StaticTableSource::Csv(text) => Ok(text.clone()),
            StaticTableSource::Unavailable { status } => {
                Err(SiteError::Status { url: url.to_string(), status: *status })
            }
        }
    }
}
