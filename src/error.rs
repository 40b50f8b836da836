use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheet request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Template directory not found: {}", .0.display())]
    TemplateDirMissing(PathBuf),

    #[error("Template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// True for failures reading the remote sheet (network, status, or CSV).
    pub fn is_fetch(&self) -> bool {
        matches!(self, SiteError::Http(_) | SiteError::Status { .. } | SiteError::Csv(_))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
