use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{Result, SiteError};
use crate::schema::ColumnMap;

/// Everything the server and the static build need, loaded once at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub sheet: SheetConfig,
    pub links: LinksConfig,
    pub mail: MailConfig,
    pub server: ServerConfig,
    pub build: BuildConfig,
    pub columns: ColumnMap,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub testimonials_csv_url: String,
    pub contacts_csv_url: String,
    pub fetch_timeout_seconds: u64,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            testimonials_csv_url: constants::DEFAULT_SHEET_CSV_URL.to_string(),
            contacts_csv_url: constants::DEFAULT_SHEET_CSV_URL.to_string(),
            fetch_timeout_seconds: constants::DEFAULT_FETCH_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub sign_up_form_url: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self { sign_up_form_url: constants::DEFAULT_SIGN_UP_FORM_URL.to_string() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub subject: String,
    pub sample_size: usize,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            subject: constants::DEFAULT_MAIL_SUBJECT.to_string(),
            sample_size: constants::DEFAULT_SAMPLE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: constants::DEFAULT_PORT,
            static_dir: PathBuf::from(constants::DEFAULT_STATIC_DIR),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(constants::DEFAULT_TEMPLATE_DIR),
            static_dir: PathBuf::from(constants::DEFAULT_STATIC_DIR),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    ///
    /// With `path == None` the default `config.toml` is read when present and
    /// silently skipped otherwise. An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SiteError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TESTIMONIALS_CSV_URL") {
            self.sheet.testimonials_csv_url = url;
        }
        if let Some(url) = lookup("CONTACTS_CSV_URL") {
            self.sheet.contacts_csv_url = url;
        }
        if let Some(url) = lookup("SIGN_UP_FORM_URL") {
            self.links.sign_up_form_url = url;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| SiteError::Config(format!("PORT is not a valid port number: {}", port)))?;
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.server.static_dir = PathBuf::from(&dir);
            self.build.static_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("TEMPLATE_DIR") {
            self.build.template_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("OUTPUT_DIR") {
            self.build.output_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(1..=constants::MAX_SAMPLE_SIZE).contains(&self.mail.sample_size) {
            return Err(SiteError::Config(format!(
                "mail.sample_size must be between 1 and {}, got {}",
                constants::MAX_SAMPLE_SIZE,
                self.mail.sample_size
            )));
        }
        if self.sheet.testimonials_csv_url.trim().is_empty() || self.sheet.contacts_csv_url.trim().is_empty() {
            return Err(SiteError::Config("sheet URLs must not be empty".to_string()));
        }
        Ok(())
    }
}
