use std::path::PathBuf;

use crate::shared::errors::{AppError, AppResult};

pub const ENV_ICON_DIR: &str = "CATALOG_ICON_DIR";
pub const ENV_PLACEHOLDER: &str = "CATALOG_PLACEHOLDER";
pub const ENV_DEFAULT_VIDEO: &str = "CATALOG_DEFAULT_VIDEO";
pub const ENV_DATA_DIR: &str = "CATALOG_DATA_DIR";

/// Configuration for the catalog engine
///
/// Holds every well-known location the engine hands back to the
/// presentation layer, so none of them are hard-coded in the services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Directory prefix for derived icon candidates (must end with `/`)
    pub icon_dir: String,

    /// Terminal placeholder icon, always the last candidate
    pub placeholder: String,

    /// Demonstration video used when a script carries none
    pub default_video: String,

    /// Directory holding `scripts.json` and `projects.json`
    pub data_dir: PathBuf,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self {
            icon_dir: "/icons/".to_string(),
            placeholder: "/icons/placeholder.jpg".to_string(),
            default_video: "/videos/add-revision-to-sheets.png.mp4".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }

    /// Load configuration from the environment (and `.env` when present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or blank keys
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = CatalogConfigBuilder::new();

        if let Some(dir) = value(ENV_ICON_DIR) {
            builder = builder.icon_dir(dir);
        }
        if let Some(placeholder) = value(ENV_PLACEHOLDER) {
            builder = builder.placeholder(placeholder);
        }
        if let Some(video) = value(ENV_DEFAULT_VIDEO) {
            builder = builder.default_video(video);
        }
        if let Some(dir) = value(ENV_DATA_DIR) {
            builder = builder.data_dir(dir);
        }

        let config = builder.build().map_err(AppError::ConfigError)?;
        log::debug!("Catalog configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.icon_dir.is_empty() {
            return Err("icon_dir cannot be empty".to_string());
        }
        if !self.icon_dir.ends_with('/') {
            return Err(format!("icon_dir must end with '/', got '{}'", self.icon_dir));
        }
        if self.placeholder.trim().is_empty() {
            return Err("placeholder cannot be empty".to_string());
        }
        if self.default_video.trim().is_empty() {
            return Err("default_video cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for CatalogConfig
#[derive(Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::new(),
        }
    }

    pub fn icon_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.icon_dir = dir.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    pub fn default_video(mut self, url: impl Into<String>) -> Self {
        self.config.default_video = url.into();
        self
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    pub fn build(self) -> Result<CatalogConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
