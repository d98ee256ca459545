use crate::error::DashboardError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const API_URL_ENV: &str = "AIR_QUALITY_API_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the prediction service. Endpoint paths are fixed.
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = toml::from_str(text)?;
        config.validated()
    }

    /// Read a TOML config file. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn apply_env_overrides(self) -> Result<Self, DashboardError> {
        self.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    fn with_api_url_override(mut self, url: Option<String>) -> Result<Self, DashboardError> {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self.validated()
    }

    fn validated(mut self) -> Result<Self, DashboardError> {
        let url = self.api_base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(DashboardError::Config("api_base_url is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        self.api_base_url = url.to_string();
        Ok(self)
    }
}
