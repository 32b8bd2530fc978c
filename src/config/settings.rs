use crate::adapters::analytics::{NoopAnalytics, TracingAnalytics};
use crate::adapters::fixtures::{default_search_files, FixtureSource};
use crate::adapters::http::{MarketplaceClient, DEFAULT_BASE_URL, SITE_ID_BRAZIL};
use crate::adapters::storage::LocalStorage;
use crate::config::toml_config::{SourceKind, TomlConfig};
use crate::domain::ports::{AnalyticsSink, ProductSource, DEFAULT_PAGE_SIZE};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_FIXTURES_DIR: &str = "./fixtures";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fully resolved settings: built-in defaults, then the TOML file, then
/// command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub source: SourceKind,
    pub base_url: String,
    pub site_id: String,
    pub timeout_seconds: u64,
    pub page_size: u32,
    pub fixtures_dir: String,
    pub search_files: HashMap<String, String>,
    pub analytics_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            site_id: SITE_ID_BRAZIL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            page_size: DEFAULT_PAGE_SIZE,
            fixtures_dir: DEFAULT_FIXTURES_DIR.to_string(),
            search_files: default_search_files(),
            analytics_enabled: true,
        }
    }
}

impl AppSettings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            source: config.source.kind.unwrap_or(defaults.source),
            base_url: config.api.base_url.unwrap_or(defaults.base_url),
            site_id: config.api.site_id.unwrap_or(defaults.site_id),
            timeout_seconds: config
                .api
                .timeout_seconds
                .unwrap_or(defaults.timeout_seconds),
            page_size: config.search.page_size.unwrap_or(defaults.page_size),
            fixtures_dir: config.fixtures.directory.unwrap_or(defaults.fixtures_dir),
            search_files: config
                .fixtures
                .search_files
                .unwrap_or(defaults.search_files),
            analytics_enabled: config
                .analytics
                .enabled
                .unwrap_or(defaults.analytics_enabled),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn product_source(&self) -> Result<Arc<dyn ProductSource>> {
        match self.source {
            SourceKind::Api => {
                tracing::info!("Using marketplace API at {} (site {})", self.base_url, self.site_id);
                let client = MarketplaceClient::new(&self.base_url, &self.site_id, self.timeout())?;
                Ok(Arc::new(client))
            }
            SourceKind::Fixtures => {
                tracing::info!("Using bundled fixtures from {}", self.fixtures_dir);
                let source = FixtureSource::new(LocalStorage::new(&self.fixtures_dir))
                    .with_search_files(self.search_files.clone());
                Ok(Arc::new(source))
            }
        }
    }

    pub fn analytics_sink(&self) -> Arc<dyn AnalyticsSink> {
        if self.analytics_enabled {
            Arc::new(TracingAnalytics)
        } else {
            Arc::new(NoopAnalytics)
        }
    }
}

impl Validate for AppSettings {
    fn validate(&self) -> Result<()> {
        match self.source {
            SourceKind::Api => {
                validate_url("api.base_url", &self.base_url)?;
                validate_non_empty_string("api.site_id", &self.site_id)?;
                validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)?;
            }
            SourceKind::Fixtures => {
                validate_path("fixtures.directory", &self.fixtures_dir)?;
            }
        }
        validate_range("search.page_size", self.page_size, 1, DEFAULT_PAGE_SIZE)?;
        Ok(())
    }
}
