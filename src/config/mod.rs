pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli {
    use super::settings::AppSettings;
    use super::toml_config::{SourceKind, TomlConfig};
    use crate::utils::error::Result;
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "mercado-search")]
    #[command(about = "Search marketplace products and inspect their details")]
    pub struct CliConfig {
        #[arg(long, help = "TOML configuration file")]
        pub config: Option<String>,

        #[arg(long, value_enum, help = "Where results come from")]
        pub source: Option<SourceKind>,

        #[arg(long)]
        pub base_url: Option<String>,

        #[arg(long)]
        pub site_id: Option<String>,

        #[arg(long)]
        pub fixtures_dir: Option<String>,

        #[arg(long)]
        pub page_size: Option<u32>,

        #[arg(long, help = "Do not report analytics events")]
        pub no_analytics: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Run a single search and print one page of results
        Search {
            query: String,
            #[arg(long, default_value = "0")]
            offset: u32,
        },
        /// Print the details of one product
        Detail { id: String },
        /// Interactive search session on stdin
        Browse,
    }

    impl CliConfig {
        /// Resolves defaults, the optional TOML file and the flags on this
        /// command line, in that order.
        pub fn settings(&self) -> Result<AppSettings> {
            let file_config = match &self.config {
                Some(path) => TomlConfig::from_file(path)?,
                None => TomlConfig::default(),
            };

            let mut settings = AppSettings::from_toml(file_config);
            if let Some(source) = self.source {
                settings.source = source;
            }
            if let Some(base_url) = &self.base_url {
                settings.base_url = base_url.clone();
            }
            if let Some(site_id) = &self.site_id {
                settings.site_id = site_id.clone();
            }
            if let Some(dir) = &self.fixtures_dir {
                settings.fixtures_dir = dir.clone();
            }
            if let Some(page_size) = self.page_size {
                settings.page_size = page_size;
            }
            if self.no_analytics {
                settings.analytics_enabled = false;
            }
            Ok(settings)
        }
    }

}
