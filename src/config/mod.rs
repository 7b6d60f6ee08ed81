pub mod toml_config;

pub use toml_config::SiteConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::{ArchiveConfig, DEFAULT_ARCHIVE_FILENAME};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "havenmaids-site")]
#[command(about = "Build the HavenMaids one-page website")]
pub struct CliConfig {
    /// Path to TOML site configuration; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Logo image URL. Takes priority over [brand] logo_url
    #[arg(long)]
    pub logo_url: Option<String>,

    /// Override [output] path
    #[arg(long)]
    pub output_path: Option<String>,

    /// Request each logo once at build time and bake failures into the page
    #[arg(long)]
    pub probe_logo: bool,

    /// Also bundle the output into a zip archive
    #[arg(long)]
    pub archive: bool,

    /// Show what would be built without writing anything
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the site config file (if any) and applies command-line overrides.
    pub fn load_site_config(&self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };

        if let Some(output_path) = &self.output_path {
            config.output.path = output_path.clone();
            tracing::info!("🔧 Output path overridden to: {}", output_path);
        }
        if self.probe_logo {
            config.probe.enabled = Some(true);
        }
        if self.archive {
            match &mut config.output.archive {
                Some(archive) => archive.enabled = true,
                None => {
                    config.output.archive = Some(ArchiveConfig {
                        enabled: true,
                        filename: DEFAULT_ARCHIVE_FILENAME.to_string(),
                    })
                }
            }
        }

        Ok(config)
    }
}
