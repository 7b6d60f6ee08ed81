use crate::domain::ports::{ConfigProvider, LogoSizes};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, validate_range, validate_url,
    Validate,
};
use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
pub const DEFAULT_ARCHIVE_FILENAME: &str = "site.zip";
pub const MANIFEST_FILENAME: &str = "site-manifest.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub brand: BrandConfig,
    pub logo: LogoConfig,
    pub probe: ProbeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub monogram: Option<String>,
    /// Fixed copyright year; the current year is used when unset.
    pub year: Option<i32>,
    pub tailwind_cdn: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "HavenMaids LLC".to_string(),
            title: None,
            tagline: None,
            monogram: None,
            year: None,
            tailwind_cdn: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Page-level fallback logo, used when no logo URL is passed on the command line.
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub header_size: Option<u32>,
    pub footer_size: Option<u32>,
    pub showcase_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub enabled: Option<bool>,
    pub timeout_seconds: Option<u64>,
    /// Base for resolving relative logo paths during probing.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
    pub manifest: Option<bool>,
    pub archive: Option<ArchiveConfig>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./dist".to_string(),
            filename: None,
            manifest: None,
            archive: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub enabled: bool,
    #[serde(default = "default_archive_filename")]
    pub filename: String,
}

fn default_archive_filename() -> String {
    DEFAULT_ARCHIVE_FILENAME.to_string()
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables become
    /// empty strings, so an unset logo variable reads as "no logo".
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::debug!("environment variable {} is not set", var_name);
                String::new()
            })
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("site.name", &self.site.name)?;

        if let Some(monogram) = &self.site.monogram {
            validate_non_empty_string("site.monogram", monogram)?;
            validate_range("site.monogram length", monogram.chars().count(), 1, 2)?;
        }

        if let Some(year) = self.site.year {
            validate_range("site.year", year, 1970, 9999)?;
        }

        let sizes = self.logo_sizes();
        validate_range("logo.header_size", sizes.header, 16, 512)?;
        validate_range("logo.footer_size", sizes.footer, 16, 512)?;
        validate_range("logo.showcase_size", sizes.showcase, 16, 512)?;

        if let Some(base_url) = &self.probe.base_url {
            validate_url("probe.base_url", base_url)?;
        }
        if let Some(timeout) = self.probe.timeout_seconds {
            validate_range("probe.timeout_seconds", timeout, 1, 300)?;
        }

        validate_path("output.path", &self.output.path)?;
        validate_file_name("output.filename", self.output_filename(), &["html", "htm"])?;
        if let Some(archive) = &self.output.archive {
            validate_file_name("output.archive.filename", &archive.filename, &["zip"])?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteConfig {
    fn site_name(&self) -> &str {
        &self.site.name
    }

    fn page_title(&self) -> &str {
        self.site.title.as_deref().unwrap_or(&self.site.name)
    }

    fn tagline(&self) -> &str {
        self.site
            .tagline
            .as_deref()
            .unwrap_or("Residential & Commercial Cleaning")
    }

    fn monogram(&self) -> &str {
        self.site.monogram.as_deref().unwrap_or("HM")
    }

    fn footer_year(&self) -> i32 {
        self.site.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    fn tailwind_cdn(&self) -> &str {
        self.site.tailwind_cdn.as_deref().unwrap_or(DEFAULT_TAILWIND_CDN)
    }

    fn ambient_logo_url(&self) -> Option<&str> {
        self.brand.logo_url.as_deref()
    }

    fn logo_sizes(&self) -> LogoSizes {
        let defaults = LogoSizes::default();
        LogoSizes {
            header: self.logo.header_size.unwrap_or(defaults.header),
            footer: self.logo.footer_size.unwrap_or(defaults.footer),
            showcase: self.logo.showcase_size.unwrap_or(defaults.showcase),
        }
    }

    fn probe_enabled(&self) -> bool {
        self.probe.enabled.unwrap_or(false)
    }

    fn probe_timeout(&self) -> Option<Duration> {
        self.probe.timeout_seconds.map(Duration::from_secs)
    }

    fn probe_base_url(&self) -> Option<&str> {
        self.probe.base_url.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or("index.html")
    }

    fn manifest_filename(&self) -> Option<&str> {
        self.output
            .manifest
            .unwrap_or(true)
            .then_some(MANIFEST_FILENAME)
    }

    fn archive_filename(&self) -> Option<&str> {
        self.output
            .archive
            .as_ref()
            .filter(|a| a.enabled)
            .map(|a| a.filename.as_str())
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_page_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert_eq!(config.site_name(), "HavenMaids LLC");
        assert_eq!(config.page_title(), "HavenMaids LLC");
        assert_eq!(config.monogram(), "HM");
        assert_eq!(config.ambient_logo_url(), None);
        assert_eq!(config.logo_sizes(), LogoSizes::default());
        assert!(!config.probe_enabled());
        assert_eq!(config.output_filename(), "index.html");
        assert_eq!(config.manifest_filename(), Some(MANIFEST_FILENAME));
        assert_eq!(config.archive_filename(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[site]
name = "HavenMaids LLC"
title = "HavenMaids | Cleaning"
year = 2025

[brand]
logo_url = "https://example.com/logo.png"

[logo]
header_size = 44

[probe]
enabled = true
timeout_seconds = 5

[output]
path = "./public"
manifest = false

[output.archive]
enabled = true
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.page_title(), "HavenMaids | Cleaning");
        assert_eq!(config.footer_year(), 2025);
        assert_eq!(config.ambient_logo_url(), Some("https://example.com/logo.png"));
        assert_eq!(config.logo_sizes().header, 44);
        assert_eq!(config.logo_sizes().footer, 48);
        assert!(config.probe_enabled());
        assert_eq!(config.probe_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.manifest_filename(), None);
        assert_eq!(config.archive_filename(), Some(DEFAULT_ARCHIVE_FILENAME));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("HAVENMAIDS_TEST_LOGO_URL", "https://cdn.example/brand.svg");

        let config = SiteConfig::from_toml_str(
            r#"
[brand]
logo_url = "${HAVENMAIDS_TEST_LOGO_URL}"
"#,
        )
        .unwrap();
        assert_eq!(config.ambient_logo_url(), Some("https://cdn.example/brand.svg"));

        std::env::remove_var("HAVENMAIDS_TEST_LOGO_URL");
    }

    #[test]
    fn test_unset_env_var_becomes_empty() {
        let config = SiteConfig::from_toml_str(
            r#"
[brand]
logo_url = "${HAVENMAIDS_TEST_NEVER_SET}"
"#,
        )
        .unwrap();
        assert_eq!(config.ambient_logo_url(), Some(""));
    }

    #[test]
    fn test_config_validation() {
        let config = SiteConfig::from_toml_str(
            r#"
[logo]
showcase_size = 4000
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = SiteConfig::from_toml_str(
            r#"
[output]
filename = "index.txt"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = SiteConfig::from_toml_str(
            r#"
[site]
monogram = "HMX"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[site\nname = ").unwrap_err();
        assert!(matches!(err, SiteError::ConfigError { .. }));
    }

    #[test]
    fn test_example_config_is_valid() {
        let config =
            SiteConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/site.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.archive_filename(), None);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[site]\nname = \"Haven Test\"\n")
            .unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site_name(), "Haven Test");
    }
}
