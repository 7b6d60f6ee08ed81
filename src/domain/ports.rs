use crate::domain::model::{LoadOutcome, RenderedSite};
use crate::logo::LogoSet;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Pixel sizes for each logo presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSizes {
    pub header: u32,
    pub footer: u32,
    pub showcase: u32,
}

impl Default for LogoSizes {
    fn default() -> Self {
        Self {
            header: 40,
            footer: 48,
            showcase: 160,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn site_name(&self) -> &str;
    fn page_title(&self) -> &str;
    fn tagline(&self) -> &str;
    fn monogram(&self) -> &str;
    fn footer_year(&self) -> i32;
    fn tailwind_cdn(&self) -> &str;
    /// Page-level fallback logo URL, consulted when the caller supplies none.
    fn ambient_logo_url(&self) -> Option<&str>;
    fn logo_sizes(&self) -> LogoSizes;
    fn probe_enabled(&self) -> bool;
    fn probe_timeout(&self) -> Option<Duration>;
    fn probe_base_url(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn manifest_filename(&self) -> Option<&str>;
    fn archive_filename(&self) -> Option<&str>;
}

/// Performs one image load attempt. Failures are outcomes, not errors.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, url: &str) -> LoadOutcome;
}

#[async_trait]
pub trait SitePipeline: Send + Sync {
    async fn resolve(&self) -> Result<LogoSet>;
    async fn render(&self, logos: LogoSet) -> Result<RenderedSite>;
    async fn publish(&self, site: RenderedSite) -> Result<String>;
}
