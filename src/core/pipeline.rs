use crate::adapters::HttpImageLoader;
use crate::domain::model::{RenderedSite, SiteManifest};
use crate::domain::ports::{ConfigProvider, ImageLoader, SitePipeline, Storage};
use crate::logo::{Brand, LogoSet, LogoSource, Monogram};
use crate::ui::{render_page, ContactForm, PageContext};
use crate::utils::error::Result;
use chrono::Utc;
use std::io::{Cursor, Write};
use std::path::Path;
use std::sync::Arc;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Builds the one-page site: resolve logos, render markup, write files.
pub struct StaticSitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    explicit_logo_url: Option<String>,
    loader: Option<Arc<dyn ImageLoader>>,
}

impl<S: Storage, C: ConfigProvider> StaticSitePipeline<S, C> {
    /// `explicit_logo_url` is the caller's logo and outranks the ambient
    /// value from `config`. Probing uses an HTTP loader when enabled in config.
    pub fn new(storage: S, config: C, explicit_logo_url: Option<String>) -> Result<Self> {
        let loader: Option<Arc<dyn ImageLoader>> = if config.probe_enabled() {
            Some(Arc::new(HttpImageLoader::new(
                config.probe_timeout(),
                config.probe_base_url(),
            )?))
        } else {
            None
        };

        Ok(Self {
            storage,
            config,
            explicit_logo_url,
            loader,
        })
    }

    /// Replaces the build-time loader, or disables probing with `None`.
    pub fn with_loader(mut self, loader: Option<Arc<dyn ImageLoader>>) -> Self {
        self.loader = loader;
        self
    }

    pub fn logo_source(&self) -> LogoSource {
        LogoSource::resolve(self.explicit_logo_url.as_deref(), self.config.ambient_logo_url())
    }

    fn brand(&self) -> Brand {
        Brand {
            name: self.config.site_name().to_string(),
            tagline: self.config.tagline().to_string(),
            monogram: Monogram::new(self.config.monogram()),
        }
    }

    fn build_archive(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, data) in entries {
            zip.start_file(*name, options)?;
            zip.write_all(data)?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SitePipeline for StaticSitePipeline<S, C> {
    async fn resolve(&self) -> Result<LogoSet> {
        let source = self.logo_source();
        tracing::info!("Logo source: {} ({})", source.kind(), source.candidate().unwrap_or("monogram"));

        let mut logos = LogoSet::mount(source, self.config.logo_sizes(), self.brand());

        if let Some(loader) = &self.loader {
            let attempts = logos.load_all(loader.as_ref()).await?;
            let fallbacks = logos.instances().iter().filter(|i| i.is_fallback()).count();
            tracing::info!("Probed logo {} time(s), {} instance(s) fell back", attempts, fallbacks);
        } else {
            tracing::debug!("Logo probing disabled, loading is left to the browser");
        }

        Ok(logos)
    }

    async fn render(&self, logos: LogoSet) -> Result<RenderedSite> {
        let contact = ContactForm::new();
        let html = render_page(&PageContext {
            title: self.config.page_title(),
            site_name: self.config.site_name(),
            tailwind_cdn: self.config.tailwind_cdn(),
            footer_year: self.config.footer_year(),
            logos: &logos,
            contact: &contact,
        });

        let manifest = SiteManifest {
            site: self.config.site_name().to_string(),
            generated_at: Utc::now(),
            logo_source: logos.source.kind().to_string(),
            logos: logos.reports(),
        };

        tracing::debug!("Rendered {} bytes of HTML", html.len());
        Ok(RenderedSite { html, manifest })
    }

    async fn publish(&self, site: RenderedSite) -> Result<String> {
        let page_name = self.config.output_filename();
        self.storage.write_file(page_name, site.html.as_bytes()).await?;

        let manifest_json = serde_json::to_vec_pretty(&site.manifest)?;
        if let Some(manifest_name) = self.config.manifest_filename() {
            self.storage.write_file(manifest_name, &manifest_json).await?;
        }

        if let Some(archive_name) = self.config.archive_filename() {
            let mut entries: Vec<(&str, &[u8])> = vec![(page_name, site.html.as_bytes())];
            if let Some(manifest_name) = self.config.manifest_filename() {
                entries.push((manifest_name, manifest_json.as_slice()));
            }
            let archive = Self::build_archive(&entries)?;
            self.storage.write_file(archive_name, &archive).await?;
            tracing::info!("📦 Archive written: {}", archive_name);
        }

        Ok(Path::new(self.config.output_path())
            .join(page_name)
            .to_string_lossy()
            .into_owned())
    }
}
