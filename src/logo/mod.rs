pub mod instance;
pub mod monogram;
pub mod source;

pub use instance::{Brand, DisplayState, LoadAttempt, LogoInstance, LogoVariant};
pub use monogram::Monogram;
pub use source::LogoSource;

use crate::domain::model::LogoReport;
use crate::domain::ports::{ImageLoader, LogoSizes};
use crate::utils::error::Result;

/// The three logo occurrences on the page. Each resolves and fails over on
/// its own; nothing learned by one instance is shared with another.
#[derive(Debug)]
pub struct LogoSet {
    pub source: LogoSource,
    pub header: LogoInstance,
    pub showcase: LogoInstance,
    pub footer: LogoInstance,
}

impl LogoSet {
    pub fn mount(source: LogoSource, sizes: LogoSizes, brand: Brand) -> Self {
        let header = LogoInstance::mount(
            "header",
            LogoVariant::Mark { size: sizes.header },
            &source,
            brand.clone(),
        );
        let showcase = LogoInstance::mount(
            "hero",
            LogoVariant::Showcase { size: sizes.showcase },
            &source,
            brand.clone(),
        );
        let footer = LogoInstance::mount("footer", LogoVariant::Mark { size: sizes.footer }, &source, brand);

        Self {
            source,
            header,
            showcase,
            footer,
        }
    }

    pub fn instances(&self) -> [&LogoInstance; 3] {
        [&self.header, &self.showcase, &self.footer]
    }

    pub fn instances_mut(&mut self) -> [&mut LogoInstance; 3] {
        [&mut self.header, &mut self.showcase, &mut self.footer]
    }

    /// Runs one load attempt per instance. Returns how many attempts were made.
    pub async fn load_all(&mut self, loader: &dyn ImageLoader) -> Result<usize> {
        let mut attempts = 0;
        for instance in self.instances_mut() {
            let Some(attempt) = instance.begin_load() else {
                continue;
            };
            attempts += 1;
            tracing::debug!(instance = instance.id(), url = attempt.url(), "probing logo");
            let outcome = loader.load(attempt.url()).await;
            instance.settle(attempt, outcome)?;
        }
        Ok(attempts)
    }

    pub fn reports(&self) -> Vec<LogoReport> {
        self.instances().iter().map(|i| i.report()).collect()
    }
}
