use crate::domain::ports::SitePipeline;
use crate::utils::error::Result;

pub struct SiteEngine<P: SitePipeline> {
    pipeline: P,
}

impl<P: SitePipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");

        // Resolve
        tracing::info!("Resolving logo...");
        let logos = self.pipeline.resolve().await?;
        let instances = logos.instances();
        let fallbacks = instances.iter().filter(|i| i.is_fallback()).count();
        tracing::info!(
            "Resolved {} logo instances ({} showing monogram)",
            instances.len(),
            fallbacks
        );

        // Render
        tracing::info!("Rendering page...");
        let site = self.pipeline.render(logos).await?;
        tracing::info!("Rendered {} bytes", site.html.len());

        // Publish
        tracing::info!("Writing files...");
        let output_path = self.pipeline.publish(site).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
