use clap::Parser;
use havenmaids_site::domain::ports::ConfigProvider;
use havenmaids_site::utils::error::ErrorSeverity;
use havenmaids_site::utils::{logger, validation::Validate};
use havenmaids_site::{CliConfig, LocalStorage, SiteConfig, SiteEngine, StaticSitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.log_format);

    tracing::info!("🚀 Starting havenmaids-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.load_site_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load site config: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &cli);

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = StaticSitePipeline::new(storage, config, cli.logo_url.clone())?;
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Site built successfully!");
            println!("✅ Site built successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Site build failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn display_config_summary(config: &SiteConfig, cli: &CliConfig) {
    let source = havenmaids_site::LogoSource::resolve(cli.logo_url.as_deref(), config.ambient_logo_url());
    let sizes = config.logo_sizes();

    println!("📋 Site Summary:");
    println!("  Site: {}", config.site_name());
    println!("  Title: {}", config.page_title());
    let logo = source
        .candidate()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} monogram", config.monogram()));
    println!("  Logo: {} ({})", logo, source.kind());
    println!(
        "  Logo sizes: header {}px, hero {}px, footer {}px",
        sizes.header, sizes.showcase, sizes.footer
    );
    println!("  Probe logo at build time: {}", config.probe_enabled());
    println!(
        "  Output: {}/{}",
        config.output_path(),
        config.output_filename()
    );
    if let Some(manifest) = config.manifest_filename() {
        println!("  Manifest: {}", manifest);
    }
    if let Some(archive) = config.archive_filename() {
        println!("  Archive: {}", archive);
    }
    if cli.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
    println!();
}
