pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logo;
pub mod ui;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpImageLoader, LocalStorage};
pub use config::SiteConfig;
pub use crate::core::{engine::SiteEngine, pipeline::StaticSitePipeline};
pub use logo::{LogoInstance, LogoSet, LogoSource};
pub use utils::error::{Result, SiteError};
