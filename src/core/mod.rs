pub mod engine;
pub mod pipeline;

pub use crate::domain::model::RenderedSite;
pub use crate::domain::ports::{ConfigProvider, ImageLoader, SitePipeline, Storage};
pub use crate::utils::error::Result;
