// Adapters layer: concrete implementations for external systems (filesystem, http).

pub mod http;
pub mod storage;

pub use http::HttpImageLoader;
pub use storage::LocalStorage;
