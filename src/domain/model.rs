use chrono::{DateTime, Utc};
use serde::Serialize;

/// Glyphs available to service cards and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Sparkles,
    Broom,
    Gutter,
    Floor,
    Trash,
    Paint,
    Pressure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Why an image could not be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LoadFailure {
    Network(String),
    Status(u16),
    NotAnImage(Option<String>),
    EmptyBody,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadFailure::Network(message) => write!(f, "network error: {}", message),
            LoadFailure::Status(code) => write!(f, "HTTP status {}", code),
            LoadFailure::NotAnImage(Some(content_type)) => {
                write!(f, "not an image (content-type {})", content_type)
            }
            LoadFailure::NotAnImage(None) => write!(f, "not an image (no content-type)"),
            LoadFailure::EmptyBody => write!(f, "empty image body"),
        }
    }
}

/// Terminal result of one image load attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded,
    Failed { reason: LoadFailure },
    /// The loader cannot observe this URL; the browser will make the attempt.
    Deferred,
}

impl LoadOutcome {
    pub fn failed(reason: LoadFailure) -> Self {
        LoadOutcome::Failed { reason }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoReport {
    pub instance: String,
    pub variant: String,
    pub attempted_url: Option<String>,
    pub fell_back: bool,
    pub load: Option<LoadOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteManifest {
    pub site: String,
    pub generated_at: DateTime<Utc>,
    pub logo_source: String,
    pub logos: Vec<LogoReport>,
}

#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub html: String,
    pub manifest: SiteManifest,
}
