use crate::domain::model::{LoadOutcome, LogoReport};
use crate::logo::monogram::Monogram;
use crate::logo::source::LogoSource;
use crate::ui::html::{cn, escape};
use crate::utils::error::{Result, SiteError};
use tokio::sync::watch;

/// Swaps the nearest `[data-logo]` element for the monogram held in the
/// `<template>` just before it. Clears itself first so it can fire only once.
/// The template precedes the image so it is parsed before any error event.
const ONERROR_FALLBACK: &str = "this.onerror=null;var w=this.closest('[data-logo]');var t=w.previousElementSibling;w.replaceWith(t.content.cloneNode(true));t.remove()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    /// Small inline mark used in the header and footer.
    Mark { size: u32 },
    /// Large hero card.
    Showcase { size: u32 },
}

impl LogoVariant {
    pub fn name(&self) -> &'static str {
        match self {
            LogoVariant::Mark { .. } => "mark",
            LogoVariant::Showcase { .. } => "showcase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub attempted_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub monogram: Monogram,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "HavenMaids LLC".to_string(),
            tagline: "Residential & Commercial Cleaning".to_string(),
            monogram: Monogram::default(),
        }
    }
}

#[derive(Debug)]
enum AttemptPhase {
    Idle,
    InFlight,
    Settled(LoadOutcome),
}

/// A pending image load. Consumed by [`LogoInstance::settle`], so each
/// attempt reports back at most once.
#[derive(Debug)]
#[must_use = "an attempt must be settled for the logo to leave its in-flight phase"]
pub struct LoadAttempt {
    instance: String,
    url: String,
}

impl LoadAttempt {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }
}

/// One occurrence of the logo on the page with its own display state.
#[derive(Debug)]
pub struct LogoInstance {
    id: String,
    variant: LogoVariant,
    brand: Brand,
    state: watch::Sender<DisplayState>,
    phase: AttemptPhase,
}

impl LogoInstance {
    pub fn mount(id: impl Into<String>, variant: LogoVariant, source: &LogoSource, brand: Brand) -> Self {
        let initial = DisplayState {
            attempted_url: source.candidate().map(str::to_string),
        };
        Self {
            id: id.into(),
            variant,
            brand,
            state: watch::Sender::new(initial),
            phase: AttemptPhase::Idle,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn variant(&self) -> LogoVariant {
        self.variant
    }

    pub fn display_state(&self) -> DisplayState {
        self.state.borrow().clone()
    }

    pub fn is_fallback(&self) -> bool {
        self.state.borrow().attempted_url.is_none()
    }

    /// Receives every display-state transition of this instance.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.state.subscribe()
    }

    pub fn load_outcome(&self) -> Option<&LoadOutcome> {
        match &self.phase {
            AttemptPhase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Starts the only load attempt this instance will ever make.
    ///
    /// Returns `None` when there is nothing to load, or when an attempt has
    /// already been made.
    pub fn begin_load(&mut self) -> Option<LoadAttempt> {
        if !matches!(self.phase, AttemptPhase::Idle) {
            return None;
        }
        let url = self.state.borrow().attempted_url.clone()?;
        self.phase = AttemptPhase::InFlight;
        Some(LoadAttempt {
            instance: self.id.clone(),
            url,
        })
    }

    pub fn settle(&mut self, attempt: LoadAttempt, outcome: LoadOutcome) -> Result<()> {
        if attempt.instance != self.id {
            return Err(SiteError::LogoStateError {
                instance: self.id.clone(),
                message: format!("attempt belongs to '{}'", attempt.instance),
            });
        }
        if !matches!(self.phase, AttemptPhase::InFlight) {
            return Err(SiteError::LogoStateError {
                instance: self.id.clone(),
                message: "no load attempt in flight".to_string(),
            });
        }

        if let LoadOutcome::Failed { reason } = &outcome {
            tracing::debug!(
                instance = %self.id,
                url = %attempt.url,
                %reason,
                "logo failed to load, showing monogram"
            );
            self.state.send_if_modified(|state| state.attempted_url.take().is_some());
        }
        self.phase = AttemptPhase::Settled(outcome);
        Ok(())
    }

    pub fn render(&self) -> String {
        let state = self.state.borrow();
        match (self.variant, state.attempted_url.as_deref()) {
            (LogoVariant::Mark { size }, None) => self.brand.monogram.render(size, ""),
            (LogoVariant::Mark { size }, Some(url)) => format!(
                r#"<template>{}</template><div data-logo class="{}" style="width: {size}px; height: {size}px"><img src="{}" alt="{} logo" class="h-full w-full object-contain" style="filter: saturate(1.08) contrast(1.06) brightness(1.03)" onerror="{}"></div>"#,
                self.brand.monogram.render(size, ""),
                cn(&[
                    "relative inline-grid place-items-center rounded-2xl",
                    "bg-white/90 border border-purple-200 shadow-sm overflow-hidden",
                ]),
                escape(url),
                escape(&self.brand.name),
                ONERROR_FALLBACK
            ),
            (LogoVariant::Showcase { size }, url) => self.render_showcase(size, url),
        }
    }

    fn render_showcase(&self, size: u32, url: Option<&str>) -> String {
        let fallback = format!(
            r#"<div class="w-full max-w-[22rem] mx-auto p-10">{}</div>"#,
            self.brand
                .monogram
                .render(size, "rounded-[28px] w-full h-[10rem] grid place-items-center")
        );
        let body = match url {
            Some(url) => format!(
                r#"<template>{}</template><img data-logo src="{}" alt="{} professional logo" class="w-full h-full max-w-[22rem] mx-auto p-4 object-contain" style="filter: saturate(1.05) contrast(1.05)" onerror="{}">"#,
                fallback,
                escape(url),
                escape(&self.brand.name),
                ONERROR_FALLBACK
            ),
            None => fallback,
        };

        format!(
            concat!(
                r#"<div class="relative">"#,
                r#"<div class="absolute -inset-6 rounded-[28px] bg-gradient-to-br from-[#C850C0]/30 via-[#7B3FB3]/20 to-transparent blur-2xl" aria-hidden="true"></div>"#,
                r#"<div class="relative rounded-[28px] bg-white border border-purple-200 shadow-xl overflow-hidden">"#,
                r#"<div class="bg-[radial-gradient(ellipse_at_center,rgba(255,255,255,1)_0%,rgba(243,235,249,1)_45%,rgba(236,225,247,1)_100%)]">{}</div>"#,
                r#"<div class="border-t border-purple-100 bg-purple-50/60 px-4 py-2 text-center text-xs text-purple-600">{} • {}</div>"#,
                "</div></div>"
            ),
            body,
            escape(&self.brand.name),
            escape(&self.brand.tagline)
        )
    }

    pub fn report(&self) -> LogoReport {
        let state = self.state.borrow();
        LogoReport {
            instance: self.id.clone(),
            variant: self.variant.name().to_string(),
            attempted_url: state.attempted_url.clone(),
            fell_back: state.attempted_url.is_none(),
            load: self.load_outcome().cloned(),
        }
    }
}
