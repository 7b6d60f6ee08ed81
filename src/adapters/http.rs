use crate::domain::model::{LoadFailure, LoadOutcome};
use crate::domain::ports::ImageLoader;
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches a logo the way a browser would before displaying it.
///
/// A load counts as successful only for a 2xx response with an `image/*`
/// content type and a non-empty body. Relative URLs are resolved against
/// `base_url`; without one they cannot be observed at build time and are
/// reported as [`LoadOutcome::Deferred`].
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: Client,
    base_url: Option<Url>,
}

impl HttpImageLoader {
    pub fn new(timeout: Option<Duration>, base_url: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = match base_url {
            Some(base) => Some(Url::parse(base).map_err(|e| SiteError::InvalidConfigValueError {
                field: "probe.base_url".to_string(),
                value: base.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?),
            None => None,
        };

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn absolute(&self, url: &str) -> Option<Url> {
        match Url::parse(url) {
            Ok(absolute) => Some(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                self.base_url.as_ref().and_then(|base| base.join(url).ok())
            }
            Err(_) => None,
        }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, url: &str) -> LoadOutcome {
        let Some(target) = self.absolute(url) else {
            if matches!(Url::parse(url), Err(url::ParseError::RelativeUrlWithoutBase)) {
                tracing::debug!("relative logo URL {} left for the browser", url);
                return LoadOutcome::Deferred;
            }
            return LoadOutcome::failed(LoadFailure::Network(format!("unusable URL: {}", url)));
        };

        if !matches!(target.scheme(), "http" | "https") {
            tracing::debug!("logo URL scheme {} cannot be probed", target.scheme());
            return LoadOutcome::Deferred;
        }

        tracing::debug!("Making logo request to: {}", target);
        let response = match self.client.get(target).send().await {
            Ok(response) => response,
            Err(e) => return LoadOutcome::failed(LoadFailure::Network(e.to_string())),
        };

        tracing::debug!("Logo response status: {}", response.status());
        if !response.status().is_success() {
            return LoadOutcome::failed(LoadFailure::Status(response.status().as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if !content_type
            .as_deref()
            .is_some_and(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
        {
            return LoadOutcome::failed(LoadFailure::NotAnImage(content_type));
        }

        match response.bytes().await {
            Ok(body) if body.is_empty() => LoadOutcome::failed(LoadFailure::EmptyBody),
            Ok(_) => LoadOutcome::Loaded,
            Err(e) => LoadOutcome::failed(LoadFailure::Network(e.to_string())),
        }
    }
}
