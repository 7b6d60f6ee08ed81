use async_trait::async_trait;
use havenmaids_site::domain::model::{LoadFailure, LoadOutcome};
use havenmaids_site::domain::ports::{ImageLoader, LogoSizes};
use havenmaids_site::logo::{Brand, LogoSet, LogoSource, Monogram};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays scripted outcomes in call order and records every requested URL.
#[derive(Clone, Default)]
struct ScriptedLoader {
    outcomes: Arc<Mutex<VecDeque<LoadOutcome>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedLoader {
    fn new(outcomes: Vec<LoadOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageLoader for ScriptedLoader {
    async fn load(&self, url: &str) -> LoadOutcome {
        self.requests.lock().unwrap().push(url.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(LoadOutcome::Loaded)
    }
}

fn mount(source: LogoSource) -> LogoSet {
    LogoSet::mount(source, LogoSizes::default(), Brand::default())
}

#[tokio::test]
async fn test_ambient_url_used_when_explicit_empty_and_failure_yields_monogram() {
    let source = LogoSource::resolve(Some(""), Some("https://example.com/logo.png"));
    assert_eq!(source.candidate(), Some("https://example.com/logo.png"));

    let mut logos = mount(source);
    let loader = ScriptedLoader::new(vec![LoadOutcome::failed(LoadFailure::Network(
        "connection reset".to_string(),
    ))]);

    logos.load_all(&loader).await.unwrap();

    assert_eq!(logos.header.render(), Monogram::default().render(40, ""));
    assert_eq!(loader.requests()[0], "https://example.com/logo.png");
}

#[tokio::test]
async fn test_explicit_url_ignores_ambient_entirely() {
    let source = LogoSource::resolve(
        Some("https://good.example/logo.svg"),
        Some("https://example.com/logo.png"),
    );
    let mut logos = mount(source);
    let loader = ScriptedLoader::default();

    let attempts = logos.load_all(&loader).await.unwrap();

    assert_eq!(attempts, 3);
    assert!(loader
        .requests()
        .iter()
        .all(|url| url == "https://good.example/logo.svg"));
    for instance in logos.instances() {
        assert!(!instance.is_fallback());
        assert!(instance.render().contains("https://good.example/logo.svg"));
        assert!(!instance.render().contains("https://example.com/logo.png"));
    }
}

#[tokio::test]
async fn test_absent_source_makes_zero_attempts() {
    let mut logos = mount(LogoSource::resolve(None, None));
    let loader = ScriptedLoader::default();

    let attempts = logos.load_all(&loader).await.unwrap();

    assert_eq!(attempts, 0);
    assert!(loader.requests().is_empty());
    assert_eq!(logos.header.render(), Monogram::default().render(40, ""));
    assert_eq!(logos.footer.render(), Monogram::default().render(48, ""));
}

#[tokio::test]
async fn test_failed_instance_never_retries() {
    let mut logos = mount(LogoSource::Explicit("https://example.com/broken.png".to_string()));
    let loader = ScriptedLoader::new(vec![
        LoadOutcome::failed(LoadFailure::Status(404)),
        LoadOutcome::failed(LoadFailure::Status(404)),
        LoadOutcome::failed(LoadFailure::Status(404)),
    ]);

    assert_eq!(logos.load_all(&loader).await.unwrap(), 3);
    assert_eq!(logos.load_all(&loader).await.unwrap(), 0);
    assert_eq!(loader.requests().len(), 3);
    assert!(logos.instances().iter().all(|i| i.is_fallback()));
}

#[tokio::test]
async fn test_instances_fail_over_independently() {
    let mut logos = mount(LogoSource::Explicit("https://cdn.example/logo.png".to_string()));
    // header fails, hero and footer load
    let loader = ScriptedLoader::new(vec![
        LoadOutcome::failed(LoadFailure::NotAnImage(Some("text/html".to_string()))),
        LoadOutcome::Loaded,
        LoadOutcome::Loaded,
    ]);

    logos.load_all(&loader).await.unwrap();

    assert!(logos.header.is_fallback());
    assert!(!logos.showcase.is_fallback());
    assert!(!logos.footer.is_fallback());
    assert_eq!(logos.header.render(), Monogram::default().render(40, ""));
    assert!(logos
        .showcase
        .render()
        .contains(r#"src="https://cdn.example/logo.png""#));

    let reports = logos.reports();
    assert!(reports[0].fell_back);
    assert!(!reports[1].fell_back);
    assert_eq!(reports[1].attempted_url.as_deref(), Some("https://cdn.example/logo.png"));
}

#[tokio::test]
async fn test_deferred_load_keeps_image_for_browser() {
    let mut logos = mount(LogoSource::Ambient("assets/logo.png".to_string()));
    let loader = ScriptedLoader::new(vec![LoadOutcome::Deferred; 3]);

    logos.load_all(&loader).await.unwrap();

    for instance in logos.instances() {
        assert!(!instance.is_fallback());
        assert_eq!(instance.load_outcome(), Some(&LoadOutcome::Deferred));
        assert!(instance.render().contains("onerror="));
    }
}
