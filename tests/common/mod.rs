#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use vidlink::application::services::{DownloadService, LinkService};
use vidlink::infrastructure::memory::InMemoryLinkRepository;
use vidlink::infrastructure::resolver::StubVideoResolver;
use vidlink::infrastructure::shortener::{ShortenOutcome, Shortener};
use vidlink::state::AppState;

/// Shortener double returning a fixed URL.
pub struct StaticShortener {
    pub url: &'static str,
}

#[async_trait]
impl Shortener for StaticShortener {
    async fn shorten<'a>(&self, destination_url: &str, _alias: Option<&'a str>) -> ShortenOutcome {
        ShortenOutcome::success(self.url.to_string(), destination_url.to_string())
    }
}

/// Shortener double simulating upstream failure in fail-closed mode.
pub struct FailingShortener;

#[async_trait]
impl Shortener for FailingShortener {
    async fn shorten<'a>(&self, destination_url: &str, _alias: Option<&'a str>) -> ShortenOutcome {
        ShortenOutcome::failed(destination_url.to_string())
    }
}

/// Shortener double recording every call for assertions.
#[derive(Default)]
pub struct RecordingShortener {
    pub calls: Mutex<Vec<(String, Option<String>)>>,
}

#[async_trait]
impl Shortener for RecordingShortener {
    async fn shorten<'a>(&self, destination_url: &str, alias: Option<&'a str>) -> ShortenOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((destination_url.to_string(), alias.map(str::to_string)));
        ShortenOutcome::success(
            "https://shrinkme.io/recorded".to_string(),
            destination_url.to_string(),
        )
    }
}

/// Builds an application state around an in-memory registry, a zero-delay
/// stub resolver, and the given shortener double.
pub fn create_test_state(shortener: Arc<dyn Shortener>) -> AppState {
    let registry = Arc::new(InMemoryLinkRepository::new());
    let resolver = Arc::new(StubVideoResolver::new(Duration::ZERO));

    let links = Arc::new(LinkService::new(registry.clone()));
    let downloads = Arc::new(DownloadService::new(
        resolver,
        shortener.clone(),
        links.clone(),
    ));

    AppState {
        downloads,
        links,
        registry,
        shortener,
        public_base_url: Some("http://localhost:3000".to_string()),
        shortener_configured: false,
        shortener_fail_open: true,
        ping_message: "ping".to_string(),
    }
}

pub fn default_test_state() -> AppState {
    create_test_state(Arc::new(StaticShortener {
        url: "https://shrinkme.io/test",
    }))
}
