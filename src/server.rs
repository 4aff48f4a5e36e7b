//! HTTP server initialization and runtime setup.
//!
//! Wires the registry, resolver, shortener, and services together and runs
//! the Axum server.

use crate::application::services::{DownloadService, LinkService};
use crate::config::Config;
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::infrastructure::resolver::StubVideoResolver;
use crate::infrastructure::shortener::ShrinkMeClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Demo key sent upstream when no real API key is configured. The call fails
/// and the fail-open fallback kicks in.
const DEMO_API_KEY: &str = "demo_key";

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the outbound HTTP client cannot be built, the listen
/// address is invalid, the bind fails, or a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.shortener_timeout_seconds))
        .build()?;

    let registry = Arc::new(InMemoryLinkRepository::new());

    let shortener_configured = config.shrinkme_api_key.is_some();
    let shortener = Arc::new(ShrinkMeClient::new(
        http_client,
        config.shrinkme_api_url.clone(),
        config
            .shrinkme_api_key
            .clone()
            .unwrap_or_else(|| DEMO_API_KEY.to_string()),
        config.shortener_fail_open,
    ));

    let resolver = Arc::new(StubVideoResolver::new(Duration::from_millis(
        config.resolver_delay_ms,
    )));

    let links = Arc::new(LinkService::new(registry.clone()));
    let downloads = Arc::new(DownloadService::new(
        resolver,
        shortener.clone(),
        links.clone(),
    ));

    let state = AppState {
        downloads,
        links,
        registry,
        shortener,
        public_base_url: config.public_base_url.clone(),
        shortener_configured,
        shortener_fail_open: config.shortener_fail_open,
        ping_message: config.ping_message.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
