//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{DownloadService, LinkService};
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::infrastructure::shortener::Shortener;

#[derive(Clone)]
pub struct AppState {
    pub downloads: Arc<DownloadService>,
    pub links: Arc<LinkService>,
    /// Concrete registry handle, kept for the health endpoint's record count.
    /// The same instance backs `links` behind the repository trait.
    pub registry: Arc<InMemoryLinkRepository>,
    pub shortener: Arc<dyn Shortener>,
    /// Overrides the landing-page base derived from request headers.
    pub public_base_url: Option<String>,
    /// Whether a real ShrinkMe API key is configured (health reporting only).
    pub shortener_configured: bool,
    /// Whether the shortener masks upstream failures with fallback URLs.
    pub shortener_fail_open: bool,
    pub ping_message: String,
}
