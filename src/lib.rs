//! # vidlink
//!
//! Backend for a video download front end: accepts a social-media video URL,
//! resolves (stubbed) video metadata, mints a shareable link id, produces a
//! monetized short URL via the ShrinkMe API, and serves link records to a
//! countdown-gated landing page while counting views.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository traits,
//!   and the platform allow-list
//! - **Application Layer** ([`application`]) - Business logic and service
//!   orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry, stub
//!   video resolver, and the ShrinkMe client
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Scope
//!
//! Storage is an in-memory map for the process lifetime; there is no
//! persistence, authentication, or rate limiting, and video extraction is a
//! stub behind [`infrastructure::resolver::VideoResolver`] so a real backend
//! can be substituted.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DownloadService, LinkService};
    pub use crate::domain::entities::{LinkRecord, NewLinkRecord, VideoInfo};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryLinkRepository;
    pub use crate::infrastructure::resolver::{StubVideoResolver, VideoResolver};
    pub use crate::infrastructure::shortener::{ShortenOutcome, ShortenStatus, Shortener};
    pub use crate::state::AppState;
}
