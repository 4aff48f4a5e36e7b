//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and external collaborators. Services consume traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link registry operations
//! - [`services::download_service::DownloadService`] - Download submission orchestration

pub mod services;
