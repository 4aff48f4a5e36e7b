//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`platform`] - Allow-list of supported video platforms
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business logic lives in [`crate::application::services`].

pub mod entities;
pub mod platform;
pub mod repositories;
