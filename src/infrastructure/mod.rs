//! Infrastructure layer for storage and external integrations.
//!
//! Implements interfaces defined by the domain layer and wraps external
//! collaborators.
//!
//! # Modules
//!
//! - [`memory`] - In-memory link registry
//! - [`resolver`] - Video metadata resolution (stubbed extraction backend)
//! - [`shortener`] - ShrinkMe URL shortening client

pub mod memory;
pub mod resolver;
pub mod shortener;
