//! Business logic services for the application layer.

pub mod download_service;
pub mod link_service;

pub use download_service::{DownloadService, SubmitOutcome};
pub use link_service::LinkService;
