//! HTTP request handlers for API endpoints.

pub mod download;
pub mod health;
pub mod link;
pub mod ping;
pub mod shorten;

pub use download::download_handler;
pub use health::health_handler;
pub use link::link_handler;
pub use ping::ping_handler;
pub use shorten::shorten_handler;
