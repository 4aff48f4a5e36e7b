//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Wire field names are camelCase to match the
//! presentation layer's contract.

pub mod download;
pub mod health;
pub mod link;
pub mod ping;
pub mod shorten;
