//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`VideoInfo`] - Resolved video metadata
//! - [`LinkRecord`] - A stored link with its view counter
//! - [`NewLinkRecord`] - Input data for creating a record

pub mod link;
pub mod video;

pub use link::{LinkRecord, NewLinkRecord};
pub use video::VideoInfo;
