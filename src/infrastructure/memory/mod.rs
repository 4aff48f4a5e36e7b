//! In-memory persistence for the link registry.

mod link_repository;

pub use link_repository::InMemoryLinkRepository;
