//! Utility functions for token generation and request URL handling.
//!
//! - [`token`] - Link id and fallback token generation
//! - [`request_url`] - Submission URL validation and landing-page base derivation

pub mod request_url;
pub mod token;
