//! Submission URL validation and landing-page base derivation.

use axum::http::{HeaderMap, header};
use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Errors rejected for a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionUrlError {
    #[error("Valid video URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are supported")]
    UnsupportedScheme,
}

/// Validates a submitted video URL.
///
/// Accepts only non-empty, syntactically valid absolute `http`/`https` URLs.
/// Platform support is not checked here; that belongs to the resolver.
pub fn validate_submission_url(input: &str) -> Result<Url, SubmissionUrlError> {
    if input.trim().is_empty() {
        return Err(SubmissionUrlError::Empty);
    }

    let url = Url::parse(input).map_err(|e| SubmissionUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(SubmissionUrlError::UnsupportedScheme),
    }
}

/// Derives the landing-page base URL (`scheme://host[:port]`) from request
/// headers.
///
/// The host comes from the `Host` header. The scheme is `https` when a
/// trusted proxy set `X-Forwarded-Proto: https`, otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn landing_base_from_headers(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|&proto| proto == "https")
        .unwrap_or("http");

    Ok(format!("{scheme}://{host}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_validate_accepts_https() {
        let url = validate_submission_url("https://www.youtube.com/watch?v=abc").unwrap();
        assert_eq!(url.host_str(), Some("www.youtube.com"));
    }

    #[test]
    fn test_validate_accepts_http() {
        assert!(validate_submission_url("http://youtu.be/abc").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let result = validate_submission_url("");
        assert!(matches!(result, Err(SubmissionUrlError::Empty)));
    }

    #[test]
    fn test_validate_rejects_whitespace_only() {
        assert!(matches!(
            validate_submission_url("   "),
            Err(SubmissionUrlError::Empty)
        ));
    }

    #[test]
    fn test_validate_rejects_not_a_url() {
        let result = validate_submission_url("not-a-url");
        assert!(matches!(result, Err(SubmissionUrlError::InvalidFormat(_))));
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        assert!(validate_submission_url("/watch?v=abc").is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        assert!(matches!(
            validate_submission_url("ftp://example.com/video"),
            Err(SubmissionUrlError::UnsupportedScheme)
        ));
        assert!(matches!(
            validate_submission_url("javascript:alert(1)"),
            Err(SubmissionUrlError::UnsupportedScheme)
        ));
    }

    #[test]
    fn test_landing_base_uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com:3000"));

        let base = landing_base_from_headers(&headers).unwrap();
        assert_eq!(base, "http://example.com:3000");
    }

    #[test]
    fn test_landing_base_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("vidlink.example"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        let base = landing_base_from_headers(&headers).unwrap();
        assert_eq!(base, "https://vidlink.example");
    }

    #[test]
    fn test_landing_base_ignores_unexpected_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("vidlink.example"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("gopher"));

        let base = landing_base_from_headers(&headers).unwrap();
        assert_eq!(base, "http://vidlink.example");
    }

    #[test]
    fn test_landing_base_missing_host() {
        let headers = HeaderMap::new();
        assert!(landing_base_from_headers(&headers).is_err());
    }
}
