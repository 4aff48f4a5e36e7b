//! DTO for the ping endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub message: String,
}
