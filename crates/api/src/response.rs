//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` acknowledgement body for mutations that
/// return no entity.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
