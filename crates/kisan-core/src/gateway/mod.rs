//! Lead API Gateway
//!
//! The one seam between the site and the outside world: two POSTs to the
//! lead backend.

mod http;
mod mock;

pub use http::HttpLeadGateway;
pub use mock::{MockLeadGateway, MockResponse, PostBody, RecordedPost};

use async_trait::async_trait;

use crate::error::Result;
use crate::forms::{CallbackForm, EnrollSubmission};

/// Lead backend client (Strategy pattern)
///
/// Futures are not `Send`: the browser implementation runs on the single
/// WASM thread.
#[async_trait(?Send)]
pub trait LeadGateway {
    /// `POST /api/callback`
    async fn post_callback(&self, form: &CallbackForm) -> Result<ServerReply>;

    /// `POST /api/enroll`
    async fn post_enrollment(&self, submission: &EnrollSubmission) -> Result<ServerReply>;
}

/// A successful backend response
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ServerReply {
    /// Optional `message` string in the body
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(serde_json::Value::as_str)
    }
}

/// Pull a human-readable reason out of an error body.
///
/// The backend is not contracted on a shape, so both `error` and `message`
/// are tried.
pub(crate) fn error_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_key() {
        let body = serde_json::json!({"error": "Invalid phone", "message": "Bad request"});
        assert_eq!(error_message(&body).as_deref(), Some("Invalid phone"));

        let body = serde_json::json!({"message": "Bad request"});
        assert_eq!(error_message(&body).as_deref(), Some("Bad request"));

        assert_eq!(error_message(&serde_json::Value::Null), None);
        assert_eq!(error_message(&serde_json::json!({"error": 42})), None);
    }
}
