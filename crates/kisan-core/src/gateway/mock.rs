//! Mock Lead Gateway
//!
//! Records every POST instead of sending it. For tests and offline demos.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LeadGateway, ServerReply};
use crate::config::ApiConfig;
use crate::error::{Result, SiteError};
use crate::forms::{Attachment, CallbackForm, EnrollSubmission};

/// What the mock answers with
#[derive(Clone, Debug)]
pub enum MockResponse {
    Accept(serde_json::Value),
    Reject { status: u16, message: Option<String> },
    Unreachable,
}

/// Body of a recorded request
#[derive(Clone, Debug, PartialEq)]
pub enum PostBody {
    Json(serde_json::Value),
    Multipart {
        fields: Vec<(String, String)>,
        files: Vec<(String, Attachment)>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPost {
    pub url: String,
    pub body: PostBody,
}

pub struct MockLeadGateway {
    config: ApiConfig,
    response: MockResponse,
    posts: Mutex<Vec<RecordedPost>>,
}

impl Default for MockLeadGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLeadGateway {
    /// Accepts everything with `{"message": "ok"}`
    pub fn new() -> Self {
        Self::with_response(MockResponse::Accept(serde_json::json!({ "message": "ok" })))
    }

    pub fn with_response(response: MockResponse) -> Self {
        Self {
            config: ApiConfig::default(),
            response,
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Everything posted so far, oldest first
    pub fn posts(&self) -> Vec<RecordedPost> {
        self.posts.lock().map(|posts| posts.clone()).unwrap_or_default()
    }

    fn record(&self, url: String, body: PostBody) -> Result<ServerReply> {
        if let Ok(mut posts) = self.posts.lock() {
            posts.push(RecordedPost { url, body });
        }

        match &self.response {
            MockResponse::Accept(body) => Ok(ServerReply {
                status: 200,
                body: body.clone(),
            }),
            MockResponse::Reject { status, message } => Err(SiteError::Server {
                status: *status,
                message: message.clone(),
            }),
            MockResponse::Unreachable => Err(SiteError::Unreachable("mock backend offline".into())),
        }
    }
}

#[async_trait(?Send)]
impl LeadGateway for MockLeadGateway {
    async fn post_callback(&self, form: &CallbackForm) -> Result<ServerReply> {
        let body = PostBody::Json(serde_json::to_value(form)?);
        self.record(self.config.callback_url(), body)
    }

    async fn post_enrollment(&self, submission: &EnrollSubmission) -> Result<ServerReply> {
        let body = match submission {
            EnrollSubmission::Json(payload) => PostBody::Json(serde_json::to_value(payload)?),
            EnrollSubmission::Multipart { files, .. } => PostBody::Multipart {
                fields: submission.text_fields()?,
                files: files
                    .iter()
                    .map(|(name, file)| ((*name).to_string(), file.clone()))
                    .collect(),
            },
        };
        self.record(self.config.enroll_url(), body)
    }
}
