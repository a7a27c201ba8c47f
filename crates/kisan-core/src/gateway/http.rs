//! reqwest-backed gateway

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{error_message, LeadGateway, ServerReply};
use crate::config::ApiConfig;
use crate::error::{Result, SiteError};
use crate::forms::{CallbackForm, EnrollSubmission};

/// Talks to the lead backend over HTTP
#[derive(Clone, Debug)]
pub struct HttpLeadGateway {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpLeadGateway {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<ServerReply> {
        let response = request
            .send()
            .await
            .map_err(|e| SiteError::Unreachable(e.to_string()))?;

        let status = response.status();
        // Bodies are optional and not always JSON
        let body: serde_json::Value = response.json().await.unwrap_or_default();

        if status.is_success() {
            Ok(ServerReply {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(SiteError::Server {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

impl Default for HttpLeadGateway {
    fn default() -> Self {
        Self::new(ApiConfig::from_build_env())
    }
}

#[async_trait(?Send)]
impl LeadGateway for HttpLeadGateway {
    async fn post_callback(&self, form: &CallbackForm) -> Result<ServerReply> {
        let request = self.client.post(self.config.callback_url()).json(form);
        Self::send(request).await
    }

    async fn post_enrollment(&self, submission: &EnrollSubmission) -> Result<ServerReply> {
        let url = self.config.enroll_url();
        let request = match submission {
            EnrollSubmission::Json(payload) => self.client.post(url).json(payload),
            EnrollSubmission::Multipart { .. } => {
                self.client.post(url).multipart(multipart_form(submission)?)
            }
        };
        Self::send(request).await
    }
}

fn multipart_form(submission: &EnrollSubmission) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in submission.text_fields()? {
        form = form.text(name, value);
    }
    for (name, attachment) in submission.files() {
        let part = Part::bytes(attachment.bytes.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(&attachment.content_type)
            .map_err(|e| SiteError::Request(e.to_string()))?;
        form = form.part(*name, part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::Multipart,
        http::StatusCode,
        response::IntoResponse,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::catalog::PackageKey;
    use crate::forms::{Attachment, EnrollForm};

    /// Run `app` on an ephemeral local port and point a gateway at it
    async fn serve(app: Router) -> HttpLeadGateway {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        HttpLeadGateway::new(ApiConfig::new(format!("http://{addr}")))
    }

    fn callback_form() -> CallbackForm {
        let mut form = CallbackForm::default();
        form.set("farmerName", "Ravi Kumar").unwrap();
        form.set("phoneNumber", "9876543210").unwrap();
        form
    }

    fn enroll_form() -> EnrollForm {
        let mut form = EnrollForm::for_package(PackageKey::Basic);
        form.set("fullName", "Sita Devi").unwrap();
        form.set("phoneNumber", "9876543210").unwrap();
        form.set("districtVillage", "Pune / Wagholi").unwrap();
        form.set_checked("consent", true).unwrap();
        form
    }

    async fn echo_json(Json(body): Json<Value>) -> impl IntoResponse {
        (StatusCode::CREATED, Json(json!({ "message": "ok", "received": body })))
    }

    async fn echo_parts(mut multipart: Multipart) -> Json<Value> {
        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().map(str::to_string);
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.unwrap();
            parts.push(json!({
                "name": name,
                "fileName": file_name,
                "contentType": content_type,
                "text": String::from_utf8_lossy(&bytes),
            }));
        }
        Json(json!({ "parts": parts }))
    }

    #[tokio::test]
    async fn test_callback_posts_json() {
        let gateway = serve(Router::new().route("/api/callback", post(echo_json))).await;

        let reply = gateway.post_callback(&callback_form()).await.unwrap();
        assert_eq!(reply.status, 201);
        assert_eq!(reply.message(), Some("ok"));
        assert_eq!(reply.body["received"]["farmerName"], "Ravi Kumar");
        assert_eq!(reply.body["received"]["phoneNumber"], "9876543210");
        assert_eq!(reply.body["received"]["messageQuery"], "");
    }

    #[tokio::test]
    async fn test_enrollment_without_file_posts_json() {
        let gateway = serve(Router::new().route("/api/enroll", post(echo_json))).await;
        let form = enroll_form();
        let submission = form.submission().unwrap();
        assert!(!submission.is_multipart());

        let reply = gateway.post_enrollment(&submission).await.unwrap();
        assert_eq!(reply.body["received"]["fullName"], "Sita Devi");
        assert_eq!(reply.body["received"]["planPrice"], form.plan_price());
        assert_eq!(reply.body["received"]["agreedToTerms"], true);
    }

    #[tokio::test]
    async fn test_enrollment_multipart_parts() {
        let gateway = serve(Router::new().route("/api/enroll", post(echo_parts))).await;
        let mut form = enroll_form();
        form.set_checked("enable712", true).unwrap();
        form.attach(
            "upload712Document",
            Some(Attachment::new("satbara.pdf", "application/pdf", b"%PDF-1.4".to_vec())),
        )
        .unwrap();
        form.set_checked("enableAadhar", true).unwrap();
        form.attach(
            "aadhaarCard",
            Some(Attachment::new("aadhaar.png", "image/png", b"PNG".to_vec())),
        )
        .unwrap();

        let reply = gateway.post_enrollment(&form.submission().unwrap()).await.unwrap();
        let parts = reply.body["parts"].as_array().unwrap();
        let part = |name: &str| {
            parts
                .iter()
                .find(|p| p["name"] == name)
                .unwrap_or_else(|| panic!("missing part {name}"))
        };

        assert_eq!(parts.len(), 16);
        assert_eq!(part("fullName")["text"], "Sita Devi");
        assert_eq!(part("fullName")["fileName"], Value::Null);
        assert_eq!(part("documentEnabled")["text"], "true");

        let document = part("documentFile");
        assert_eq!(document["fileName"], "satbara.pdf");
        assert_eq!(document["contentType"], "application/pdf");
        assert_eq!(document["text"], "%PDF-1.4");

        let card = part("aadhaarFile");
        assert_eq!(card["fileName"], "aadhaar.png");
        assert_eq!(card["contentType"], "image/png");
        assert_eq!(card["text"], "PNG");
    }

    #[tokio::test]
    async fn test_rejection_reads_error_body() {
        let app = Router::new().route(
            "/api/callback",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "Invalid phone", "message": "Bad request" })),
                )
            }),
        );
        let gateway = serve(app).await;

        let err = gateway.post_callback(&callback_form()).await.unwrap_err();
        assert!(matches!(
            &err,
            SiteError::Server { status: 422, message: Some(m) } if m == "Invalid phone"
        ));
        assert_eq!(err.user_message(), "Error: Invalid phone");
    }

    #[tokio::test]
    async fn test_rejection_without_json_body() {
        let app = Router::new().route(
            "/api/callback",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let gateway = serve(app).await;

        let err = gateway.post_callback(&callback_form()).await.unwrap_err();
        assert!(matches!(err, SiteError::Server { status: 500, message: None }));
        assert_eq!(err.user_message(), "Error: Something went wrong on the server.");
    }

    #[tokio::test]
    async fn test_success_with_non_json_body() {
        let app = Router::new().route("/api/callback", post(|| async { "thanks" }));
        let gateway = serve(app).await;

        let reply = gateway.post_callback(&callback_form()).await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, Value::Null);
        assert_eq!(reply.message(), None);
    }

    #[tokio::test]
    async fn test_closed_port_is_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = HttpLeadGateway::new(ApiConfig::new(format!("http://{addr}")));
        let err = gateway.post_callback(&callback_form()).await.unwrap_err();
        assert!(matches!(err, SiteError::Unreachable(_)));
        assert!(err.user_message().starts_with("Error: No response from server."));
    }
}
