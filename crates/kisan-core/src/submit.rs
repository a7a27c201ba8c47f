//! Lead submission
//!
//! One POST per submit. No retries, no double-submit guard: a failure is
//! returned to the page, which keeps its form state so the farmer can try
//! again by hand.

use crate::error::Result;
use crate::forms::{CallbackForm, EnrollForm};
use crate::gateway::{LeadGateway, ServerReply};

/// Alert shown once the backend accepts an enrollment
pub const ENROLL_SUCCESS_MESSAGE: &str =
    "Enrollment successful! Your data has been sent to the backend.";

/// Accepted callback request
#[derive(Clone, Debug, PartialEq)]
pub struct CallbackReceipt {
    /// Name for the thank-you message
    pub farmer_name: String,
    pub reply: ServerReply,
}

/// Validate and post a callback request
pub async fn send_callback<G>(gateway: &G, form: &CallbackForm) -> Result<CallbackReceipt>
where
    G: LeadGateway + ?Sized,
{
    form.validate()?;

    let reply = gateway.post_callback(form).await.inspect_err(|e| {
        tracing::error!(error = %e, "Callback submission failed");
    })?;

    tracing::info!(
        farmer = %form.farmer_name,
        status = reply.status,
        "Callback request submitted"
    );

    Ok(CallbackReceipt {
        farmer_name: form.farmer_name.clone(),
        reply,
    })
}

/// Validate, check consent and post an enrollment.
///
/// Nothing is sent when consent is missing.
pub async fn send_enrollment<G>(gateway: &G, form: &EnrollForm) -> Result<ServerReply>
where
    G: LeadGateway + ?Sized,
{
    let submission = form.submission()?;
    tracing::debug!(
        plan = form.plan_name(),
        multipart = submission.is_multipart(),
        "Submitting enrollment"
    );

    let reply = gateway.post_enrollment(&submission).await.inspect_err(|e| {
        tracing::error!(error = %e, "Enrollment submission failed");
    })?;

    tracing::info!(plan = form.plan_name(), status = reply.status, "Enrollment submitted");
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PackageKey;
    use crate::error::SiteError;
    use crate::forms::Attachment;
    use crate::gateway::{MockLeadGateway, MockResponse, PostBody};

    fn callback_form() -> CallbackForm {
        let mut form = CallbackForm::default();
        form.set("farmerName", "Dinesh Yadav").unwrap();
        form.set("phoneNumber", "9834414542").unwrap();
        form.set("planInterestedIn", "Premium").unwrap();
        form.set("districtVillage", "Barabanki").unwrap();
        form.set("preferredCallbackTime", "morning").unwrap();
        form.set("messageQuery", "Organic transition").unwrap();
        form
    }

    fn enroll_form() -> EnrollForm {
        let mut form = EnrollForm::for_package(PackageKey::Premium);
        form.set("fullName", "Meena Patel").unwrap();
        form.set("phoneNumber", "9876543210").unwrap();
        form.set("email", "meena@example.com").unwrap();
        form.set("districtVillage", "Sitapur").unwrap();
        form.set_checked("consent", true).unwrap();
        form
    }

    #[tokio::test]
    async fn test_callback_posts_once_with_field_values() {
        let gateway = MockLeadGateway::new();
        let form = callback_form();

        let receipt = send_callback(&gateway, &form).await.unwrap();
        assert_eq!(receipt.farmer_name, "Dinesh Yadav");

        let posts = gateway.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].url, gateway.config().callback_url());

        let PostBody::Json(body) = &posts[0].body else {
            panic!("callback must be JSON");
        };
        assert_eq!(body["farmerName"], "Dinesh Yadav");
        assert_eq!(body["phoneNumber"], "9834414542");
        assert_eq!(body["planInterestedIn"], "Premium");
        assert_eq!(body["districtVillage"], "Barabanki");
        assert_eq!(body["preferredCallbackTime"], "morning");
        assert_eq!(body["messageQuery"], "Organic transition");
    }

    #[tokio::test]
    async fn test_invalid_callback_is_not_posted() {
        let gateway = MockLeadGateway::new();
        let mut form = callback_form();
        form.set("phoneNumber", "12345").unwrap();

        let result = send_callback(&gateway, &form).await;
        assert!(matches!(result, Err(SiteError::Validation { .. })));
        assert!(gateway.posts().is_empty());
    }

    #[tokio::test]
    async fn test_failed_callback_surfaces_error() {
        let gateway = MockLeadGateway::with_response(MockResponse::Unreachable);
        let result = send_callback(&gateway, &callback_form()).await;
        assert!(matches!(result, Err(SiteError::Unreachable(_))));
        assert_eq!(gateway.posts().len(), 1);
    }

    #[tokio::test]
    async fn test_enrollment_without_file_is_json() {
        let gateway = MockLeadGateway::new();
        send_enrollment(&gateway, &enroll_form()).await.unwrap();

        let posts = gateway.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].url, gateway.config().enroll_url());
        let PostBody::Json(body) = &posts[0].body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["fullName"], "Meena Patel");
        assert_eq!(body["planName"], "Premium");
        assert_eq!(body["planPrice"], "₹4800");
        assert_eq!(body["agreedToTerms"], true);
        assert_eq!(body["documentEnabled"], false);
    }

    #[tokio::test]
    async fn test_enrollment_with_file_is_multipart() {
        let gateway = MockLeadGateway::new();
        let mut form = enroll_form();
        form.set_checked("enable712", true).unwrap();
        let document = Attachment::new("712.png", "image/png", vec![0x89, b'P', b'N', b'G']);
        form.attach("upload712Document", Some(document.clone())).unwrap();

        send_enrollment(&gateway, &form).await.unwrap();

        let posts = gateway.posts();
        assert_eq!(posts.len(), 1);
        let PostBody::Multipart { fields, files } = &posts[0].body else {
            panic!("expected multipart body");
        };
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "documentFile");
        assert_eq!(files[0].1, document);
        assert!(fields.contains(&("fullName".to_string(), "Meena Patel".to_string())));
        assert!(fields.contains(&("documentEnabled".to_string(), "true".to_string())));
    }

    #[tokio::test]
    async fn test_enrollment_without_consent_sends_nothing() {
        let gateway = MockLeadGateway::new();
        let mut form = enroll_form();
        form.set_checked("consent", false).unwrap();

        let err = send_enrollment(&gateway, &form).await.unwrap_err();
        assert_eq!(err.user_message(), "Please agree to the terms and conditions.");
        assert!(gateway.posts().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_enrollment_keeps_form() {
        let gateway = MockLeadGateway::with_response(MockResponse::Reject {
            status: 500,
            message: None,
        });
        let form = enroll_form();
        let before = form.clone();

        let err = send_enrollment(&gateway, &form).await.unwrap_err();
        assert_eq!(err.user_message(), "Error: Something went wrong on the server.");
        assert_eq!(form, before);
    }
}
