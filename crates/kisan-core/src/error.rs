//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors raised while building or submitting a lead
#[derive(Error, Debug)]
pub enum SiteError {
    /// A form field failed its input constraint
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// Enrollment submitted without ticking the consent box
    #[error("Terms and conditions not accepted")]
    ConsentRequired,

    /// Package key outside basic/standard/premium
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    /// Change event for a field the form does not have
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// Backend answered with a non-success status
    #[error("Server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    /// Request was sent but no response came back
    #[error("No response from server: {0}")]
    Unreachable(String),

    /// Request could not be built
    #[error("Request error: {0}")]
    Request(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Text shown to the farmer in the blocking alert
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => format!("Error: {message}"),
            Self::Server { message: None, .. } => {
                "Error: Something went wrong on the server.".into()
            }
            Self::Unreachable(_) => {
                "Error: No response from server. Please ensure the backend is running and accessible."
                    .into()
            }
            Self::ConsentRequired => "Please agree to the terms and conditions.".into(),
            Self::Validation { field, reason } => format!("Please check {field}: {reason}"),
            _ => "Failed to enroll. Please try again. (Check console for details)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_surfaced() {
        let err = SiteError::Server {
            status: 400,
            message: Some("Phone number already registered".into()),
        };
        assert_eq!(err.user_message(), "Error: Phone number already registered");

        let err = SiteError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Error: Something went wrong on the server.");
    }

    #[test]
    fn test_unreachable_message() {
        let err = SiteError::Unreachable("connection refused".into());
        assert!(err.user_message().contains("No response from server"));
    }
}
