//! Lead Forms
//!
//! Field state for the callback, enrollment and quick-enroll dialog forms.
//! Each form can be updated by the wire name of a field, the way an input's
//! `name` attribute drives its change handler.

mod callback;
mod dialog;
mod enroll;

pub use callback::{CallbackForm, CALLBACK_TIME_OPTIONS, PLAN_INTEREST_OPTIONS};
pub use dialog::{EnrollDialogForm, FPC_OPTIONS};
pub use enroll::{EnrollForm, EnrollPayload, EnrollSubmission, AADHAAR_CARD_PART, DOCUMENT_PART};

/// File types accepted by every upload input
pub const ACCEPTED_UPLOADS: &str = ".pdf,.jpg,.jpeg,.png";

/// One `<option>` of a select input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub(crate) const fn option(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

/// Label for a select value, if it is one of the options
pub fn option_label(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

/// A picked file, read into memory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_type = content_type.into();
        Self {
            file_name: file_name.into(),
            content_type: if content_type.is_empty() {
                "application/octet-stream".into()
            } else {
                content_type
            },
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
