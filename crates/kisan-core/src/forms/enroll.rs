//! Enrollment form

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{option_label, Attachment, EnrollDialogForm, FPC_OPTIONS};
use crate::catalog::PackageKey;
use crate::error::{Result, SiteError};
use crate::validate;

/// Multipart part name for the 7/12 land record
pub const DOCUMENT_PART: &str = "documentFile";

/// Multipart part name for the Aadhaar card scan
pub const AADHAAR_CARD_PART: &str = "aadhaarFile";

/// Enrollment form state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrollForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub district_village: String,
    pub plan: PackageKey,
    pub query_concern: String,

    pub aadhaar_enabled: bool,
    pub aadhaar_number: String,
    pub aadhaar_card: Option<Attachment>,

    pub document_enabled: bool,
    pub document: Option<Attachment>,

    pub consent: bool,

    // Filled in programmatically, never typed
    pub timestamp: DateTime<Utc>,
    pub internal_user_id: String,
    pub payment_method: String,
}

impl EnrollForm {
    pub fn for_package(plan: PackageKey) -> Self {
        Self {
            full_name: String::new(),
            phone_number: String::new(),
            email: String::new(),
            district_village: String::new(),
            plan,
            query_concern: String::new(),
            aadhaar_enabled: false,
            aadhaar_number: String::new(),
            aadhaar_card: None,
            document_enabled: false,
            document: None,
            consent: false,
            timestamp: Utc::now(),
            internal_user_id: format!("USER_{}", uuid::Uuid::new_v4().simple()),
            payment_method: String::new(),
        }
    }

    /// Plan name shown in the read-only plan input
    pub fn plan_name(&self) -> &'static str {
        self.plan.package().label
    }

    pub fn plan_price(&self) -> String {
        self.plan.package().price_tag()
    }

    /// Update a text field by its input name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = match name {
            "fullName" => &mut self.full_name,
            "phoneNumber" => &mut self.phone_number,
            "email" => &mut self.email,
            "districtVillage" => &mut self.district_village,
            "queryConcern" => &mut self.query_concern,
            "aadharNo" => &mut self.aadhaar_number,
            _ => return Err(SiteError::UnknownField(name.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    /// Update a checkbox by its input name
    pub fn set_checked(&mut self, name: &str, checked: bool) -> Result<()> {
        match name {
            "consent" => self.consent = checked,
            "enableAadhar" => self.aadhaar_enabled = checked,
            "enable712" => self.document_enabled = checked,
            _ => return Err(SiteError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Store or clear a picked file by its input name
    pub fn attach(&mut self, name: &str, file: Option<Attachment>) -> Result<()> {
        match name {
            "upload712Document" => self.document = file,
            "aadhaarCard" => self.aadhaar_card = file,
            _ => return Err(SiteError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Flip the Aadhaar checkbox; the typed number and card are kept
    pub fn toggle_aadhaar(&mut self) {
        self.aadhaar_enabled = !self.aadhaar_enabled;
    }

    /// Flip the 7/12 checkbox; a picked document is kept
    pub fn toggle_document(&mut self) {
        self.document_enabled = !self.document_enabled;
    }

    pub fn validate(&self) -> Result<()> {
        validate::required("fullName", &self.full_name)?;
        validate::phone("phoneNumber", &self.phone_number)?;
        validate::optional_email("email", &self.email)?;
        validate::required("districtVillage", &self.district_village)?;
        if self.aadhaar_enabled {
            validate::optional_aadhaar("aadharNo", &self.aadhaar_number)?;
        }
        Ok(())
    }

    /// Fields sent to the backend, under their backend names
    pub fn payload(&self) -> EnrollPayload {
        EnrollPayload {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            district_village: self.district_village.clone(),
            plan_name: self.plan_name().to_string(),
            query: self.query_concern.clone(),
            aadhaar_enabled: self.aadhaar_enabled,
            aadhaar_number: self.aadhaar_number.clone(),
            document_enabled: self.document_enabled,
            agreed_to_terms: self.consent,
            plan_price: self.plan_price(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            internal_user_id: self.internal_user_id.clone(),
            payment_method: self.payment_method.clone(),
        }
    }

    /// Build the request body.
    ///
    /// Any picked file switches the body to multipart, whatever its checkbox
    /// says; otherwise the payload goes out as JSON.
    pub fn submission(&self) -> Result<EnrollSubmission> {
        self.validate()?;
        if !self.consent {
            return Err(SiteError::ConsentRequired);
        }

        let mut files = Vec::new();
        if let Some(document) = &self.document {
            files.push((DOCUMENT_PART, document.clone()));
        }
        if let Some(card) = &self.aadhaar_card {
            files.push((AADHAAR_CARD_PART, card.clone()));
        }

        let payload = self.payload();
        if files.is_empty() {
            Ok(EnrollSubmission::Json(payload))
        } else {
            Ok(EnrollSubmission::Multipart { payload, files })
        }
    }

    /// Prefill from the quick-enroll dialog
    pub fn apply_draft(&mut self, draft: &EnrollDialogForm) {
        self.full_name = draft.name.trim().to_string();
        self.phone_number = national_number(&draft.mobile);
        self.district_village = [&draft.district, &draft.taluka, &draft.village]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" / ");

        let mut notes = Vec::new();
        if !draft.fpc_option.is_empty() {
            if let Some(label) = option_label(&FPC_OPTIONS, &draft.fpc_option) {
                notes.push(format!("FPC: {label}"));
            }
        }
        if !draft.farm_detail.trim().is_empty() {
            notes.push(format!("Farm: {}", draft.farm_detail.trim()));
        }
        self.query_concern = notes.join("\n");

        self.aadhaar_number = draft.aadhaar.trim().to_string();
        self.aadhaar_card = draft.aadhaar_file.clone();
        self.aadhaar_enabled = !self.aadhaar_number.is_empty() || self.aadhaar_card.is_some();

        self.document = draft.seven_twelve_file.clone();
        self.document_enabled = self.document.is_some();
    }
}

impl Default for EnrollForm {
    fn default() -> Self {
        Self::for_package(PackageKey::default())
    }
}

/// Last ten digits of a mobile number written with a country or trunk prefix
fn national_number(mobile: &str) -> String {
    let digits: String = mobile.chars().filter(char::is_ascii_digit).collect();
    let skip = digits.len().saturating_sub(10);
    digits[skip..].to_string()
}

/// Enrollment fields as the backend names them
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollPayload {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub district_village: String,
    pub plan_name: String,
    pub query: String,
    pub aadhaar_enabled: bool,
    pub aadhaar_number: String,
    pub document_enabled: bool,
    pub agreed_to_terms: bool,
    pub plan_price: String,
    pub timestamp: String,
    pub internal_user_id: String,
    pub payment_method: String,
}

/// Request body for `POST /api/enroll`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnrollSubmission {
    Json(EnrollPayload),
    Multipart {
        payload: EnrollPayload,
        files: Vec<(&'static str, Attachment)>,
    },
}

impl EnrollSubmission {
    pub fn payload(&self) -> &EnrollPayload {
        match self {
            Self::Json(payload) | Self::Multipart { payload, .. } => payload,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }

    pub fn files(&self) -> &[(&'static str, Attachment)] {
        match self {
            Self::Json(_) => &[],
            Self::Multipart { files, .. } => files,
        }
    }

    /// Payload flattened to text parts; booleans become "true"/"false"
    pub fn text_fields(&self) -> Result<Vec<(String, String)>> {
        let value = serde_json::to_value(self.payload())?;
        let serde_json::Value::Object(map) = value else {
            return Err(SiteError::Request("enrollment payload is not an object".into()));
        };
        Ok(map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EnrollForm {
        let mut form = EnrollForm::for_package(PackageKey::Standard);
        form.set("fullName", "Ramesh Kumar").unwrap();
        form.set("phoneNumber", "9876543210").unwrap();
        form.set("districtVillage", "Pune / Wagholi").unwrap();
        form.set_checked("consent", true).unwrap();
        form
    }

    fn pdf() -> Attachment {
        Attachment::new("satbara.pdf", "application/pdf", b"%PDF-1.4".to_vec())
    }

    #[test]
    fn test_plan_fields_follow_package() {
        let form = EnrollForm::for_package(PackageKey::Premium);
        assert_eq!(form.plan_name(), "Premium");
        assert_eq!(form.plan_price(), "₹4800");
        assert_eq!(EnrollForm::default().plan_name(), "Standard");
    }

    #[test]
    fn test_json_without_file() {
        let submission = filled().submission().unwrap();
        assert!(!submission.is_multipart());
        let payload = submission.payload();
        assert_eq!(payload.full_name, "Ramesh Kumar");
        assert_eq!(payload.plan_name, "Standard");
        assert_eq!(payload.plan_price, "₹2500");
        assert!(payload.agreed_to_terms);
        assert!(payload.internal_user_id.starts_with("USER_"));
    }

    #[test]
    fn test_multipart_with_file() {
        let mut form = filled();
        form.toggle_document();
        form.attach("upload712Document", Some(pdf())).unwrap();

        let submission = form.submission().unwrap();
        assert!(submission.is_multipart());
        assert_eq!(submission.files().len(), 1);
        assert_eq!(submission.files()[0].0, DOCUMENT_PART);
        assert_eq!(submission.files()[0].1.file_name, "satbara.pdf");
        assert!(submission.payload().document_enabled);
    }

    #[test]
    fn test_file_sent_after_its_box_is_unticked() {
        let mut form = filled();
        form.set_checked("enable712", true).unwrap();
        form.attach("upload712Document", Some(pdf())).unwrap();
        form.set("aadharNo", "234567890123").unwrap();
        form.set_checked("enable712", false).unwrap();

        let submission = form.submission().unwrap();
        assert!(submission.is_multipart());
        assert_eq!(submission.files().len(), 1);
        assert_eq!(submission.files()[0].0, DOCUMENT_PART);
        assert_eq!(submission.files()[0].1, pdf());
        assert!(!submission.payload().document_enabled);
        assert_eq!(submission.payload().aadhaar_number, "234567890123");
    }

    #[test]
    fn test_single_label_email_domain_accepted() {
        let mut form = filled();
        form.set("email", "ramesh@localhost").unwrap();
        let submission = form.submission().unwrap();
        assert_eq!(submission.payload().email, "ramesh@localhost");

        form.set("email", "ramesh@").unwrap();
        assert!(matches!(
            form.submission(),
            Err(SiteError::Validation { field: "email", .. })
        ));
    }

    #[test]
    fn test_toggles_leave_other_fields_alone() {
        let mut form = filled();
        form.set("aadharNo", "234567890123").unwrap();
        form.attach("upload712Document", Some(pdf())).unwrap();
        let before = form.clone();

        form.toggle_aadhaar();
        assert!(form.aadhaar_enabled);
        form.toggle_document();
        assert!(form.document_enabled);
        form.toggle_aadhaar();
        assert!(!form.aadhaar_enabled);

        assert_eq!(form.full_name, before.full_name);
        assert_eq!(form.phone_number, before.phone_number);
        assert_eq!(form.aadhaar_number, "234567890123");
        assert_eq!(form.document, before.document);
        assert_eq!(form.consent, before.consent);
    }

    #[test]
    fn test_consent_required() {
        let mut form = filled();
        form.set_checked("consent", false).unwrap();
        assert!(matches!(form.submission(), Err(SiteError::ConsentRequired)));
    }

    #[test]
    fn test_aadhaar_checked_only_when_enabled() {
        let mut form = filled();
        form.set("aadharNo", "1234").unwrap();
        assert!(form.submission().is_ok());
        assert_eq!(form.payload().aadhaar_number, "1234");

        form.set_checked("enableAadhar", true).unwrap();
        assert!(matches!(
            form.submission(),
            Err(SiteError::Validation { field: "aadharNo", .. })
        ));
    }

    #[test]
    fn test_text_fields_stringify_booleans() {
        let mut form = filled();
        form.toggle_document();
        form.attach("upload712Document", Some(pdf())).unwrap();

        let fields = form.submission().unwrap().text_fields().unwrap();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };
        assert_eq!(get("agreedToTerms"), Some("true"));
        assert_eq!(get("aadhaarEnabled"), Some("false"));
        assert_eq!(get("documentEnabled"), Some("true"));
        assert_eq!(get("query"), Some(""));
        assert_eq!(fields.len(), 14);
    }

    #[test]
    fn test_apply_draft() {
        let draft = EnrollDialogForm {
            name: "Sita Devi".into(),
            mobile: "+91 9876543210".into(),
            district: "Pune".into(),
            taluka: "Haveli".into(),
            village: "Wagholi".into(),
            fpc_option: "self_fpc".into(),
            farm_detail: "2 acres, irrigated".into(),
            aadhaar: "234567890123".into(),
            aadhaar_file: None,
            seven_twelve_file: Some(pdf()),
        };

        let mut form = EnrollForm::for_package(PackageKey::Basic);
        form.apply_draft(&draft);

        assert_eq!(form.full_name, "Sita Devi");
        assert_eq!(form.phone_number, "9876543210");
        assert_eq!(form.district_village, "Pune / Haveli / Wagholi");
        assert_eq!(form.query_concern, "FPC: Self FPC\nFarm: 2 acres, irrigated");
        assert!(form.aadhaar_enabled);
        assert!(form.document_enabled);
        assert_eq!(form.plan, PackageKey::Basic);
        assert!(!form.consent);
    }

    #[test]
    fn test_apply_draft_over_filled_form() {
        let mut form = filled();
        form.set("email", "ramesh@example.com").unwrap();
        form.set("queryConcern", "Soil testing").unwrap();
        let id = form.internal_user_id.clone();

        let draft = EnrollDialogForm {
            name: " Sita Devi ".into(),
            mobile: "09876500000".into(),
            district: "Nashik".into(),
            ..Default::default()
        };
        form.apply_draft(&draft);

        assert_eq!(form.full_name, "Sita Devi");
        assert_eq!(form.phone_number, "9876500000");
        assert_eq!(form.district_village, "Nashik");
        assert_eq!(form.query_concern, "");
        assert!(!form.aadhaar_enabled);
        assert!(!form.document_enabled);
        assert_eq!(form.email, "ramesh@example.com");
        assert_eq!(form.plan, PackageKey::Standard);
        assert!(form.consent);
        assert_eq!(form.internal_user_id, id);
    }
}
