//! Quick-enroll dialog form

use super::{option, Attachment, SelectOption};
use crate::error::{Result, SiteError};
use crate::validate;

pub const FPC_OPTIONS: [SelectOption; 3] = [
    option("", "Select an option"),
    option("self_fpc", "Self FPC"),
    option("dummy_option", "Dummy Option"),
];

/// Fields collected by the dialog before handing over to the enroll page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrollDialogForm {
    pub name: String,
    pub mobile: String,
    pub district: String,
    pub taluka: String,
    pub village: String,
    pub fpc_option: String,
    pub farm_detail: String,
    pub aadhaar: String,
    pub aadhaar_file: Option<Attachment>,
    pub seven_twelve_file: Option<Attachment>,
}

impl EnrollDialogForm {
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = match name {
            "name" => &mut self.name,
            "mobile" => &mut self.mobile,
            "district" => &mut self.district,
            "taluka" => &mut self.taluka,
            "village" => &mut self.village,
            "fpcOption" => &mut self.fpc_option,
            "farmDetail" => &mut self.farm_detail,
            "aadhar" => &mut self.aadhaar,
            _ => return Err(SiteError::UnknownField(name.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    pub fn attach(&mut self, name: &str, file: Option<Attachment>) -> Result<()> {
        match name {
            "aadharFile" => self.aadhaar_file = file,
            "sevenTwelveFile" => self.seven_twelve_file = file,
            _ => return Err(SiteError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Every input except the farm detail and the uploads is required
    pub fn validate(&self) -> Result<()> {
        validate::required("name", &self.name)?;
        validate::required("mobile", &self.mobile)?;
        if !validate::is_indian_mobile(&self.mobile) {
            return Err(SiteError::validation("mobile", "enter a valid mobile number"));
        }
        validate::required("district", &self.district)?;
        validate::required("taluka", &self.taluka)?;
        validate::required("village", &self.village)?;
        validate::required("fpcOption", &self.fpc_option)?;
        validate::required("aadhar", &self.aadhaar)?;
        validate::optional_aadhaar("aadhar", &self.aadhaar)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> EnrollDialogForm {
        let mut form = EnrollDialogForm::default();
        for (name, value) in [
            ("name", "John Doe"),
            ("mobile", "9876543210"),
            ("district", "Pune"),
            ("taluka", "Haveli"),
            ("village", "Wagholi"),
            ("fpcOption", "self_fpc"),
            ("aadhar", "234567890123"),
        ] {
            form.set(name, value).unwrap();
        }
        form
    }

    #[test]
    fn test_complete_form_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_farm_detail_optional() {
        let form = complete();
        assert!(form.farm_detail.is_empty());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_mobile_and_missing_fpc() {
        let mut form = complete();
        form.set("mobile", "5876543210").unwrap();
        assert!(matches!(
            form.validate(),
            Err(SiteError::Validation { field: "mobile", .. })
        ));

        let mut form = complete();
        form.set("fpcOption", "").unwrap();
        assert!(matches!(
            form.validate(),
            Err(SiteError::Validation { field: "fpcOption", .. })
        ));
    }

    #[test]
    fn test_mobile_fits_ten_character_input() {
        for mobile in ["7012345678", "8123456789", "9876543210"] {
            let mut form = complete();
            form.set("mobile", mobile).unwrap();
            assert!(form.validate().is_ok(), "{mobile}");
        }
        for mobile in ["987654321", "6876543210"] {
            let mut form = complete();
            form.set("mobile", mobile).unwrap();
            assert!(form.validate().is_err(), "{mobile}");
        }
    }

    #[test]
    fn test_attach_by_name() {
        let mut form = complete();
        let scan = Attachment::new("aadhaar.jpg", "image/jpeg", vec![0xFF, 0xD8]);
        form.attach("aadharFile", Some(scan.clone())).unwrap();
        assert_eq!(form.aadhaar_file, Some(scan));
        assert!(form.attach("panCard", None).is_err());
    }
}
