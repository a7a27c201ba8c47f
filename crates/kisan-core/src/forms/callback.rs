//! Callback request form

use serde::{Deserialize, Serialize};

use super::{option, SelectOption};
use crate::error::{Result, SiteError};
use crate::validate;

pub const PLAN_INTEREST_OPTIONS: [SelectOption; 5] = [
    option("", "Select a plan (Optional)"),
    option("Basic", "Basic"),
    option("Standard", "Standard"),
    option("Premium", "Premium"),
    option("Not Sure", "Not Sure"),
];

pub const CALLBACK_TIME_OPTIONS: [SelectOption; 5] = [
    option("", "Select a time (Optional)"),
    option("morning", "Morning"),
    option("afternoon", "Afternoon"),
    option("evening", "Evening"),
    option("Anytime", "Anytime"),
];

/// Callback request; serialized as-is for `POST /api/callback`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackForm {
    pub farmer_name: String,
    pub phone_number: String,
    pub plan_interested_in: String,
    pub district_village: String,
    pub preferred_callback_time: String,
    pub message_query: String,
}

impl CallbackForm {
    /// Update a field by its input name
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = match name {
            "farmerName" => &mut self.farmer_name,
            "phoneNumber" => &mut self.phone_number,
            "planInterestedIn" => &mut self.plan_interested_in,
            "districtVillage" => &mut self.district_village,
            "preferredCallbackTime" => &mut self.preferred_callback_time,
            "messageQuery" => &mut self.message_query,
            _ => return Err(SiteError::UnknownField(name.to_string())),
        };
        *slot = value.into();
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate::required("farmerName", &self.farmer_name)?;
        validate::phone("phoneNumber", &self.phone_number)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
