use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body a successful create answers with, as a JSON string.
pub const SUCCESS_SENTINEL: &str = "Added Successfully";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Conditions {
    pub diabetes: bool,
    pub cardiovascular: bool,
    pub allergies: bool,
    pub other: String,
}

/// Client authored registration, exactly what the form posts.
///
/// `birth_date` is optional only because an untouched form has none; the
/// validation rules refuse to submit without it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: String,
    pub selected_country: String,
    pub city: String,
    pub zip_code: String,
    pub land_line: String,
    pub cell_phone: String,
    pub infected: bool,
    pub conditions: Conditions,
}

/// Registration as persisted and listed by the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredRegistration {
    pub id: u64,
    #[serde(default)]
    pub country: String,
    #[serde(flatten)]
    pub registration: Registration,
}

impl StoredRegistration {
    /// Country is copied from the selected one at creation time.
    pub fn new(id: u64, registration: Registration) -> Self {
        Self {
            id,
            country: registration.selected_country.clone(),
            registration,
        }
    }
}
