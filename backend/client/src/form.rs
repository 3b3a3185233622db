//! # Registration Form
//!
//! Local state behind the registration screen.
//!
//! ## Flow
//! - Fields are edited one at a time, picking a country refreshes the offered cities
//! - Submitting clears the last message, validates, then posts
//! - First failing rule is the only message shown
//! - Success resets the whole form, failure keeps what was typed
use chrono::NaiveDate;
use registry::{Registration, countries::cities_of, validate};
use tracing::{info, warn};

use crate::{api::RegistryApi, error::ClientError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Address,
    City,
    ZipCode,
    LandLine,
    CellPhone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Diabetes,
    Cardiovascular,
    Allergies,
}

#[derive(Debug, Default)]
pub struct RegistrationForm {
    registration: Registration,
    cities: &'static [&'static str],
    error_message: Option<String>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn cities(&self) -> &'static [&'static str] {
        self.cities
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        let registration = &mut self.registration;

        match field {
            TextField::FirstName => registration.first_name = value,
            TextField::LastName => registration.last_name = value,
            TextField::Address => registration.address = value,
            TextField::City => registration.city = value,
            TextField::ZipCode => registration.zip_code = value,
            TextField::LandLine => registration.land_line = value,
            TextField::CellPhone => registration.cell_phone = value,
        }
    }

    /// Leaves the chosen city alone, even when the new country lacks it.
    pub fn select_country(&mut self, country: impl Into<String>) {
        self.registration.selected_country = country.into();
        self.cities = cities_of(&self.registration.selected_country);
    }

    pub fn set_birth_date(&mut self, birth_date: Option<NaiveDate>) {
        self.registration.birth_date = birth_date;
    }

    pub fn set_infected(&mut self, infected: bool) {
        self.registration.infected = infected;
    }

    pub fn set_condition(&mut self, condition: Condition, checked: bool) {
        let conditions = &mut self.registration.conditions;

        match condition {
            Condition::Diabetes => conditions.diabetes = checked,
            Condition::Cardiovascular => conditions.cardiovascular = checked,
            Condition::Allergies => conditions.allergies = checked,
        }
    }

    pub fn set_other_condition(&mut self, other: impl Into<String>) {
        self.registration.conditions.other = other.into();
    }

    pub async fn submit<A: RegistryApi>(&mut self, api: &A) -> Result<(), ClientError> {
        self.error_message = None;

        let result = match validate(&self.registration) {
            Ok(()) => api.submit(&self.registration).await,
            Err(e) => Err(e.into()),
        };

        match &result {
            Ok(()) => {
                info!("Registration added");
                self.reset();
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                self.error_message = Some(e.to_string());
            }
        }

        result
    }
}
