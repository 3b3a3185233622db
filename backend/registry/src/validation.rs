//! # Validation
//!
//! Rules a registration must pass before it is submitted.
//!
//! Required fields are checked first in form order, then the format rules:
//! names, address, zip code, landline, cellphone. Only the first failure is
//! reported.
use std::{fmt, sync::LazyLock};

use regex::Regex;
use thiserror::Error;

use crate::{countries::has_city, models::Registration};

static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]*$").unwrap());

const CELL_PHONE_PREFIX: &str = "05";
const CELL_PHONE_TOKENS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    BirthDate,
    Address,
    Country,
    City,
    LandLine,
    CellPhone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::BirthDate => "Birth date",
            Field::Address => "Address",
            Field::Country => "Country",
            Field::City => "City",
            Field::LandLine => "Landline number",
            Field::CellPhone => "Cellular phone number",
        };

        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(Field),

    #[error("Please select a city from the selected country.")]
    UnknownCity,

    #[error("First and last name can contain only English letters.")]
    Name,

    #[error("Address needs to be in the format of \"Street / Home Number\".")]
    Address,

    #[error("Zip code can only contain digits.")]
    ZipCode,

    #[error("Landline number can only contain digits.")]
    LandLine,

    #[error("Cellular phone number needs to be in the format of \"05 XX XX XX XX\".")]
    CellPhone,
}

pub fn validate(registration: &Registration) -> Result<(), ValidationError> {
    check_required(registration)?;

    if !has_city(&registration.selected_country, &registration.city) {
        return Err(ValidationError::UnknownCity);
    }

    if !is_name(&registration.first_name) || !is_name(&registration.last_name) {
        return Err(ValidationError::Name);
    }

    if !is_address(&registration.address) {
        return Err(ValidationError::Address);
    }

    let zip_code = registration.zip_code.trim();
    if !zip_code.is_empty() && !is_numeric(zip_code) {
        return Err(ValidationError::ZipCode);
    }

    if !is_numeric(registration.land_line.trim()) {
        return Err(ValidationError::LandLine);
    }

    if !is_cell_phone(&registration.cell_phone) {
        return Err(ValidationError::CellPhone);
    }

    Ok(())
}

fn check_required(registration: &Registration) -> Result<(), ValidationError> {
    let text_fields = [
        (Field::FirstName, &registration.first_name),
        (Field::LastName, &registration.last_name),
    ];
    for (field, value) in text_fields {
        if value.trim().is_empty() {
            return Err(ValidationError::Required(field));
        }
    }

    if registration.birth_date.is_none() {
        return Err(ValidationError::Required(Field::BirthDate));
    }

    let text_fields = [
        (Field::Address, &registration.address),
        (Field::Country, &registration.selected_country),
        (Field::City, &registration.city),
        (Field::LandLine, &registration.land_line),
        (Field::CellPhone, &registration.cell_phone),
    ];
    for (field, value) in text_fields {
        if value.trim().is_empty() {
            return Err(ValidationError::Required(field));
        }
    }

    Ok(())
}

pub fn is_name(input: &str) -> bool {
    NAME.is_match(input)
}

/// `Street / Number`: exactly one slash, a street, and a numeric house number.
pub fn is_address(input: &str) -> bool {
    let parts: Vec<&str> = input.split('/').collect();

    parts.len() == 2 && !parts[0].trim().is_empty() && is_numeric(parts[1].trim())
}

/// Five single-space separated tokens: `05` then four numeric groups.
pub fn is_cell_phone(input: &str) -> bool {
    let tokens: Vec<&str> = input.split(' ').collect();

    tokens.len() == CELL_PHONE_TOKENS
        && tokens[0] == CELL_PHONE_PREFIX
        && tokens[1..].iter().all(|token| is_numeric(token))
}

pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}
