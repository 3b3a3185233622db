//! # Registry
//!
//! Shared model of the vaccination registration system.
//!
//! Both the server and the client screens build on these types so the JSON
//! contract between them lives in exactly one place.
//!
//! ## Contents
//! - [`models`]: the registration payload and the stored record the summary endpoint returns
//! - [`countries`]: static country to cities lookup table the form draws from
//! - [`validation`]: submission rules, first failing rule wins
//! - [`filter`]: birth date range and city filter used by the summary view

pub mod countries;
pub mod filter;
pub mod models;
pub mod validation;

pub use filter::{DateRange, SummaryFilter};
pub use models::{Conditions, Registration, SUCCESS_SENTINEL, StoredRegistration};
pub use validation::{Field, ValidationError, validate};
