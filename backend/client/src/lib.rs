//! # Registration Client
//!
//! The two screens of the vaccination registration system, without the page.
//!
//! - [`form::RegistrationForm`]: collects and validates a citizen's details, posts them
//! - [`summary::RegistrationSummary`]: fetches registrations, filters by birth date and city
//!
//! Screens are independent. Each holds its own state and re-fetches what it needs
//! through a [`api::RegistryApi`].

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod summary;

#[cfg(test)]
mod mock;
