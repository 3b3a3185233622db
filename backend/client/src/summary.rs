//! # Registration Summary
//!
//! Local state behind the summary screen.
//!
//! ## Behavior
//! - Mounting fetches the whole list
//! - Searching filters the list held right now and replaces it, so searches compound
//! - Reset clears every filter and fetches again
//! - A failed fetch leaves the held list alone and surfaces its message
use chrono::NaiveDate;
use registry::{StoredRegistration, SummaryFilter};
use tracing::{info, warn};

use crate::api::RegistryApi;

const HEADERS: [&str; 10] = [
    "First Name",
    "Last Name",
    "Birth Date",
    "Address",
    "Country",
    "City",
    "Zip Code",
    "Land Line",
    "Cell Phone",
    "Infected",
];

#[derive(Debug, Default)]
pub struct RegistrationSummary {
    registrations: Vec<StoredRegistration>,
    filter: SummaryFilter,
    error_message: Option<String>,
}

impl RegistrationSummary {
    pub async fn mount<A: RegistryApi>(api: &A) -> Self {
        let mut summary = Self::default();
        summary.fetch(api).await;

        summary
    }

    pub async fn fetch<A: RegistryApi>(&mut self, api: &A) {
        match api.fetch_summary().await {
            Ok(registrations) => {
                info!("Fetched {} registrations", registrations.len());
                self.registrations = registrations;
                self.error_message = None;
            }
            Err(e) => {
                warn!("Failed to fetch registrations: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn registrations(&self) -> &[StoredRegistration] {
        &self.registrations
    }

    pub fn filter(&self) -> &SummaryFilter {
        &self.filter
    }

    pub fn set_start_date(&mut self, start_date: Option<NaiveDate>) {
        self.filter.start_date = start_date;
    }

    pub fn set_end_date(&mut self, end_date: Option<NaiveDate>) {
        self.filter.end_date = end_date;
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filter.city = city.into();
    }

    pub fn search(&mut self) {
        let registrations = std::mem::take(&mut self.registrations);
        self.registrations = self.filter.apply(registrations);
    }

    pub async fn reset<A: RegistryApi>(&mut self, api: &A) {
        self.filter = SummaryFilter::default();
        self.fetch(api).await;
    }

    pub fn render(&self) -> String {
        let rows: Vec<[String; 10]> = self.registrations.iter().map(row).collect();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut table = String::new();
        push_line(&mut table, HEADERS.iter().copied(), &widths);

        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        push_line(&mut table, rule.iter().map(String::as_str), &widths);

        for row in &rows {
            push_line(&mut table, row.iter().map(String::as_str), &widths);
        }

        table
    }
}

fn row(stored: &StoredRegistration) -> [String; 10] {
    let registration = &stored.registration;

    [
        registration.first_name.clone(),
        registration.last_name.clone(),
        registration
            .birth_date
            .map(|date| date.to_string())
            .unwrap_or_default(),
        registration.address.clone(),
        stored.country.clone(),
        registration.city.clone(),
        registration.zip_code.clone(),
        registration.land_line.clone(),
        registration.cell_phone.clone(),
        if registration.infected { "Yes" } else { "No" }.to_string(),
    ]
}

fn push_line<'a>(table: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();

    table.push_str(line.join(" | ").trim_end());
    table.push('\n');
}

#[cfg(test)]
mod tests {
    use registry::Registration;

    use super::*;
    use crate::mock::MockApi;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn stored(
        id: u64,
        first_name: &str,
        city: &str,
        birth_date: Option<NaiveDate>,
    ) -> StoredRegistration {
        StoredRegistration::new(
            id,
            Registration {
                first_name: first_name.to_string(),
                selected_country: "Israel".to_string(),
                city: city.to_string(),
                birth_date,
                infected: id % 2 == 0,
                ..Default::default()
            },
        )
    }

    fn api() -> MockApi {
        MockApi::with_registrations(vec![
            stored(1, "Anna", "Haifa", date(1970, 5, 5)),
            stored(2, "Boris", "Eilat", date(1985, 7, 7)),
            stored(3, "Chen", "haifa", date(1995, 9, 9)),
        ])
    }

    fn names(summary: &RegistrationSummary) -> Vec<&str> {
        summary
            .registrations()
            .iter()
            .map(|stored| stored.registration.first_name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_mount_fetches() {
        let api = api();
        let summary = RegistrationSummary::mount(&api).await;

        assert_eq!(api.fetch_count(), 1);
        assert_eq!(names(&summary), vec!["Anna", "Boris", "Chen"]);
    }

    #[tokio::test]
    async fn test_city_search_case_insensitive() {
        let api = api();
        let mut summary = RegistrationSummary::mount(&api).await;

        summary.set_city("HAIFA");
        summary.search();

        assert_eq!(names(&summary), vec!["Anna", "Chen"]);
    }

    #[tokio::test]
    async fn test_searches_compound() {
        let api = api();
        let mut summary = RegistrationSummary::mount(&api).await;

        summary.set_city("Eilat");
        summary.search();
        assert_eq!(names(&summary), vec!["Boris"]);

        summary.set_city("Haifa");
        summary.search();
        assert!(summary.registrations().is_empty());
        assert_eq!(api.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_reset_refetches() {
        let api = api();
        let mut summary = RegistrationSummary::mount(&api).await;

        summary.set_start_date(date(1980, 1, 1));
        summary.set_end_date(date(1990, 1, 1));
        summary.search();
        assert_eq!(names(&summary), vec!["Boris"]);

        summary.reset(&api).await;

        assert_eq!(api.fetch_count(), 2);
        assert_eq!(summary.filter(), &SummaryFilter::default());
        assert_eq!(names(&summary), vec!["Anna", "Boris", "Chen"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_list() {
        let api = api();
        let mut summary = RegistrationSummary::mount(&api).await;

        let offline = MockApi {
            offline: true,
            ..Default::default()
        };
        summary.reset(&offline).await;

        assert_eq!(names(&summary), vec!["Anna", "Boris", "Chen"]);
        assert_eq!(
            summary.error_message(),
            Some("Network response was not ok (503): offline")
        );

        summary.reset(&api).await;
        assert_eq!(summary.error_message(), None);
    }

    #[tokio::test]
    async fn test_mount_offline_surfaces_message() {
        let offline = MockApi {
            offline: true,
            ..Default::default()
        };
        let summary = RegistrationSummary::mount(&offline).await;

        assert!(summary.registrations().is_empty());
        assert!(summary.error_message().is_some());
    }

    #[tokio::test]
    async fn test_render() {
        let api = api();
        let summary = RegistrationSummary::mount(&api).await;

        let table = summary.render();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("First Name | Last Name"));
        assert!(lines[0].ends_with("Infected"));
        assert!(lines[1].starts_with("----------"));
        assert!(lines[3].starts_with("Boris"));
        assert!(lines[3].contains("1985-07-07"));
        assert!(lines[3].ends_with("Yes"));
        assert!(lines[2].ends_with("No"));
    }
}
