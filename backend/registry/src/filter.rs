//! # Summary Filter
//!
//! Birth date range and city filters over a list of stored registrations.
//!
//! - Date range is inclusive and only applies when both bounds are set.
//!   Bounds are widened to the start of the first day and the end of the last.
//! - City is an exact, case-insensitive match. Empty means no city filter.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::StoredRegistration;

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("invalid end of day"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(END_OF_DAY),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let moment = date.and_time(NaiveTime::MIN);

        self.start <= moment && moment <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub city: String,
}

impl SummaryFilter {
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date_range().is_none() && self.city.is_empty()
    }

    pub fn matches(&self, stored: &StoredRegistration) -> bool {
        if let Some(range) = self.date_range() {
            match stored.registration.birth_date {
                Some(date) if range.contains(date) => {}
                _ => return false,
            }
        }

        self.city.is_empty() || stored.registration.city.to_lowercase() == self.city.to_lowercase()
    }

    pub fn apply(&self, registrations: Vec<StoredRegistration>) -> Vec<StoredRegistration> {
        if self.is_empty() {
            return registrations;
        }

        registrations
            .into_iter()
            .filter(|stored| self.matches(stored))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Registration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stored(id: u64, city: &str, birth_date: Option<NaiveDate>) -> StoredRegistration {
        StoredRegistration::new(
            id,
            Registration {
                city: city.to_string(),
                birth_date,
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<StoredRegistration> {
        vec![
            stored(1, "Haifa", Some(date(1980, 1, 1))),
            stored(2, "Tel Aviv", Some(date(1990, 6, 15))),
            stored(3, "haifa", Some(date(2000, 12, 31))),
            stored(4, "Eilat", None),
        ]
    }

    fn ids(registrations: &[StoredRegistration]) -> Vec<u64> {
        registrations.iter().map(|stored| stored.id).collect()
    }

    #[test]
    fn test_range_inclusive() {
        let range = DateRange::new(date(1990, 6, 15), date(2000, 12, 31));
        assert!(range.contains(date(1990, 6, 15)));
        assert!(range.contains(date(2000, 12, 31)));
        assert!(!range.contains(date(1990, 6, 14)));
        assert!(!range.contains(date(2001, 1, 1)));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(1990, 6, 15), date(1990, 6, 15));
        assert!(range.contains(date(1990, 6, 15)));
    }

    #[test]
    fn test_city_case_insensitive() {
        let filter = SummaryFilter {
            city: "HAIFA".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&filter.apply(sample())), vec![1, 3]);
    }

    #[test]
    fn test_city_exact() {
        let filter = SummaryFilter {
            city: "Tel".to_string(),
            ..Default::default()
        };

        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_date_and_city() {
        let filter = SummaryFilter {
            start_date: Some(date(1985, 1, 1)),
            end_date: Some(date(2000, 12, 31)),
            city: "haifa".to_string(),
        };

        assert_eq!(ids(&filter.apply(sample())), vec![3]);
    }

    #[test]
    fn test_missing_birth_date_excluded() {
        let filter = SummaryFilter {
            start_date: Some(date(1900, 1, 1)),
            end_date: Some(date(2100, 1, 1)),
            ..Default::default()
        };

        assert_eq!(ids(&filter.apply(sample())), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_bound_ignored() {
        let filter = SummaryFilter {
            start_date: Some(date(1995, 1, 1)),
            ..Default::default()
        };

        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(sample())), vec![1, 2, 3, 4]);
    }
}
