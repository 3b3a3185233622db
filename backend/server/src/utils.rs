use chrono::NaiveDate;
use registry::SummaryFilter;
use serde::Deserialize;

use crate::error::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub city: Option<String>,
}

impl SummaryQuery {
    pub fn into_filter(self) -> Result<SummaryFilter, AppError> {
        Ok(SummaryFilter {
            start_date: parse_date(self.start_date)?,
            end_date: parse_date(self.end_date)?,
            city: self.city.unwrap_or_default(),
        })
    }
}

/// Blank parameters count as absent.
fn parse_date(input: Option<String>) -> Result<Option<NaiveDate>, AppError> {
    match input.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Some)
            .map_err(|_| AppError::MalformedPayload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_dates_absent() {
        let filter = SummaryQuery {
            start_date: Some(String::new()),
            end_date: None,
            city: None,
        }
        .into_filter()
        .unwrap();

        assert_eq!(filter, SummaryFilter::default());
    }

    #[test]
    fn test_parses_dates() {
        let filter = SummaryQuery {
            start_date: Some("1990-01-01".to_string()),
            end_date: Some("1999-12-31".to_string()),
            city: Some("Haifa".to_string()),
        }
        .into_filter()
        .unwrap();

        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(1990, 1, 1));
        assert_eq!(filter.end_date, NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(filter.city, "Haifa");
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = SummaryQuery {
            start_date: Some("01/02/1990".to_string()),
            ..Default::default()
        }
        .into_filter();

        assert!(matches!(result, Err(AppError::MalformedPayload)));
    }
}
