use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::config::settings::AppConfig;
use crate::database::DbPool;

pub mod reports;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

/// `?start=&end=`; a missing or empty value falls back to the configured range
#[derive(Debug, Default, Deserialize)]
pub struct ReportParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub end: Option<NaiveDate>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn params(uri: &str) -> Option<ReportParams> {
        let uri: Uri = uri.parse().unwrap();
        Query::<ReportParams>::try_from_uri(&uri).ok().map(|Query(p)| p)
    }

    #[test]
    fn test_empty_values_count_as_omitted() {
        let p = params("/report?start=&end=").unwrap();
        assert_eq!((p.start, p.end), (None, None));

        let p = params("/report").unwrap();
        assert_eq!((p.start, p.end), (None, None));
    }

    #[test]
    fn test_dates_are_parsed() {
        let p = params("/report?start=2023-01-01&end=").unwrap();
        assert_eq!(p.start, NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(p.end, None);
        assert!(params("/report?start=01-01-2023").is_none());
    }
}
