//! HTTP request handlers.
//!
//! One module per resource family. All handlers are generic over the store
//! so the route tests can exercise them against an in-memory mock.

pub mod documents;
pub mod external;
pub mod health;
pub mod lab_tests;
pub mod medications;
pub mod observations;
pub mod patient;
pub mod referrals;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::RestError;

/// Parses a date query parameter.
///
/// Accepts a date (`2024-01-31`) or a date-time (`2024-01-31T08:30:00`);
/// anything else is a validation failure raised before any I/O.
pub(crate) fn parse_date_param(name: &str, value: &str) -> Result<NaiveDateTime, RestError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| {
            RestError::bad_request(format!(
                "Invalid {name}: expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"
            ))
        })
}

/// Parses an optional date query parameter, treating blank as absent.
pub(crate) fn parse_optional_date_param(
    name: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDateTime>, RestError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date_param(name, raw).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_date() {
        let parsed = parse_date_param("startDate", "2024-02-01").unwrap();
        assert_eq!(parsed.to_string(), "2024-02-01 00:00:00");
    }

    #[test]
    fn test_parses_date_time() {
        let parsed = parse_date_param("startDate", "2024-02-01T13:45:10").unwrap();
        assert_eq!(parsed.to_string(), "2024-02-01 13:45:10");
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_date_param("endDate", "yesterday").unwrap_err();
        assert!(err.to_string().contains("endDate"));
    }

    #[test]
    fn test_optional_blank_is_absent() {
        assert_eq!(parse_optional_date_param("d", Some("  ")).unwrap(), None);
        assert_eq!(parse_optional_date_param("d", None).unwrap(), None);
        assert!(parse_optional_date_param("d", Some("nope")).is_err());
    }
}
