use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Raw query string of `GET /users/searchUsers`. Empty values count as absent.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserSearchQuery {
    /// Case-insensitive substring of the user name.
    pub name: Option<String>,
    /// Case-insensitive substring of the email address.
    pub email: Option<String>,
    /// Inclusive lower bound on the creation time: `YYYY-MM-DD` or RFC 3339.
    pub created_after: Option<String>,
}

impl UserSearchQuery {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn created_after(&self) -> AppResult<Option<DateTime<Utc>>> {
        non_empty(self.created_after.as_deref())
            .map(|raw| parse_created_after(raw.trim()))
            .transpose()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A bare date means midnight UTC of that day.
pub fn parse_created_after(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            AppError::BadRequest("createdAfter must be YYYY-MM-DD or an RFC 3339 timestamp".into())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bare_date_is_midnight_utc() {
        let parsed = parse_created_after("2024-01-01").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_keeps_offset() {
        let parsed = parse_created_after("2024-01-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn garbage_date_is_rejected_without_echo() {
        let err = parse_created_after("'; DROP TABLE users; --").unwrap_err();
        match err {
            AppError::BadRequest(msg) => assert!(!msg.contains("DROP")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_filters_are_absent() {
        let query = UserSearchQuery {
            name: Some("  ".into()),
            email: Some(String::new()),
            created_after: Some(String::new()),
        };
        assert_eq!(query.name(), None);
        assert_eq!(query.email(), None);
        assert_eq!(query.created_after().unwrap(), None);
    }

    #[test]
    fn surrounding_spaces_are_kept() {
        let query = UserSearchQuery {
            name: Some(" Dup".into()),
            email: Some("@corp ".into()),
            created_after: None,
        };
        assert_eq!(query.name(), Some(" Dup"));
        assert_eq!(query.email(), Some("@corp "));

        let padded_date = UserSearchQuery {
            created_after: Some(" 2024-01-01 ".into()),
            ..Default::default()
        };
        assert!(padded_date.created_after().unwrap().is_some());
    }

    #[test]
    fn query_string_uses_camel_case() {
        let query: UserSearchQuery =
            serde_json::from_str(r#"{"name":"dup","createdAfter":"2024-01-01"}"#).unwrap();
        assert_eq!(query.name(), Some("dup"));
        assert!(query.created_after().unwrap().is_some());
    }
}
