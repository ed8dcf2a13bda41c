use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

/// Error body. `error` is omitted for `NotFound`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) = err {
            return AppError::NotFound;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                AppError::ConstraintViolation(msg)
            }
            _ => AppError::Internal(err.into()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() || db.is_foreign_key_violation() {
                return AppError::ConstraintViolation(db.message().to_string());
            }
        }
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound,
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort_unstable();
        AppError::BadRequest(format!("invalid field(s): {}", fields.join(", ")))
    }
}

// Rejection texts quote the offending input, so only fixed messages reach the client.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "json body rejected");
        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => "Content-Type must be application/json",
            JsonRejection::JsonSyntaxError(_) => "request body is not valid JSON",
            JsonRejection::JsonDataError(_) => {
                "request body is missing a required field or has a mistyped one"
            }
            _ => "request body could not be read",
        };
        AppError::BadRequest(message.into())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "path rejected");
        AppError::BadRequest("path parameter is malformed".into())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "query rejected");
        AppError::BadRequest("query string is malformed".into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::NotFound => ErrorBody {
                message: self.to_string(),
                error: None,
            },
            AppError::BadRequest(detail) | AppError::ConstraintViolation(detail) => {
                tracing::warn!(status = %status, error = %detail, "request rejected");
                ErrorBody {
                    message: self.to_string(),
                    error: Some(detail.clone()),
                }
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "internal error");
                ErrorBody {
                    message: self.to_string(),
                    error: Some("unexpected storage or server failure".to_string()),
                }
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use validator::Validate;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_has_message_only() {
        let (status, body) = body_json(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "Not Found" }));
    }

    #[tokio::test]
    async fn constraint_violation_maps_to_conflict() {
        let err = AppError::ConstraintViolation("duplicate key".into());
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "duplicate key");
    }

    #[tokio::test]
    async fn internal_error_does_not_leak_details() {
        let err = AppError::Internal(anyhow::anyhow!("password=hunter2 connection refused"));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("hunter2"));
    }

    #[test]
    fn record_not_found_is_not_found() {
        let err: AppError = DbErr::RecordNotFound("users".into()).into();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn other_db_errors_are_internal() {
        let err: AppError = DbErr::Custom("boom".into()).into();
        assert!(matches!(err, AppError::Internal(_)));

        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn validation_errors_name_fields_not_values() {
        #[derive(Validate)]
        struct Probe {
            #[validate(email)]
            email: String,
        }

        let probe = Probe {
            email: "not-an-email".into(),
        };
        let err: AppError = probe.validate().unwrap_err().into();
        match err {
            AppError::BadRequest(msg) => {
                assert_eq!(msg, "invalid field(s): email");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
