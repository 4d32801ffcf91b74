use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

/// A single rejected field from validating an insertable payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, "must not be empty")
    }
}

#[derive(Debug, ThisError)]
pub enum FolioError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("database error: {0}")]
    Database(SqlxError),
}

/// Classify sqlx failures once, at the boundary: writes the store actively
/// rejected become `Constraint`, failures to reach the store at all become
/// `StorageUnavailable`, everything else stays a generic database error.
impl From<SqlxError> for FolioError {
    fn from(e: SqlxError) -> Self {
        match &e {
            SqlxError::Database(db)
                if db.is_unique_violation()
                    || db.is_check_violation()
                    || db.is_foreign_key_violation() =>
            {
                FolioError::Constraint(db.message().to_string())
            }
            SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
                FolioError::StorageUnavailable(e.to_string())
            }
            _ => FolioError::Database(e),
        }
    }
}

impl IntoResponse for FolioError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            FolioError::Validation(fields) => {
                let body = ApiErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "One or more fields failed validation.".to_string(),
                    fields,
                };
                (StatusCode::BAD_REQUEST, body)
            }
            FolioError::Constraint(msg) => {
                let body = ApiErrorBody {
                    code: "CONSTRAINT_VIOLATION".to_string(),
                    message: format!("The store rejected the write: {msg}"),
                    fields: Vec::new(),
                };
                (StatusCode::CONFLICT, body)
            }
            FolioError::StorageUnavailable(msg) => {
                error!(error = %msg, "storage unreachable");
                let body = ApiErrorBody {
                    code: "STORAGE_UNAVAILABLE".to_string(),
                    message: "The data store is currently unavailable.".to_string(),
                    fields: Vec::new(),
                };
                (StatusCode::SERVICE_UNAVAILABLE, body)
            }
            FolioError::Database(e) => {
                error!(error = %e, "database operation failed");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    fields: Vec::new(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
