use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sqlx::postgres::PgDatabaseError;
use tripforge_core::error::CoreError;
use tripforge_core::itinerary::VALID_ACTIVITY_TYPES;
use tripforge_core::trip::VALID_TRIP_STATUSES;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// Errors that were already classified (validation rejections, not-found
/// from the existence pre-check) pass through their variants untouched;
/// only raw [`sqlx::Error`]s go through [`classify_sqlx_error`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tripforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Storage constraints duplicate application-level validation, so their
/// violations must surface with the same taxonomy first-line validation
/// uses — callers never see engine-specific vocabulary:
///
/// - `RowNotFound` and foreign-key violations (23503) map to 404: the
///   referenced entity is gone.
/// - Not-null (23502), check (23514), and malformed-value (22P02)
///   violations map to 400, with the message restated in domain terms.
/// - Everything else, connectivity loss included, maps to 500 with a
///   sanitized message; detail goes to the server log only.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // not_null_violation
            Some("23502") => {
                let message = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(PgDatabaseError::column)
                    .map(|col| format!("{col} is required"))
                    .unwrap_or_else(|| "A required field is missing".to_string());
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            // foreign_key_violation: the referenced entity vanished
            Some("23503") => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Referenced entity no longer exists".to_string(),
            ),
            // check_violation
            Some("23514") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                let message = match constraint_message(constraint) {
                    Some(msg) => msg.to_string(),
                    None => {
                        tracing::warn!(constraint, "Unmapped check constraint violation");
                        "Request violates a data constraint".to_string()
                    }
                };
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message)
            }
            // invalid_text_representation
            Some("22P02") => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Malformed value for a typed field".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Domain-language messages for the named check constraints, so a
/// schema-level rejection reads the same as a validator rejection.
fn constraint_message(constraint: &str) -> Option<String> {
    match constraint {
        "itinerary_items_day_number_check" => {
            Some("dayNumber must be a positive integer".to_string())
        }
        "itinerary_items_activity_type_check" => Some(format!(
            "activityType must be one of: {}",
            VALID_ACTIVITY_TYPES.join(", ")
        )),
        "itinerary_items_title_check" => Some("title must not be empty".to_string()),
        "itinerary_items_cost_check" => Some("cost must be a non-negative number".to_string()),
        "trips_status_check" => Some(format!(
            "status must be one of: {}",
            VALID_TRIP_STATUSES.join(", ")
        )),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
