use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(notification) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "validation_error",
                "message": "entity validation failed",
                "errors": notification.entries(),
            })),
        )
            .into_response(),
        DomainError::NotFound { .. } => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        DomainError::InvalidId(_) => json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string()),
        DomainError::Internal(_) => {
            tracing::error!(error = %err, "repository failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "internal error",
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
