use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use kitchenpos_core::DomainError;
use kitchenpos_infra::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_response(e),
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

/// Every domain rejection is a client error; the `error` code keeps the kinds apart.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let code = match &err {
        DomainError::InvalidValue(_) => "invalid_value",
        DomainError::EntityNotFound { .. } => "not_found",
        DomainError::InvalidArgument(_) => "invalid_argument",
        DomainError::InvalidId(_) => "invalid_id",
    };
    tracing::warn!(error = code, message = %err, "request rejected");
    json_error(StatusCode::BAD_REQUEST, code, err.to_string())
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
