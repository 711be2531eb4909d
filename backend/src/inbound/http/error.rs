//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`Error`](crate::domain::Error) into Actix responses here.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::StorageError;
use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::TraceId;

/// Standard error envelope returned by HTTP handlers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable error message.
    #[schema(example = "Something went wrong")]
    pub message: String,
    /// Correlation identifier for tracing this error across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary error details, e.g. field-level validation context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    /// Construct an API error from a domain failure, capturing any ambient
    /// trace identifier.
    pub fn from_domain(error: Error) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: error.details().cloned(),
        }
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            // Duplicate email surfaces as 400 to preserve the documented
            // signup contract, despite carrying the conflict code.
            ErrorCode::InvalidRequest | ErrorCode::Conflict => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        Self::from_domain(value)
    }
}

impl From<StorageError> for ApiError {
    fn from(value: StorageError) -> Self {
        Self::from_domain(map_storage_error(value))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header(("trace-id", id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            // Do not leak implementation details to clients.
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map store failures to the domain error vocabulary: unreachable backends
/// are server faults the caller may retry later, everything else is
/// internal.
pub fn map_storage_error(error: StorageError) -> Error {
    match error {
        StorageError::Connection { message } => Error::service_unavailable(message),
        StorageError::Query { message } => Error::internal(message),
    }
}

#[cfg(test)]
mod tests {
    //! Status mapping and payload redaction coverage.
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::conflict("exists"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("no"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(ApiError::from_domain(error).status_code(), status);
    }

    #[rstest]
    #[case(StorageError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(StorageError::query("syntax"), ErrorCode::InternalError)]
    fn storage_errors_map_to_server_faults(
        #[case] error: StorageError,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(map_storage_error(error).code(), expected);
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let error =
            ApiError::from_domain(Error::internal("boom").with_details(json!({"secret": "x"})));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let payload: ApiError = serde_json::from_slice(&bytes).expect("payload");
        assert_eq!(payload.message, "Internal server error");
        assert!(payload.details.is_none());
    }

    #[actix_web::test]
    async fn client_errors_expose_details() {
        let error = ApiError::from_domain(
            Error::invalid_request("bad").with_details(json!({"field": "email"})),
        );
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body");
        let payload: ApiError = serde_json::from_slice(&bytes).expect("payload");
        assert_eq!(payload.message, "bad");
        assert_eq!(payload.details, Some(json!({"field": "email"})));
    }
}
