//! Mapping of domain and request errors onto HTTP responses

use actix_web::{
    error::{JsonPayloadError, PathError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use std::collections::HashMap;

use sf_core::errors::DomainError;
use sf_shared::{error_codes, ErrorResponse, IntoErrorResponse};

/// Error type returned by every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body failed `validator` checks
    #[error("Invalid request data")]
    InvalidRequest(#[from] validator::ValidationErrors),

    /// Request body could not be parsed
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A path segment such as a rule id could not be parsed
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

impl ApiError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            ApiError::Domain(error) => error.to_error_response(),
            ApiError::InvalidRequest(errors) => {
                let fields: HashMap<String, Vec<String>> = errors
                    .field_errors()
                    .into_iter()
                    .map(|(field, errors)| {
                        let messages = errors
                            .iter()
                            .map(|e| {
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            })
                            .collect();
                        (field.to_string(), messages)
                    })
                    .collect();
                ErrorResponse::new(error_codes::VALIDATION_ERROR, self.to_string()).add_detail("fields", fields)
            }
            ApiError::MalformedBody(_) | ApiError::InvalidPath(_) => {
                ErrorResponse::new(error_codes::BAD_REQUEST, self.to_string())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => match error {
                DomainError::Validation(_) => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::StoreRead { .. }
                | DomainError::StoreWrite { .. }
                | DomainError::Settings { .. } => StatusCode::SERVICE_UNAVAILABLE,
                DomainError::Send(_) | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidRequest(_) | ApiError::MalformedBody(_) | ApiError::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        HttpResponse::build(status).json(self.to_error_response())
    }
}

/// `JsonConfig` error handler answering with an `ErrorResponse` body
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::MalformedBody(err.to_string()).into()
}

/// `PathConfig` error handler answering with an `ErrorResponse` body
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidPath(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::from(ValidationError::DestinationRequired), StatusCode::BAD_REQUEST),
            (DomainError::rule_not_found(7), StatusCode::NOT_FOUND),
            (DomainError::StoreRead { message: "x".into() }, StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::StoreWrite { message: "x".into() }, StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::Settings { message: "x".into() }, StatusCode::SERVICE_UNAVAILABLE),
            (DomainError::Internal { message: "x".into() }, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status_code(), expected);
        }
    }

    #[test]
    fn test_destination_required_body() {
        let error = ApiError::from(DomainError::from(ValidationError::DestinationRequired));
        let body = error.to_error_response();

        assert_eq!(body.error, error_codes::DESTINATION_REQUIRED);
        assert_eq!(body.message, "Forward destination required");
    }

    #[test]
    fn test_invalid_path_is_bad_request() {
        let error = ApiError::InvalidPath("invalid digit found in string".into());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_error_response().error, error_codes::BAD_REQUEST);
    }
}
