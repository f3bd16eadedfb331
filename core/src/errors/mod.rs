//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{SendError, ValidationError};

use sf_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

use crate::domain::entities::RuleId;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Rule store read failed: {message}")]
    StoreRead { message: String },

    #[error("Rule store write failed: {message}")]
    StoreWrite { message: String },

    #[error("Setting store unavailable: {message}")]
    Settings { message: String },

    #[error(transparent)]
    Send(#[from] SendError),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Not-found error for a forwarding rule id
    pub fn rule_not_found(id: RuleId) -> Self {
        DomainError::NotFound {
            resource: format!("forwarding rule {}", id),
        }
    }

    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation(ValidationError::DestinationRequired) => {
                error_codes::DESTINATION_REQUIRED
            }
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::StoreRead { .. } | DomainError::StoreWrite { .. } => {
                error_codes::STORE_UNAVAILABLE
            }
            DomainError::Settings { .. } => error_codes::SETTINGS_UNAVAILABLE,
            DomainError::Send(_) => error_codes::SMS_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        let response = ErrorResponse::new(self.error_code(), self.to_string());
        match self {
            DomainError::Validation(err) => response.add_detail("field", err.field()),
            _ => response,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
