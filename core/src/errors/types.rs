//! Validation and send error types
//!
//! Validation errors are shown to the person editing rules, so their
//! messages are written for that audience. Send errors describe one failed
//! forward and never cross the inbound message boundary.

use thiserror::Error;

/// Rule input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Forward destination required")]
    DestinationRequired,

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::DestinationRequired => "forward_to_number",
            ValidationError::InvalidFormat { field } => field,
        }
    }
}

/// Outbound send failures for a single forward attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("Failed to send SMS to {destination}: {reason}")]
    Transport { destination: String, reason: String },

    #[error("Nothing to send: message produced no parts")]
    EmptyMessage,
}

impl SendError {
    /// Transport failure for a destination
    pub fn transport(destination: impl Into<String>, reason: impl ToString) -> Self {
        SendError::Transport {
            destination: destination.into(),
            reason: reason.to_string(),
        }
    }
}
