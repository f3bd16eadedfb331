//! # SMS Forwarder Core
//!
//! Core forwarding logic and domain layer for the SMS forwarder.
//! This crate contains the forwarding rule entity and matcher, the
//! repository and transport interfaces, the forwarding engine and the
//! error types that every other layer builds on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
