//! # SMS Forwarder API
//!
//! Actix-web daemon exposing the inbound SMS webhook, forwarding rule
//! management and the monitoring switch.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use app::{configure, AppState};
