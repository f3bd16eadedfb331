//! Monitoring switch
//!
//! A single persisted flag gates all forwarding. While it is off, inbound
//! messages are ignored without reading any rules.

mod service;

pub use service::MonitoringControl;
