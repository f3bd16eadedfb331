//! Business services containing forwarding logic and rule management use cases.

pub mod forwarding;
pub mod monitoring;
pub mod rules;

// Re-export commonly used types
pub use forwarding::{
    compose_forward_text, ForwardEvent, ForwardNotifier, ForwardingService,
    ForwardingServiceConfig, SmsTransport, TracingNotifier,
};
pub use monitoring::MonitoringControl;
pub use rules::RuleService;
